//! Windowed scalar multiplication and multi-scalar multiplication
//!
//! Both algorithms need scratch tables whose size depends on the window.
//! [`Workspace`] owns them so that repeated calls reuse the allocations.

use num_bigint::BigUint;
use tracing::trace;

use super::g2::G2Point;
use crate::error::{Error, Result};

/// Reusable scratch buffers for wNAF and bucket multiplication
///
/// Window widths are taken as given; callers pass the widths checked by
/// `G2Config::validate`.
#[derive(Debug, Default, Clone)]
pub(crate) struct Workspace {
    table: Vec<G2Point>,
    digits: Vec<i64>,
    limbs: Vec<u64>,
    buckets: Vec<G2Point>,
    windows: Vec<G2Point>,
}

impl Workspace {
    /// Empty workspace; buffers grow on first use
    pub fn new() -> Workspace {
        Workspace::default()
    }

    /// Multiply `p` by the little-endian limbs `e` using a width-`window` NAF
    ///
    /// The table holds ±P, ±3P, ... ±(2^(w-1) - 1)P with the positive half
    /// starting at index 2^(w-2).
    pub fn wnaf_mul(&mut self, p: &G2Point, e: &[u64], window: usize) -> G2Point {
        let half = 1usize << (window - 2);

        self.table.clear();
        self.table.resize(half << 1, G2Point::identity());
        let dbl = p.double();
        let mut acc = *p;
        for i in 0..half {
            if i > 0 {
                acc += dbl;
            }
            self.table[half + i] = acc;
            self.table[half - 1 - i] = acc.neg();
        }

        wnaf_digits(e, window, &mut self.limbs, &mut self.digits);

        let mut q = G2Point::identity();
        let mut started = false;
        for &d in self.digits.iter().rev() {
            if started {
                q = q.double();
            }
            if d > 0 {
                started = true;
                q += self.table[half + (d as usize >> 1)];
            } else if d < 0 {
                started = true;
                q += self.table[half - 1 - ((-d) as usize >> 1)];
            }
        }
        q
    }

    /// Bucket (Pippenger) multi-scalar multiplication Σ sᵢ·Pᵢ
    ///
    /// Inputs below `small_threshold` use `small_window`; larger inputs use
    /// a window of ⌈log10 n⌉ bits, never less than one. Scalars of any size
    /// are handled exactly.
    pub fn multi_exp(
        &mut self,
        points: &[G2Point],
        scalars: &[BigUint],
        small_window: usize,
        small_threshold: usize,
    ) -> Result<G2Point> {
        if points.len() != scalars.len() {
            return Err(Error::param(
                "points/scalars",
                "point and scalar vectors should be in same length",
            ));
        }
        if points.is_empty() {
            return Ok(G2Point::identity());
        }

        let n = points.len();
        let c = if n < small_threshold {
            small_window
        } else {
            ceil_log10(n)
        }
        .max(1);
        let num_bits = scalars.iter().map(|s| s.bits()).max().unwrap_or(0) as usize;
        trace!(points = n, window = c, bits = num_bits, "G2 multi-exponentiation");

        let limbs: Vec<Vec<u64>> = scalars.iter().map(|s| s.to_u64_digits()).collect();

        self.windows.clear();
        let mut start = 0;
        while start < num_bits {
            self.buckets.clear();
            self.buckets.resize((1 << c) - 1, G2Point::identity());

            for (p, s) in points.iter().zip(limbs.iter()) {
                let digit = window_value(s, start, c);
                if digit != 0 {
                    self.buckets[digit - 1] += p;
                }
            }

            // Σ k·bucket[k-1] by a running sum from the top bucket down
            let mut running = G2Point::identity();
            let mut window_sum = G2Point::identity();
            for b in self.buckets.iter().rev() {
                running += b;
                window_sum += running;
            }
            self.windows.push(window_sum);
            start += c;
        }

        let mut acc = G2Point::identity();
        for w in self.windows.iter().rev() {
            for _ in 0..c {
                acc = acc.double();
            }
            acc += w;
        }
        Ok(acc)
    }
}

/// Width-`window` non-adjacent form of `e`, least significant digit first
///
/// Every non-zero digit is odd with |d| < 2^(window-1), and any window of
/// `window` consecutive digits holds at most one non-zero digit.
pub(crate) fn wnaf_digits(e: &[u64], window: usize, k: &mut Vec<u64>, out: &mut Vec<i64>) {
    out.clear();
    k.clear();
    k.extend_from_slice(e);
    // headroom for the carry of a negative digit
    k.push(0);

    let width = 1i64 << window;
    let half = width >> 1;
    let mask = (width - 1) as u64;

    while k.iter().any(|&limb| limb != 0) {
        if k[0] & 1 == 1 {
            let m = (k[0] & mask) as i64;
            let d = if m >= half { m - width } else { m };
            out.push(d);
            if d >= 0 {
                sub_small(k, d as u64);
            } else {
                add_small(k, (-d) as u64);
            }
        } else {
            out.push(0);
        }
        shr1(k);
    }
}

fn add_small(k: &mut [u64], v: u64) {
    let mut carry = v;
    for limb in k.iter_mut() {
        if carry == 0 {
            break;
        }
        let (s, overflow) = limb.overflowing_add(carry);
        *limb = s;
        carry = overflow as u64;
    }
}

fn sub_small(k: &mut [u64], v: u64) {
    let mut borrow = v;
    for limb in k.iter_mut() {
        if borrow == 0 {
            break;
        }
        let (s, underflow) = limb.overflowing_sub(borrow);
        *limb = s;
        borrow = underflow as u64;
    }
}

fn shr1(k: &mut [u64]) {
    let mut carry = 0u64;
    for limb in k.iter_mut().rev() {
        let next = *limb & 1;
        *limb = (*limb >> 1) | (carry << 63);
        carry = next;
    }
}

/// Bits [start, start + width) of the little-endian limbs
fn window_value(limbs: &[u64], start: usize, width: usize) -> usize {
    let idx = start / 64;
    let shift = start % 64;
    let lo = limbs.get(idx).copied().unwrap_or(0) >> shift;
    let hi = if shift + width > 64 && shift > 0 {
        limbs.get(idx + 1).copied().unwrap_or(0) << (64 - shift)
    } else {
        0
    };
    ((lo | hi) & ((1u64 << width) - 1)) as usize
}

/// Smallest c with 10^c >= n
fn ceil_log10(n: usize) -> usize {
    let mut c = 0;
    let mut pow = 1usize;
    while pow < n {
        pow = pow.saturating_mul(10);
        c += 1;
    }
    c
}
