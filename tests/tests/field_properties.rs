//! Property-based tests for the field tower

use blscore_algorithms::{Fp, Fp12, Fp2, Fp6};
use blscore_tests::seeded_rng;
use num_bigint::BigUint;
use proptest::prelude::*;

fn modulus() -> BigUint {
    BigUint::parse_bytes(blscore_params::bls12_381::curve::MODULUS_HEX.as_bytes(), 16).unwrap()
}

fn fp_from(bytes: &[u8]) -> (Fp, BigUint) {
    let v = BigUint::from_bytes_be(bytes) % modulus();
    (Fp::from_biguint(&v).unwrap(), v)
}

proptest! {
    #[test]
    fn fp_matches_integer_arithmetic(a in any::<[u8; 32]>(), b in prop::collection::vec(any::<u8>(), 48)) {
        let p = modulus();
        let (x, xv) = fp_from(&a);
        let (y, yv) = fp_from(&b);

        prop_assert_eq!((x + y).to_biguint(), (&xv + &yv) % &p);
        prop_assert_eq!((x - y).to_biguint(), (&xv + &p - &yv) % &p);
        prop_assert_eq!((x * y).to_biguint(), (&xv * &yv) % &p);
    }

    #[test]
    fn fp_bytes_round_trip(a in prop::collection::vec(any::<u8>(), 48)) {
        let (x, _) = fp_from(&a);
        prop_assert_eq!(Fp::from_slice(&x.to_bytes()).unwrap(), x);
        prop_assert_eq!(Fp::from_hex(&x.to_hex()).unwrap(), x);
    }

    #[test]
    fn fp2_sqrt_of_square(seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let a = Fp2::random(&mut rng);
        let s = a.square().sqrt().unwrap();
        prop_assert!(s == a || s == -a);
    }

    #[test]
    fn tower_inverses(seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let a = Fp2::random(&mut rng);
        let b = Fp6::random(&mut rng);
        let c = Fp12::random(&mut rng);

        prop_assert_eq!(a * a.inverse(), Fp2::one());
        prop_assert_eq!(b * b.inverse(), Fp6::one());
        prop_assert_eq!(c * c.inverse(), Fp12::one());
    }

    #[test]
    fn tower_bytes_round_trip(seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let a = Fp6::random(&mut rng);
        let b = Fp12::random(&mut rng);
        prop_assert_eq!(Fp6::from_slice(&a.to_bytes()).unwrap(), a);
        prop_assert_eq!(Fp12::from_slice(&b.to_bytes()).unwrap(), b);
    }
}
