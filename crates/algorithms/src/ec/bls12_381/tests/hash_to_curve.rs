//! Map-to-curve tests

use super::super::hash_to_curve::{iso_map, swu};
use super::super::{curve_params, Fp, Fp2, G2Point, G2};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn fp2(c0: u64, c1: u64) -> Fp2 {
    Fp2::new(Fp::from_u64(c0), Fp::from_u64(c1))
}

fn compressed_hex(p: &G2Point) -> String {
    hex::encode(p.to_compressed())
}

// ============================================================================
// Simplified SWU
// ============================================================================

#[test]
fn test_swu_lands_on_isogenous_curve() {
    let params = curve_params();
    let mut rng = ChaCha20Rng::seed_from_u64(41);

    for _ in 0..10 {
        let u = Fp2::random(&mut rng);
        let (x, y) = swu(params, &u);
        assert_eq!(
            y.square(),
            x.square() * x + params.sswu_a * x + params.sswu_b
        );
        // sign of y follows sign of u
        assert_eq!(bool::from(u.sgn0()), bool::from(y.sgn0()));

        let (x, y) = iso_map(params, &x, &y);
        assert!(bool::from(G2Point::from_affine_unchecked(x, y).is_on_curve()));
    }
}

#[test]
fn test_swu_exceptional_input() {
    // u = 0 makes tv2 vanish
    let params = curve_params();
    let (x, y) = swu(params, &Fp2::zero());
    assert_eq!(x, params.sswu_b_over_za);
    assert_eq!(x * params.sswu_z * params.sswu_a, params.sswu_b);
    assert_eq!(
        y.square(),
        x.square() * x + params.sswu_a * x + params.sswu_b
    );
}

#[test]
fn test_map_to_point_swu_vectors() {
    let mut engine = G2::new();

    let p = engine.map_to_point_swu(&Fp2::zero().to_bytes()).unwrap();
    assert_eq!(
        compressed_hex(&p),
        "8a67d12118b5a35bb02d2e86b3ebfa7e23410db93de39fb06d7025fa95e96ffa428a7a27c3ae4dd4b40bd251ac658892018320896ec9eef9d5e619848dc29ce266f413d02dd31d9b9d44ec0c79cd61f18b075ddba6d7bd20b7ff27a4b324bfce"
    );

    let p = engine.map_to_point_swu(&fp2(1, 0).to_bytes()).unwrap();
    assert_eq!(
        compressed_hex(&p),
        "a0e12b55d801607d9760f8637ac80a4fececd3eb74045b342ee3c7dddd2037e72dedccc27e9a89491d4e57bde555fead1770d4f641225e1a1c0f7d05857299763e98e47ec6355b81dd6cdaf6db6825052f71d35ede3af8b70f046474c48d712e"
    );

    let p = engine.map_to_point_swu(&fp2(5, 7).to_bytes()).unwrap();
    assert_eq!(
        compressed_hex(&p),
        "8ed12d9484589f4f2da52cc5601c738b2d743691f27239210c530b5492f6b53bf35995cbbf09c3427291dfcc2ec0717b1404a0fde37a0b46c6475d643fc474f3d51313f33efdb308220c6084fab6ff85adf4fc06f1c7d4ef676dd6c66cdf7537"
    );
}

#[test]
fn test_map_to_point_swu_output_is_affine_subgroup_point() {
    let mut engine = G2::new();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for _ in 0..3 {
        let u = Fp2::random(&mut rng);
        let p = engine.map_to_point_swu(&u.to_bytes()).unwrap();
        assert!(engine.is_affine(&p));
        assert!(engine.is_on_curve(&p));
        assert!(engine.in_correct_subgroup(&p));
        assert_eq!(engine.map_to_point_swu(&u.to_bytes()).unwrap(), p);
    }
}

#[test]
fn test_map_to_point_swu_rejects_bad_input() {
    let mut engine = G2::new();
    assert!(engine.map_to_point_swu(&[0u8; 95]).is_err());
    assert!(engine.map_to_point_swu(&[0xff; 96]).is_err());
}

// ============================================================================
// Try-and-increment
// ============================================================================

#[test]
fn test_map_to_point_ti_vectors() {
    let engine = G2::new();

    let p0 = engine.map_to_point_ti(&Fp2::zero().to_bytes()).unwrap();
    let p1 = engine.map_to_point_ti(&fp2(1, 0).to_bytes()).unwrap();
    // 0 and 1 both walk up to x = 2
    assert_eq!(p0, p1);
    assert_eq!(
        compressed_hex(&p0),
        "a2aa96bbfbd1af55c643aedb6f3cfb674ac254026abe73b75664be36c61f4be9d2c9a730816bd25f910e6d83fd70aebc11210fff474e1689b6bbdcd4880d8f0e69ab62ac5796a7e0614760b9f34412fca8bbd681c49d4615e891fa7ccd5b933f"
    );

    let p = engine.map_to_point_ti(&fp2(5, 7).to_bytes()).unwrap();
    assert_eq!(
        compressed_hex(&p),
        "b56fecd1a6831ab385dac86c10062a1704c719c496bc789e5ab175b7976198a98fb7827b7ec2374584953a4b9855ff790b6edb9ea2ba353d456b4078768e9c266ed3d540517e7d00d0c2a2b1deaa5fdeabd81bb86e41ebf4bd48a2a6cefa00ec"
    );
}

#[test]
fn test_map_to_point_ti_output_in_subgroup() {
    let engine = G2::new();
    let mut rng = ChaCha20Rng::seed_from_u64(43);
    let u = Fp2::random(&mut rng);

    let p = engine.map_to_point_ti(&u.to_bytes()).unwrap();
    assert!(engine.is_on_curve(&p));
    assert!(engine.in_correct_subgroup(&p));
    assert!(!engine.is_zero(&p));
}

#[test]
fn test_map_to_point_ti_rejects_bad_input() {
    let engine = G2::new();
    assert!(engine.map_to_point_ti(&[0u8; 97]).is_err());
    assert!(engine.map_to_point_ti(&[0xff; 96]).is_err());
}
