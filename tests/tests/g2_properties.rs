//! Property-based tests for G2 arithmetic and encodings

use blscore_algorithms::{curve_params, G2Config, G2Point, G2};
use blscore_tests::{random_points, random_scalar, seeded_rng};
use num_bigint::BigUint;
use proptest::prelude::*;

fn multiple(k: u64) -> G2Point {
    G2Point::generator().mul_scalar(&BigUint::from(k))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn compressed_round_trip(k in 1u64..) {
        let p = multiple(k);
        let back = G2Point::from_compressed(&p.to_compressed()).unwrap();
        prop_assert_eq!(back, p);
    }

    #[test]
    fn uncompressed_round_trip(k in 1u64..) {
        let p = multiple(k);
        let back = G2Point::from_uncompressed(&p.to_uncompressed()).unwrap();
        prop_assert_eq!(back, p);
    }

    #[test]
    fn scalar_addition_is_homomorphic(a in any::<u32>(), b in any::<u32>()) {
        let g = G2Point::generator();
        let sum = BigUint::from(a) + BigUint::from(b);
        prop_assert_eq!(
            g.mul_scalar(&BigUint::from(a)) + g.mul_scalar(&BigUint::from(b)),
            g.mul_scalar(&sum)
        );
    }

    #[test]
    fn wnaf_agrees_with_double_and_add(seed in any::<u64>(), window in 2usize..9) {
        let mut rng = seeded_rng(seed);
        let config = G2Config { wnaf_window: window, ..G2Config::default() };
        let mut g2 = G2::with_config(config).unwrap();
        let p = G2Point::random(&mut rng);
        let e = random_scalar(&mut rng, 32);
        prop_assert_eq!(g2.wnaf_mul(&p, &e), g2.mul_scalar(&p, &e));
    }

    #[test]
    fn multi_exp_agrees_with_naive(seed in any::<u64>(), n in 1usize..6) {
        let mut rng = seeded_rng(seed);
        let mut g2 = G2::new();
        let points = random_points(&mut rng, n);
        let scalars: Vec<BigUint> = (0..n).map(|_| random_scalar(&mut rng, 32)).collect();

        let naive: G2Point = points
            .iter()
            .zip(scalars.iter())
            .map(|(p, s)| p.mul_scalar(s))
            .sum();
        prop_assert_eq!(g2.multi_exp(&points, &scalars).unwrap(), naive);
    }

    #[test]
    fn batch_affine_preserves_points(seed in any::<u64>(), n in 1usize..8) {
        let mut rng = seeded_rng(seed);
        let g2 = G2::new();
        let original: Vec<G2Point> = random_points(&mut rng, n)
            .into_iter()
            .map(|p| p.double())
            .collect();
        let mut batch = original.clone();
        g2.affine_batch(&mut batch);
        for (a, b) in batch.iter().zip(original.iter()) {
            prop_assert!(g2.is_affine(a));
            prop_assert_eq!(a, b);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn swu_outputs_are_subgroup_points(bytes in prop::collection::vec(0u8..0x1a, 96)) {
        let mut g2 = G2::new();
        let p = g2.map_to_point_swu(&bytes).unwrap();
        prop_assert!(g2.is_affine(&p));
        prop_assert!(g2.in_correct_subgroup(&p));
    }

    #[test]
    fn try_and_increment_outputs_are_subgroup_points(seed in any::<u64>()) {
        let g2 = G2::new();
        let mut bytes = [0u8; 96];
        bytes[40..48].copy_from_slice(&seed.to_be_bytes());
        bytes[88..96].copy_from_slice(&seed.rotate_left(17).to_be_bytes());
        let p = g2.map_to_point_ti(&bytes).unwrap();
        prop_assert!(g2.in_correct_subgroup(&p));
        prop_assert!(!g2.is_zero(&p));
    }

    #[test]
    fn cofactor_clearing_keeps_subgroup_points_in_subgroup(seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let g2 = G2::new();
        let mut q = G2Point::random(&mut rng);
        g2.clear_cofactor(&mut q);
        prop_assert!(g2.in_correct_subgroup(&q));
        prop_assert!(q.mul_scalar(&curve_params().q).to_affine_coordinates().is_none());
    }
}
