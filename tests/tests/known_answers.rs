//! Known-answer tests against the published generator and the map tables

use blscore_algorithms::{G2Point, G2};
use blscore_tests::logging::init_tracing;
use blscore_tests::vectors::{
    DOUBLE_GENERATOR_COMPRESSED, GENERATOR_COMPRESSED, INVALID_COMPRESSED, SWU_VECTORS,
    TI_VECTORS,
};

#[test]
fn generator_encodings() {
    init_tracing();
    let g2 = G2::new();
    let g = g2.one();

    assert_eq!(hex::encode(g2.to_compressed(&g)), GENERATOR_COMPRESSED);
    assert_eq!(
        hex::encode(g2.to_compressed(&g2.double(&g))),
        DOUBLE_GENERATOR_COMPRESSED
    );

    let bytes = hex::decode(GENERATOR_COMPRESSED).unwrap();
    assert_eq!(g2.from_compressed(&bytes).unwrap(), g);
}

#[test]
fn swu_known_answers() {
    init_tracing();
    let mut g2 = G2::new();
    for v in SWU_VECTORS {
        let p = g2.map_to_point_swu(&v.input_bytes()).unwrap();
        assert_eq!(p.to_compressed().to_vec(), v.expected(), "{}", v.name);
    }
}

#[test]
fn try_and_increment_known_answers() {
    init_tracing();
    let g2 = G2::new();
    for v in TI_VECTORS {
        let p = g2.map_to_point_ti(&v.input_bytes()).unwrap();
        assert_eq!(p.to_compressed().to_vec(), v.expected(), "{}", v.name);
    }
}

#[test]
fn invalid_compressed_encodings_are_rejected() {
    init_tracing();
    for (name, bytes) in INVALID_COMPRESSED.iter() {
        assert!(G2Point::from_compressed(bytes).is_err(), "{}", name);
        assert!(G2Point::from_compressed_unchecked(bytes).is_err(), "{}", name);
    }
}

#[test]
fn api_error_conversion_keeps_context() {
    let err: blscore_api::Error = G2Point::from_compressed(&[0u8; 3]).unwrap_err().into();
    assert!(matches!(
        err,
        blscore_api::Error::InvalidLength {
            expected: 96,
            actual: 3,
            ..
        }
    ));
}
