//! Curve constants, big-endian hex
//!
//! Field elements are 96 hex digits (48 bytes). Fp2 constants are given as
//! `(c0, c1)` pairs.

/// Base field modulus p
pub const MODULUS_HEX: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

/// Prime order q of G1 and G2
pub const GROUP_ORDER_HEX: &str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// Effective cofactor h_eff used to clear the G2 cofactor
pub const G2_EFFECTIVE_COFACTOR_HEX: &str = "0bc69f08f2ee75b3584c6a0ea91b352888e2a8e9145ad7689986ff031508ffe1329c2f178731db956d82bf015d1212b02ec0ec69d7477c1ae954cbc06689f6a359894c0adebbf6b4e8020005aaa95551";

/// Absolute value of the curve parameter x
pub const BLS_X: u64 = 0xd201_0000_0001_0000;

/// The curve parameter x is negative
pub const BLS_X_IS_NEGATIVE: bool = true;

/// Twist coefficient b2 = 4(u + 1) of y^2 = x^3 + b2
pub const G2_B: (&str, &str) = (
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004",
);

/// x-coordinate of the G2 generator
pub const G2_GENERATOR_X: (&str, &str) = (
    "024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
    "13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e",
);

/// y-coordinate of the G2 generator
pub const G2_GENERATOR_Y: (&str, &str) = (
    "0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801",
    "0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be",
);
