//! Known-answer tables
//!
//! Inputs are Fp2 encodings (c1 || c0) and outputs are compressed G2 points.

use once_cell::sync::Lazy;

/// A single map-to-curve known answer
#[derive(Debug, Clone, Copy)]
pub struct MapVector {
    /// Short label shown on failure
    pub name: &'static str,
    /// Fp2 as (c0, c1) small integers
    pub input: (u64, u64),
    /// Compressed output, hex
    pub compressed: &'static str,
}

/// Compressed standard generator
pub const GENERATOR_COMPRESSED: &str = "93e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8";

/// Compressed 2·G
pub const DOUBLE_GENERATOR_COMPRESSED: &str = "aa4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c335771638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a053";

/// Simplified SWU outputs after cofactor clearing
pub const SWU_VECTORS: &[MapVector] = &[
    MapVector {
        name: "swu(0)",
        input: (0, 0),
        compressed: "8a67d12118b5a35bb02d2e86b3ebfa7e23410db93de39fb06d7025fa95e96ffa428a7a27c3ae4dd4b40bd251ac658892018320896ec9eef9d5e619848dc29ce266f413d02dd31d9b9d44ec0c79cd61f18b075ddba6d7bd20b7ff27a4b324bfce",
    },
    MapVector {
        name: "swu(1)",
        input: (1, 0),
        compressed: "a0e12b55d801607d9760f8637ac80a4fececd3eb74045b342ee3c7dddd2037e72dedccc27e9a89491d4e57bde555fead1770d4f641225e1a1c0f7d05857299763e98e47ec6355b81dd6cdaf6db6825052f71d35ede3af8b70f046474c48d712e",
    },
    MapVector {
        name: "swu(5 + 7u)",
        input: (5, 7),
        compressed: "8ed12d9484589f4f2da52cc5601c738b2d743691f27239210c530b5492f6b53bf35995cbbf09c3427291dfcc2ec0717b1404a0fde37a0b46c6475d643fc474f3d51313f33efdb308220c6084fab6ff85adf4fc06f1c7d4ef676dd6c66cdf7537",
    },
];

/// Try-and-increment outputs after cofactor clearing
pub const TI_VECTORS: &[MapVector] = &[
    MapVector {
        name: "ti(0)",
        input: (0, 0),
        compressed: "a2aa96bbfbd1af55c643aedb6f3cfb674ac254026abe73b75664be36c61f4be9d2c9a730816bd25f910e6d83fd70aebc11210fff474e1689b6bbdcd4880d8f0e69ab62ac5796a7e0614760b9f34412fca8bbd681c49d4615e891fa7ccd5b933f",
    },
    MapVector {
        name: "ti(1)",
        input: (1, 0),
        compressed: "a2aa96bbfbd1af55c643aedb6f3cfb674ac254026abe73b75664be36c61f4be9d2c9a730816bd25f910e6d83fd70aebc11210fff474e1689b6bbdcd4880d8f0e69ab62ac5796a7e0614760b9f34412fca8bbd681c49d4615e891fa7ccd5b933f",
    },
    MapVector {
        name: "ti(5 + 7u)",
        input: (5, 7),
        compressed: "b56fecd1a6831ab385dac86c10062a1704c719c496bc789e5ab175b7976198a98fb7827b7ec2374584953a4b9855ff790b6edb9ea2ba353d456b4078768e9c266ed3d540517e7d00d0c2a2b1deaa5fdeabd81bb86e41ebf4bd48a2a6cefa00ec",
    },
];

impl MapVector {
    /// The 96-byte map input
    pub fn input_bytes(&self) -> [u8; 96] {
        let mut out = [0u8; 96];
        out[40..48].copy_from_slice(&self.input.1.to_be_bytes());
        out[88..96].copy_from_slice(&self.input.0.to_be_bytes());
        out
    }

    /// The expected compressed point
    pub fn expected(&self) -> Vec<u8> {
        hex::decode(self.compressed).unwrap_or_default()
    }
}

/// Compressed encodings that every decoder must reject
pub static INVALID_COMPRESSED: Lazy<Vec<(&'static str, Vec<u8>)>> = Lazy::new(|| {
    let mut cases = Vec::new();

    let mut no_flag = hex::decode(GENERATOR_COMPRESSED).unwrap_or_default();
    no_flag[0] &= 0x7f;
    cases.push(("compression flag clear", no_flag));

    let mut inf_sign = vec![0u8; 96];
    inf_sign[0] = 0xe0;
    cases.push(("infinity with sign", inf_sign));

    let mut inf_tail = vec![0u8; 96];
    inf_tail[0] = 0xc0;
    inf_tail[95] = 1;
    cases.push(("infinity with trailing bits", inf_tail));

    let mut too_big = vec![0xffu8; 96];
    too_big[0] = 0x9f;
    cases.push(("x above modulus", too_big));

    cases.push(("short", vec![0x80u8; 95]));
    cases.push(("long", vec![0x80u8; 97]));
    cases
});
