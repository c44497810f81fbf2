//! # Key Derivation
//!
//! Multi-word keys derived from a `(position, seed)` pair by chaining
//! ChaCha-flavored mixes. Word 0 mixes the raw inputs; each later word mixes
//! the previous word xor a distinct large prime, under the same seed.
//!
//! **Not an audited cipher.** This is a high-diffusion derivation for
//! procedural content, nothing more. Do not use it to protect secrets.

use serde::{Deserialize, Serialize};

use crate::algorithm::MixAlgorithm;

/// Per-word primes for 32-bit keys (xxHash32 primes).
pub const KEY_PRIMES: [u32; 4] = [0x9E37_79B1, 0x85EB_CA77, 0xC2B2_AE3D, 0x27D4_EB2F];

/// Per-word primes for 64-bit keys (xxHash64 primes), cycled for long keys.
pub const KEY_PRIMES_64: [u64; 5] = [
    0x9E37_79B1_85EB_CA87,
    0xC2B2_AE3D_27D4_EB4F,
    0x1656_67B1_9E37_79F9,
    0x85EB_CA77_C2B2_AE63,
    0x27D4_EB2F_1656_67C5,
];

/// Which ChaCha-flavored mixer drives the derivation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyVariant {
    /// [`MixAlgorithm::ChaChaSimple`]
    Simple,
    /// [`MixAlgorithm::ChaChaAdvanced`]
    #[default]
    Advanced,
}

impl KeyVariant {
    /// The mixing algorithm behind this variant.
    #[inline]
    #[must_use]
    pub const fn algorithm(self) -> MixAlgorithm {
        match self {
            Self::Simple => MixAlgorithm::ChaChaSimple,
            Self::Advanced => MixAlgorithm::ChaChaAdvanced,
        }
    }
}

/// Derives a four-word 32-bit key.
#[must_use]
pub fn derive_key(position: u32, seed: u32, variant: KeyVariant) -> [u32; 4] {
    let mix = variant.algorithm().mixer32();
    let mut key = [0u32; 4];
    key[0] = mix(position, seed);
    for word in 1..key.len() {
        key[word] = mix(key[word - 1] ^ KEY_PRIMES[word - 1], seed);
    }
    key
}

/// Derives an `N`-word 64-bit key.
#[must_use]
pub fn derive_key_64<const N: usize>(position: u64, seed: u64, variant: KeyVariant) -> [u64; N] {
    let mix = variant.algorithm().mixer64();
    let mut key = [0u64; N];
    let mut previous = position;
    for (word, slot) in key.iter_mut().enumerate() {
        let input = if word == 0 {
            position
        } else {
            previous ^ KEY_PRIMES_64[(word - 1) % KEY_PRIMES_64.len()]
        };
        *slot = mix(input, seed);
        previous = *slot;
    }
    key
}
