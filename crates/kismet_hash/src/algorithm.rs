//! # Mixing Algorithm Selection
//!
//! [`MixAlgorithm`] is a plain configuration tag. Dispatch goes through a
//! single constant table of function pointers, shared by every caller
//! (folding, gradient corners, octave loops), so no call site carries its
//! own `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mix32::{self, Mixer32};
use crate::mix64::{self, Mixer64};

/// Bit-mixing algorithm selector.
///
/// Unknown raw tags and unknown names decode to [`MixAlgorithm::BitScramble`];
/// the [`Default`] is [`MixAlgorithm::BalancedMix`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
#[repr(u8)]
pub enum MixAlgorithm {
    /// Multiply/xor-shift with an additive seed.
    BitScramble = 0,
    /// Xor seed, two multiplies. Used when nothing else is specified.
    #[default]
    BalancedMix = 1,
    /// Rotate-xor rounds.
    RotationalMix = 2,
    /// One ChaCha quarter round.
    ChaChaSimple = 3,
    /// One ChaCha quarter round with an index/seed cross-term.
    ChaChaAdvanced = 4,
}

/// 32-bit strategy table, indexed by tag.
const MIXERS_32: [Mixer32; 5] = [
    mix32::bit_scramble,
    mix32::balanced_mix,
    mix32::rotational_mix,
    mix32::chacha_simple,
    mix32::chacha_advanced,
];

/// 64-bit strategy table, indexed by tag.
const MIXERS_64: [Mixer64; 5] = [
    mix64::bit_scramble,
    mix64::balanced_mix,
    mix64::rotational_mix,
    mix64::chacha_simple,
    mix64::chacha_advanced,
];

impl MixAlgorithm {
    /// Every algorithm, in tag order.
    pub const ALL: [Self; 5] = [
        Self::BitScramble,
        Self::BalancedMix,
        Self::RotationalMix,
        Self::ChaChaSimple,
        Self::ChaChaAdvanced,
    ];

    /// Decodes a raw tag. Unrecognized values fall back to `BitScramble`.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::BalancedMix,
            2 => Self::RotationalMix,
            3 => Self::ChaChaSimple,
            4 => Self::ChaChaAdvanced,
            _ => Self::BitScramble,
        }
    }

    /// Stable snake_case name, as written in profiles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BitScramble => "bit_scramble",
            Self::BalancedMix => "balanced_mix",
            Self::RotationalMix => "rotational_mix",
            Self::ChaChaSimple => "chacha_simple",
            Self::ChaChaAdvanced => "chacha_advanced",
        }
    }

    /// Decodes a name. Unrecognized names fall back to `BitScramble`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::BitScramble)
    }

    /// The 32-bit mixer for this tag.
    #[inline]
    #[must_use]
    pub const fn mixer32(self) -> Mixer32 {
        MIXERS_32[self as usize]
    }

    /// The 64-bit mixer for this tag.
    #[inline]
    #[must_use]
    pub const fn mixer64(self) -> Mixer64 {
        MIXERS_64[self as usize]
    }

    /// Mixes a 32-bit `(index, seed)` pair.
    #[inline]
    #[must_use]
    pub fn mix32(self, index: u32, seed: u32) -> u32 {
        (self.mixer32())(index, seed)
    }

    /// Mixes a 64-bit `(index, seed)` pair.
    #[inline]
    #[must_use]
    pub fn mix64(self, index: u64, seed: u64) -> u64 {
        (self.mixer64())(index, seed)
    }
}

impl fmt::Display for MixAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MixAlgorithm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for MixAlgorithm {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<MixAlgorithm> for &'static str {
    fn from(algorithm: MixAlgorithm) -> Self {
        algorithm.name()
    }
}
