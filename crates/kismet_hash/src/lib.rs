//! # KISMET Hash
//!
//! Randomness by lookup: every value is a pure function of a position and a
//! seed. There is no generator state to advance, so any number of threads may
//! query any coordinate in any order and see identical bits.
//!
//! ## Layers
//!
//! 1. [`mix32`] / [`mix64`]: the bit-mixing primitives
//! 2. [`MixAlgorithm`]: a tag plus one strategy table shared by every caller
//! 3. [`fold`]: 1-4D integer coordinates folded into a single index
//! 4. [`convert`]: raw draws mapped to `[0, 1]` and `[-1, 1]`
//! 5. [`wide`]: 64/128-bit values composed from 32-bit draws
//! 6. [`key`]: ChaCha-flavored multi-word key derivation
//!
//! ## Example
//!
//! ```rust
//! use kismet_hash::{noise_2d, to_unit, MixAlgorithm};
//!
//! let raw = noise_2d(3, 4, 1337, MixAlgorithm::BalancedMix);
//! let unit = to_unit(raw);
//! assert!((0.0..=1.0).contains(&unit));
//! assert_eq!(raw, noise_2d(3, 4, 1337, MixAlgorithm::BalancedMix));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod algorithm;
pub mod audit;
pub mod convert;
pub mod fold;
pub mod key;
pub mod mix32;
pub mod mix64;
pub mod wide;

pub use algorithm::MixAlgorithm;
pub use audit::{avalanche_32, avalanche_64, AvalancheReport};
pub use convert::{to_signed, to_signed_f64, to_signed_u64, to_unit, to_unit_f64, to_unit_u64};
pub use fold::{
    fold_2d, fold_2d_64, fold_3d, fold_3d_64, fold_4d, fold_4d_64, noise_1d, noise_1d_64,
    noise_2d, noise_2d_64, noise_3d, noise_3d_64, noise_4d, noise_4d_64,
};
pub use key::{derive_key, derive_key_64, KeyVariant};
pub use mix32::fmix32;
pub use mix64::fmix64;
pub use wide::{get_u128, get_u128_pair, get_u64};
