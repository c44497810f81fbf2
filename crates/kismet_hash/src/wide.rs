//! Wide draws composed from independent 32-bit draws.
//!
//! No new mixing logic: a `u64` is two 32-bit draws taken at decorrelated
//! indices, a `u128` is four. The most significant word comes first.

use crate::algorithm::MixAlgorithm;

/// Index distance between the component draws (the Mersenne prime `2^31 - 1`).
///
/// Must differ from the folding primes, or a wide draw at one cell would
/// reuse the narrow draw of a lattice neighbour.
pub const WIDE_STRIDE: u32 = 0x7FFF_FFFF;

#[inline]
fn component(index: u32, seed: u32, lane: u32, algorithm: MixAlgorithm) -> u32 {
    algorithm.mix32(index.wrapping_add(WIDE_STRIDE.wrapping_mul(lane)), seed)
}

/// 64-bit value from two 32-bit draws.
#[inline]
#[must_use]
pub fn get_u64(index: u32, seed: u32, algorithm: MixAlgorithm) -> u64 {
    let high = component(index, seed, 0, algorithm);
    let low = component(index, seed, 1, algorithm);
    (u64::from(high) << 32) | u64::from(low)
}

/// 128-bit value from four 32-bit draws.
#[inline]
#[must_use]
pub fn get_u128(index: u32, seed: u32, algorithm: MixAlgorithm) -> u128 {
    (0..4).fold(0u128, |acc, lane| {
        (acc << 32) | u128::from(component(index, seed, lane, algorithm))
    })
}

/// [`get_u128`] split into `(high, low)` halves.
#[inline]
#[must_use]
pub fn get_u128_pair(index: u32, seed: u32, algorithm: MixAlgorithm) -> (u64, u64) {
    let value = get_u128(index, seed, algorithm);
    ((value >> 64) as u64, value as u64)
}
