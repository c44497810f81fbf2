//! # Dimensional Index Folding
//!
//! Collapses 1-4 integer coordinates into a single index with large,
//! mutually non-multiple primes, then hands the index to the selected mixer.
//! There is no per-dimension mixing logic: a 3D query is a fold plus one mix.
//!
//! Signed coordinates are reinterpreted as two's complement, so negative
//! lattice cells fold just as well as positive ones.

use crate::algorithm::MixAlgorithm;

/// Multiplier for the second axis (32-bit).
pub const PRIME_Y: u32 = 198_491_317;
/// Multiplier for the third axis (32-bit).
pub const PRIME_Z: u32 = 6_542_989;
/// Multiplier for the fourth axis (32-bit).
pub const PRIME_W: u32 = 357_239;

/// Multiplier for the second axis (64-bit).
pub const PRIME_Y_64: u64 = 0x9E37_79B1_85EB_CA87;
/// Multiplier for the third axis (64-bit).
pub const PRIME_Z_64: u64 = 0xC2B2_AE3D_27D4_EB4F;
/// Multiplier for the fourth axis (64-bit).
pub const PRIME_W_64: u64 = 0x1656_67B1_9E37_79F9;

/// `x + PRIME_Y * y`
#[inline]
#[must_use]
pub const fn fold_2d(x: i32, y: i32) -> u32 {
    (x as u32).wrapping_add(PRIME_Y.wrapping_mul(y as u32))
}

/// `x + PRIME_Y * y + PRIME_Z * z`
#[inline]
#[must_use]
pub const fn fold_3d(x: i32, y: i32, z: i32) -> u32 {
    fold_2d(x, y).wrapping_add(PRIME_Z.wrapping_mul(z as u32))
}

/// `x + PRIME_Y * y + PRIME_Z * z + PRIME_W * w`
#[inline]
#[must_use]
pub const fn fold_4d(x: i32, y: i32, z: i32, w: i32) -> u32 {
    fold_3d(x, y, z).wrapping_add(PRIME_W.wrapping_mul(w as u32))
}

/// 64-bit [`fold_2d`].
#[inline]
#[must_use]
pub const fn fold_2d_64(x: i64, y: i64) -> u64 {
    (x as u64).wrapping_add(PRIME_Y_64.wrapping_mul(y as u64))
}

/// 64-bit [`fold_3d`].
#[inline]
#[must_use]
pub const fn fold_3d_64(x: i64, y: i64, z: i64) -> u64 {
    fold_2d_64(x, y).wrapping_add(PRIME_Z_64.wrapping_mul(z as u64))
}

/// 64-bit [`fold_4d`].
#[inline]
#[must_use]
pub const fn fold_4d_64(x: i64, y: i64, z: i64, w: i64) -> u64 {
    fold_3d_64(x, y, z).wrapping_add(PRIME_W_64.wrapping_mul(w as u64))
}

/// Raw 32-bit draw for a 1D lattice position.
#[inline]
#[must_use]
pub fn noise_1d(x: i32, seed: u32, algorithm: MixAlgorithm) -> u32 {
    algorithm.mix32(x as u32, seed)
}

/// Raw 32-bit draw for a 2D lattice position.
#[inline]
#[must_use]
pub fn noise_2d(x: i32, y: i32, seed: u32, algorithm: MixAlgorithm) -> u32 {
    algorithm.mix32(fold_2d(x, y), seed)
}

/// Raw 32-bit draw for a 3D lattice position.
#[inline]
#[must_use]
pub fn noise_3d(x: i32, y: i32, z: i32, seed: u32, algorithm: MixAlgorithm) -> u32 {
    algorithm.mix32(fold_3d(x, y, z), seed)
}

/// Raw 32-bit draw for a 4D lattice position.
#[inline]
#[must_use]
pub fn noise_4d(x: i32, y: i32, z: i32, w: i32, seed: u32, algorithm: MixAlgorithm) -> u32 {
    algorithm.mix32(fold_4d(x, y, z, w), seed)
}

/// Raw 64-bit draw for a 1D lattice position.
#[inline]
#[must_use]
pub fn noise_1d_64(x: i64, seed: u64, algorithm: MixAlgorithm) -> u64 {
    algorithm.mix64(x as u64, seed)
}

/// Raw 64-bit draw for a 2D lattice position.
#[inline]
#[must_use]
pub fn noise_2d_64(x: i64, y: i64, seed: u64, algorithm: MixAlgorithm) -> u64 {
    algorithm.mix64(fold_2d_64(x, y), seed)
}

/// Raw 64-bit draw for a 3D lattice position.
#[inline]
#[must_use]
pub fn noise_3d_64(x: i64, y: i64, z: i64, seed: u64, algorithm: MixAlgorithm) -> u64 {
    algorithm.mix64(fold_3d_64(x, y, z), seed)
}

/// Raw 64-bit draw for a 4D lattice position.
#[inline]
#[must_use]
pub fn noise_4d_64(x: i64, y: i64, z: i64, w: i64, seed: u64, algorithm: MixAlgorithm) -> u64 {
    algorithm.mix64(fold_4d_64(x, y, z, w), seed)
}
