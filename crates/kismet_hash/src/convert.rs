//! Raw integer draws to floating-point ranges.
//!
//! Division happens in `f64` so both endpoints are exact: `0 -> 0.0` and
//! `MAX -> 1.0`.

/// Maps a `u32` draw to `[0, 1]`.
#[inline]
#[must_use]
pub fn to_unit(value: u32) -> f32 {
    to_unit_f64(value) as f32
}

/// Maps a `u32` draw to `[-1, 1]`.
#[inline]
#[must_use]
pub fn to_signed(value: u32) -> f32 {
    to_unit(value) * 2.0 - 1.0
}

/// Maps a `u32` draw to `[0, 1]` in double precision.
#[inline]
#[must_use]
pub fn to_unit_f64(value: u32) -> f64 {
    f64::from(value) / f64::from(u32::MAX)
}

/// Maps a `u32` draw to `[-1, 1]` in double precision.
#[inline]
#[must_use]
pub fn to_signed_f64(value: u32) -> f64 {
    to_unit_f64(value) * 2.0 - 1.0
}

/// Maps a `u64` draw to `[0, 1]`.
#[inline]
#[must_use]
pub fn to_unit_u64(value: u64) -> f64 {
    value as f64 / u64::MAX as f64
}

/// Maps a `u64` draw to `[-1, 1]`.
#[inline]
#[must_use]
pub fn to_signed_u64(value: u64) -> f64 {
    to_unit_u64(value) * 2.0 - 1.0
}
