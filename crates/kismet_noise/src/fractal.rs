//! # Fractal Compositor
//!
//! Layers several octaves of a basis noise into one value.
//!
//! ## Octave Loop
//!
//! ```text
//! frequency = base_frequency, amplitude = base_amplitude
//! for i in 0..octaves:
//!     sum += shape(basis(p * frequency, mix_octave(seed, i))) * amplitude
//!     frequency *= lacunarity
//!     amplitude *= gain
//! ```
//!
//! Each octave gets its own seed from [`mix_octave`], so one base seed gives
//! decorrelated layers without any stored permutation.
//!
//! ## Variants
//!
//! - [`fbm`]: raw octave sum
//! - [`billow`]: `|v| * 2 - 1` per octave
//! - [`ridge`]: sharpened inverted magnitude, weighted by the previous octave
//! - [`domain_warp`]: fBm sampled at a position displaced by other fBm fields
//! - [`uber`]: two warp passes, fBm, minus a ridge layer

use std::ops::{Add, Mul};

use kismet_hash::mix32::GOLDEN;
use kismet_hash::{fmix32, MixAlgorithm};
use serde::{Deserialize, Serialize};

use crate::gradient::{gradient_2d, gradient_3d};
use crate::math::{Vec2, Vec3};
use crate::simplex::{simplex_2d, simplex_3d};

/// Bounds and gain deltas below this are treated as zero.
const EPSILON: f32 = 1e-6;

/// Constant offsets separating the per-axis warp fields.
const WARP_OFFSETS: [f32; 3] = [0.0, 5.2, 9.7];

/// Salt for the per-axis warp seeds.
const WARP_SALT: u32 = 0x68E3_1DA4;
/// Salt for the second warp pass of [`uber`].
const UBER_WARP_SALT: u32 = 0xB529_7A4D;
/// Salt for the ridge layer of [`uber`].
const UBER_RIDGE_SALT: u32 = 0x1B56_C4E9;

/// Per-octave seed: one finalization pass over `seed + GOLDEN * (i + 1)`.
#[inline]
#[must_use]
pub const fn mix_octave(seed: u32, octave: u32) -> u32 {
    fmix32(seed.wrapping_add(GOLDEN.wrapping_mul(octave.wrapping_add(1))))
}

/// Noise evaluated once per octave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseBasis {
    /// Perlin gradient noise.
    #[default]
    Gradient,
    /// Simplex noise.
    Simplex,
}

/// A position type the compositor can layer noise over.
pub trait FractalDomain: Copy + Add<Output = Self> + Mul<f32, Output = Self> {
    /// Samples the basis noise at this position.
    fn basis(self, seed: u32, algorithm: MixAlgorithm, basis: NoiseBasis) -> f32;

    /// All axes set to `v`.
    fn splat(v: f32) -> Self;

    /// Builds a position from one value per axis.
    fn from_axes(f: impl FnMut(usize) -> f32) -> Self;
}

impl FractalDomain for Vec2 {
    #[inline]
    fn basis(self, seed: u32, algorithm: MixAlgorithm, basis: NoiseBasis) -> f32 {
        match basis {
            NoiseBasis::Gradient => gradient_2d(self, seed, algorithm),
            NoiseBasis::Simplex => simplex_2d(self, seed, algorithm),
        }
    }

    #[inline]
    fn splat(v: f32) -> Self {
        Vec2::splat(v)
    }

    fn from_axes(mut f: impl FnMut(usize) -> f32) -> Self {
        let x = f(0);
        let y = f(1);
        Vec2::new(x, y)
    }
}

impl FractalDomain for Vec3 {
    #[inline]
    fn basis(self, seed: u32, algorithm: MixAlgorithm, basis: NoiseBasis) -> f32 {
        match basis {
            NoiseBasis::Gradient => gradient_3d(self, seed, algorithm),
            NoiseBasis::Simplex => simplex_3d(self, seed, algorithm),
        }
    }

    #[inline]
    fn splat(v: f32) -> Self {
        Vec3::splat(v)
    }

    fn from_axes(mut f: impl FnMut(usize) -> f32) -> Self {
        let x = f(0);
        let y = f(1);
        let z = f(2);
        Vec3::new(x, y, z)
    }
}

/// Octave loop configuration shared by every variant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Number of layers.
    pub octaves: u32,
    /// Frequency of the first octave.
    pub frequency: f32,
    /// Amplitude of the first octave.
    pub amplitude: f32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave.
    pub gain: f32,
    /// Divide by the geometric amplitude bound.
    pub normalize: bool,
    /// Mixer for every corner hash.
    pub algorithm: MixAlgorithm,
    /// Per-octave noise.
    pub basis: NoiseBasis,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 5,
            frequency: 1.0,
            amplitude: 1.0,
            lacunarity: 2.0,
            gain: 0.5,
            normalize: true,
            algorithm: MixAlgorithm::BalancedMix,
            basis: NoiseBasis::Gradient,
        }
    }
}

impl FractalParams {
    /// Sum of all octave amplitudes.
    ///
    /// `amplitude * (1 - gain^octaves) / (1 - gain)`, or
    /// `amplitude * octaves` when `gain` is 1.
    #[must_use]
    pub fn bound(&self) -> f32 {
        if (1.0 - self.gain).abs() < EPSILON {
            self.amplitude * self.octaves as f32
        } else {
            let octaves = i32::try_from(self.octaves).unwrap_or(i32::MAX);
            self.amplitude * (1.0 - self.gain.powi(octaves)) / (1.0 - self.gain)
        }
    }

    fn finish(&self, sum: f32) -> f32 {
        if !self.normalize {
            return sum;
        }
        let bound = self.bound();
        if bound.abs() < EPSILON {
            0.0
        } else {
            sum / bound
        }
    }
}

/// Ridge shaping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RidgeParams {
    /// Value the magnitude is subtracted from.
    pub offset: f32,
    /// Exponent applied to the inverted magnitude.
    pub sharpness: f32,
}

impl Default for RidgeParams {
    fn default() -> Self {
        Self {
            offset: 1.0,
            sharpness: 2.0,
        }
    }
}

/// One domain-warp pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpParams {
    /// Displacement scale.
    pub amplitude: f32,
    /// Frequency of the displacement fields.
    pub frequency: f32,
    /// Octaves of the displacement fields.
    pub octaves: u32,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            octaves: 3,
        }
    }
}

/// Layered "uber" noise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UberParams {
    /// Position scale of the ridge layer.
    pub ridge_scale: f32,
    /// How much ridge is subtracted from the fBm.
    pub ridge_mix: f32,
    /// First, broad warp pass.
    pub first: WarpParams,
    /// Second, finer warp pass.
    pub second: WarpParams,
    /// Ridge layer shaping.
    pub ridge: RidgeParams,
}

impl Default for UberParams {
    fn default() -> Self {
        Self {
            ridge_scale: 2.0,
            ridge_mix: 0.35,
            first: WarpParams {
                amplitude: 0.8,
                frequency: 0.5,
                octaves: 3,
            },
            second: WarpParams {
                amplitude: 0.3,
                frequency: 2.0,
                octaves: 2,
            },
            ridge: RidgeParams::default(),
        }
    }
}

#[inline]
fn accumulate<P: FractalDomain>(
    p: P,
    seed: u32,
    params: &FractalParams,
    mut shape: impl FnMut(f32) -> f32,
) -> f32 {
    let mut sum = 0.0;
    let mut frequency = params.frequency;
    let mut amplitude = params.amplitude;

    for octave in 0..params.octaves {
        let v = (p * frequency).basis(mix_octave(seed, octave), params.algorithm, params.basis);
        sum += shape(v) * amplitude;
        frequency *= params.lacunarity;
        amplitude *= params.gain;
    }

    params.finish(sum)
}

/// Fractal Brownian motion: the plain octave sum.
#[must_use]
pub fn fbm<P: FractalDomain>(p: P, seed: u32, params: &FractalParams) -> f32 {
    accumulate(p, seed, params, |v| v)
}

/// Billow: each octave folded to `|v| * 2 - 1`.
#[must_use]
pub fn billow<P: FractalDomain>(p: P, seed: u32, params: &FractalParams) -> f32 {
    accumulate(p, seed, params, |v| v.abs() * 2.0 - 1.0)
}

/// Ridged multifractal.
///
/// Each octave contributes `max(0, offset - |v|)^sharpness`, scaled by the
/// previous octave's contribution clamped to `[0, 1]`. The normalized sum is
/// mapped to `[-1, 1]`.
#[must_use]
pub fn ridge<P: FractalDomain>(p: P, seed: u32, params: &FractalParams, shape: RidgeParams) -> f32 {
    let mut weight = 1.0_f32;
    let sum = accumulate(p, seed, params, |v| {
        let r = (shape.offset - v.abs()).max(0.0).powf(shape.sharpness) * weight;
        weight = r.clamp(0.0, 1.0);
        r
    });
    sum * 2.0 - 1.0
}

/// Position displaced by one fBm field per axis.
#[must_use]
pub fn warp_position<P: FractalDomain>(
    p: P,
    seed: u32,
    params: &FractalParams,
    warp: WarpParams,
) -> P {
    let field = FractalParams {
        octaves: warp.octaves,
        frequency: warp.frequency,
        amplitude: 1.0,
        normalize: true,
        ..*params
    };
    let displacement = P::from_axes(|axis| {
        let axis_seed = fmix32(seed ^ WARP_SALT.wrapping_mul(axis as u32 + 1));
        fbm(p + P::splat(WARP_OFFSETS[axis % WARP_OFFSETS.len()]), axis_seed, &field)
    });
    p + displacement * warp.amplitude
}

/// fBm sampled at a warped position.
#[must_use]
pub fn domain_warp<P: FractalDomain>(
    p: P,
    seed: u32,
    params: &FractalParams,
    warp: WarpParams,
) -> f32 {
    fbm(warp_position(p, seed, params, warp), seed, params)
}

/// Two warp passes, fBm, and a subtracted ridge layer, clamped to `[-1, 1]`.
#[must_use]
pub fn uber<P: FractalDomain>(p: P, seed: u32, params: &FractalParams, layers: &UberParams) -> f32 {
    let warped = warp_position(p, seed, params, layers.first);
    let warped = warp_position(warped, fmix32(seed ^ UBER_WARP_SALT), params, layers.second);

    let base = fbm(warped, seed, params);
    let ridges = ridge(
        warped * layers.ridge_scale,
        fmix32(seed.wrapping_add(UBER_RIDGE_SALT)),
        params,
        layers.ridge,
    );

    (base - layers.ridge_mix * ridges).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> impl Iterator<Item = Vec3> {
        (0..400).map(|i| {
            let t = i as f32;
            Vec3::new(t * 0.173 - 20.0, t * 0.061 + 3.0, t * -0.097)
        })
    }

    #[test]
    fn test_octave_seeds_differ() {
        let seeds: std::collections::HashSet<u32> = (0..16).map(|i| mix_octave(42, i)).collect();
        assert_eq!(seeds.len(), 16);
        assert_ne!(mix_octave(42, 0), mix_octave(43, 0));
    }

    #[test]
    fn test_bound() {
        let params = FractalParams {
            octaves: 4,
            amplitude: 2.0,
            gain: 0.5,
            ..FractalParams::default()
        };
        assert!((params.bound() - 3.75).abs() < 1e-5);

        let flat = FractalParams { gain: 1.0, ..params };
        assert_eq!(flat.bound(), 8.0);
    }

    #[test]
    fn test_single_octave_is_the_basis() {
        let params = FractalParams {
            octaves: 1,
            frequency: 2.0,
            ..FractalParams::default()
        };
        let p = Vec2::new(1.3, -0.7);
        let expected = gradient_2d(p * 2.0, mix_octave(9, 0), params.algorithm);
        assert_eq!(fbm(p, 9, &params), expected);
    }

    #[test]
    fn test_zero_octaves_yield_zero() {
        let params = FractalParams {
            octaves: 0,
            ..FractalParams::default()
        };
        assert_eq!(fbm(Vec3::new(0.3, 0.4, 0.5), 1, &params), 0.0);
        assert_eq!(billow(Vec3::new(0.3, 0.4, 0.5), 1, &params), 0.0);
    }

    #[test]
    fn test_zero_gain_ridge_equals_single_octave() {
        let shape = RidgeParams::default();
        let many = FractalParams {
            octaves: 6,
            gain: 0.0,
            ..FractalParams::default()
        };
        let one = FractalParams { octaves: 1, ..many };
        for p in sample_points() {
            assert_eq!(ridge(p, 5, &many, shape), ridge(p, 5, &one, shape));
        }
    }

    #[test]
    fn test_normalized_variants_stay_bounded() {
        let params = FractalParams::default();
        let shape = RidgeParams::default();
        for p in sample_points() {
            let f = fbm(p, 77, &params);
            let b = billow(p, 77, &params);
            let r = ridge(p, 77, &params, shape);
            assert!(f.abs() <= 1.05, "fbm {f}");
            assert!(b.abs() <= 1.05, "billow {b}");
            assert!((-1.0..=1.0).contains(&r), "ridge {r}");
        }
    }

    #[test]
    fn test_simplex_basis() {
        let params = FractalParams {
            basis: NoiseBasis::Simplex,
            ..FractalParams::default()
        };
        let gradient = FractalParams::default();
        let p = Vec2::new(0.37, 1.91);
        let v = fbm(p, 3, &params);
        assert!(v.abs() <= 1.05);
        assert_ne!(v, fbm(p, 3, &gradient));
    }

    #[test]
    fn test_zero_amplitude_warp_is_identity() {
        let params = FractalParams::default();
        let warp = WarpParams {
            amplitude: 0.0,
            ..WarpParams::default()
        };
        let p = Vec3::new(1.5, -2.25, 0.75);
        assert_eq!(warp_position(p, 8, &params, warp), p);
        assert_eq!(domain_warp(p, 8, &params, warp), fbm(p, 8, &params));
    }

    #[test]
    fn test_warp_moves_points() {
        let params = FractalParams::default();
        let p = Vec2::new(0.31, 0.47);
        assert_ne!(warp_position(p, 8, &params, WarpParams::default()), p);
    }

    #[test]
    fn test_uber_is_clamped() {
        let params = FractalParams::default();
        let layered = UberParams::default();
        for p in sample_points() {
            let v = uber(p, 1234, &params, &layered);
            assert!((-1.0..=1.0).contains(&v), "uber {v}");
        }
    }
}
