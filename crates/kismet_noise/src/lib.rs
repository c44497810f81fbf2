//! # KISMET Noise
//!
//! Coherent noise built on [`kismet_hash`] lookups.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: every query is a pure function of position, seed and parameters
//! 2. **Table-free**: lattice corners are hashed on demand, no permutation arrays
//! 3. **Allocation-free**: nothing in the per-sample path touches the heap
//!
//! ## Core Components
//!
//! - [`gradient`]: Perlin-style noise with analytic derivatives
//! - [`simplex`]: 2D/3D simplex noise
//! - [`cellular`]: Worley F1/F2 search plus vein and fill masks
//! - [`fractal`]: fBm, Billow, Ridge, domain warp and layered "uber" noise
//! - [`range`]: min/max reduction over sample buffers
//! - [`profile`]: TOML-described noise setups
//!
//! ## Example
//!
//! ```rust
//! use kismet_noise::{fbm, FractalParams, Vec2};
//!
//! let params = FractalParams { octaves: 4, ..FractalParams::default() };
//! let height = fbm(Vec2::new(12.5, -3.25), 1337, &params);
//! assert!(height.abs() <= 1.05);
//! assert_eq!(height, fbm(Vec2::new(12.5, -3.25), 1337, &params));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cellular;
pub mod error;
pub mod fractal;
pub mod gradient;
pub mod math;
pub mod profile;
pub mod range;
pub mod simplex;

pub use cellular::{
    cellular_2d, cellular_3d, fill_2d, fill_3d, vein_exp, vein_linear, CellularParams,
    CellularResult2, CellularResult3, DistanceMetric,
};
pub use error::{NoiseError, NoiseResult};
pub use fractal::{
    billow, domain_warp, fbm, mix_octave, ridge, uber, warp_position, FractalDomain,
    FractalParams, NoiseBasis, RidgeParams, UberParams, WarpParams,
};
pub use gradient::{
    fade, fade_derivative, finite_difference_2d, finite_difference_3d, gradient_2d,
    gradient_2d_deriv, gradient_3d, gradient_3d_deriv,
};
pub use math::{IVec2, IVec3, Vec2, Vec3};
pub use profile::{NoiseKind, NoiseProfile, MAX_OCTAVES};
pub use range::ValueRange;
pub use simplex::{simplex_2d, simplex_3d};

pub use kismet_hash::MixAlgorithm;
