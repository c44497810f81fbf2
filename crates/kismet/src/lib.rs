//! # KISMET
//!
//! Randomness by lookup and the coherent noise built on top of it.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                          KISMET                           │
//! ├───────────────────────────────────────────────────────────┤
//! │                                                           │
//! │  ┌─────────────────────┐        ┌──────────────────────┐  │
//! │  │   kismet_noise      │        │   report             │  │
//! │  │                     │<───────│                      │  │
//! │  │  • Gradient/Simplex │        │  • Avalanche table   │  │
//! │  │  • Cellular         │        │  • Range survey      │  │
//! │  │  • Fractal          │        └──────────────────────┘  │
//! │  │  • Profiles         │                                  │
//! │  └─────────┬───────────┘                                  │
//! │            │                                              │
//! │  ┌─────────v───────────┐                                  │
//! │  │   kismet_hash       │                                  │
//! │  │                     │                                  │
//! │  │  • Mixers + tags    │                                  │
//! │  │  • Folding          │                                  │
//! │  │  • Keys             │                                  │
//! │  └─────────────────────┘                                  │
//! │                                                           │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `hash`: the [`kismet_hash`] crate
//! - `noise`: the [`kismet_noise`] crate
//! - [`report`]: statistics behind the `kismet_audit` binary

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod report;

pub use kismet_hash as hash;
pub use kismet_noise as noise;

// Re-export commonly used types
pub use kismet_hash::{
    derive_key, derive_key_64, noise_1d, noise_2d, noise_3d, noise_4d, to_signed, to_unit,
    KeyVariant, MixAlgorithm,
};
pub use kismet_noise::{
    billow, cellular_2d, cellular_3d, domain_warp, fbm, gradient_2d, gradient_2d_deriv,
    gradient_3d, gradient_3d_deriv, ridge, simplex_2d, simplex_3d, uber, CellularParams,
    DistanceMetric, FractalParams, NoiseError, NoiseKind, NoiseProfile, NoiseResult, RidgeParams,
    UberParams, ValueRange, Vec2, Vec3, WarpParams,
};
pub use report::{avalanche_table, survey, survey_all, AvalancheRow, Survey};
