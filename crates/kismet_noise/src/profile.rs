//! # Noise Profiles
//!
//! A named noise setup loaded from TOML, so tuning never needs a rebuild.
//!
//! ```toml
//! name = "highlands"
//! seed = 1337
//! kind = "ridge"
//!
//! [fractal]
//! octaves = 6
//! frequency = 0.01
//! algorithm = "chacha_advanced"
//!
//! [ridge]
//! sharpness = 2.5
//! ```
//!
//! Every table and field is optional and falls back to the parameter
//! defaults. Profiles are validated once at load time; sampling a loaded
//! profile cannot fail.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cellular::{cellular_2d, cellular_3d, CellularParams};
use crate::error::{NoiseError, NoiseResult};
use crate::fractal::{
    billow, domain_warp, fbm, ridge, uber, FractalDomain, FractalParams, RidgeParams, UberParams,
    WarpParams,
};
use crate::gradient::{gradient_2d, gradient_3d};
use crate::math::{Vec2, Vec3};
use crate::simplex::{simplex_2d, simplex_3d};

/// Octave counts above this are rejected.
pub const MAX_OCTAVES: u32 = 32;

/// Which noise a profile evaluates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Single-octave gradient noise.
    Gradient,
    /// Single-octave simplex noise.
    Simplex,
    /// Fractal Brownian motion.
    #[default]
    Fbm,
    /// Billow fractal.
    Billow,
    /// Ridged multifractal.
    Ridge,
    /// fBm at a warped position.
    DomainWarp,
    /// Layered warp/fBm/ridge.
    Uber,
    /// Cellular F1.
    Cellular,
}

/// A complete, serializable noise setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseProfile {
    /// Display name.
    pub name: String,
    /// Base seed.
    pub seed: u32,
    /// Noise family.
    pub kind: NoiseKind,
    /// Octave loop settings; `frequency` and `algorithm` also apply to the
    /// single-octave kinds.
    pub fractal: FractalParams,
    /// Ridge shaping.
    pub ridge: RidgeParams,
    /// Domain warp pass.
    pub warp: WarpParams,
    /// Uber layering.
    pub uber: UberParams,
    /// Cellular settings.
    pub cellular: CellularParams,
}

impl Default for NoiseProfile {
    fn default() -> Self {
        Self {
            name: String::from("default"),
            seed: 0,
            kind: NoiseKind::default(),
            fractal: FractalParams::default(),
            ridge: RidgeParams::default(),
            warp: WarpParams::default(),
            uber: UberParams::default(),
            cellular: CellularParams::default(),
        }
    }
}

fn check_finite(field: &str, value: f32) -> NoiseResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NoiseError::InvalidConfig(format!("{field} must be finite, got {value}")))
    }
}

fn check_octaves(field: &str, octaves: u32) -> NoiseResult<()> {
    if octaves > MAX_OCTAVES {
        Err(NoiseError::InvalidConfig(format!(
            "{field} must be at most {MAX_OCTAVES}, got {octaves}"
        )))
    } else {
        Ok(())
    }
}

fn check_warp(prefix: &str, warp: &WarpParams) -> NoiseResult<()> {
    check_finite(&format!("{prefix}.amplitude"), warp.amplitude)?;
    check_finite(&format!("{prefix}.frequency"), warp.frequency)?;
    check_octaves(&format!("{prefix}.octaves"), warp.octaves)
}

impl NoiseProfile {
    /// Parses and validates a profile.
    ///
    /// # Errors
    ///
    /// [`NoiseError::Parse`] for malformed TOML,
    /// [`NoiseError::InvalidConfig`] for values rejected by [`Self::validate`].
    pub fn from_toml_str(source: &str) -> NoiseResult<Self> {
        let profile: Self = toml::from_str(source)?;
        if let Err(e) = profile.validate() {
            tracing::warn!(profile = %profile.name, error = %e, "Rejected noise profile");
            return Err(e);
        }
        tracing::debug!(
            profile = %profile.name,
            kind = ?profile.kind,
            algorithm = %profile.fractal.algorithm,
            "Loaded noise profile"
        );
        Ok(profile)
    }

    /// Reads, parses and validates a profile file.
    ///
    /// # Errors
    ///
    /// [`NoiseError::Io`] when the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> NoiseResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| NoiseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every parameter the samplers rely on.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> NoiseResult<()> {
        let f = &self.fractal;
        check_finite("fractal.frequency", f.frequency)?;
        check_finite("fractal.amplitude", f.amplitude)?;
        check_finite("fractal.lacunarity", f.lacunarity)?;
        check_finite("fractal.gain", f.gain)?;
        check_octaves("fractal.octaves", f.octaves)?;

        check_finite("ridge.offset", self.ridge.offset)?;
        check_finite("ridge.sharpness", self.ridge.sharpness)?;

        check_warp("warp", &self.warp)?;
        check_warp("uber.first", &self.uber.first)?;
        check_warp("uber.second", &self.uber.second)?;
        check_finite("uber.ridge_scale", self.uber.ridge_scale)?;
        check_finite("uber.ridge_mix", self.uber.ridge_mix)?;

        check_finite("cellular.frequency", self.cellular.frequency)?;
        if !(0.0..=1.0).contains(&self.cellular.jitter) {
            return Err(NoiseError::InvalidConfig(format!(
                "cellular.jitter must be within [0, 1], got {}",
                self.cellular.jitter
            )));
        }
        Ok(())
    }

    /// Octave-based kinds; `None` for the single-query ones.
    fn sample_fractal<P: FractalDomain>(&self, p: P) -> Option<f32> {
        let f = &self.fractal;
        let v = match self.kind {
            NoiseKind::Fbm => fbm(p, self.seed, f),
            NoiseKind::Billow => billow(p, self.seed, f),
            NoiseKind::Ridge => ridge(p, self.seed, f, self.ridge),
            NoiseKind::DomainWarp => domain_warp(p, self.seed, f, self.warp),
            NoiseKind::Uber => uber(p, self.seed, f, &self.uber),
            NoiseKind::Gradient | NoiseKind::Simplex | NoiseKind::Cellular => return None,
        };
        Some(v)
    }

    /// Evaluates the profile at a 2D position.
    #[must_use]
    pub fn sample_2d(&self, p: Vec2) -> f32 {
        let f = &self.fractal;
        match self.kind {
            NoiseKind::Gradient => gradient_2d(p * f.frequency, self.seed, f.algorithm),
            NoiseKind::Simplex => simplex_2d(p * f.frequency, self.seed, f.algorithm),
            NoiseKind::Cellular => cellular_2d(p, self.seed, &self.cellular).f1,
            _ => self.sample_fractal(p).unwrap_or_default(),
        }
    }

    /// Evaluates the profile at a 3D position.
    #[must_use]
    pub fn sample_3d(&self, p: Vec3) -> f32 {
        let f = &self.fractal;
        match self.kind {
            NoiseKind::Gradient => gradient_3d(p * f.frequency, self.seed, f.algorithm),
            NoiseKind::Simplex => simplex_3d(p * f.frequency, self.seed, f.algorithm),
            NoiseKind::Cellular => cellular_3d(p, self.seed, &self.cellular).f1,
            _ => self.sample_fractal(p).unwrap_or_default(),
        }
    }
}
