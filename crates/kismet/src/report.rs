//! # Audit Reports
//!
//! Statistics over the mixers and noise families, computed by lookup so
//! two runs always print the same numbers.

use kismet_hash::{avalanche_32, avalanche_64, AvalancheReport, MixAlgorithm};
use kismet_noise::{NoiseKind, NoiseProfile, ValueRange, Vec2, Vec3};

/// Every noise family, in report order.
pub const ALL_KINDS: [NoiseKind; 8] = [
    NoiseKind::Gradient,
    NoiseKind::Simplex,
    NoiseKind::Fbm,
    NoiseKind::Billow,
    NoiseKind::Ridge,
    NoiseKind::DomainWarp,
    NoiseKind::Uber,
    NoiseKind::Cellular,
];

/// Distance between neighbouring survey samples.
const SPACING: f32 = 0.173;

/// Avalanche results of one algorithm at both widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvalancheRow {
    /// 32-bit mixer.
    pub narrow: AvalancheReport,
    /// 64-bit mixer.
    pub wide: AvalancheReport,
}

/// Observed output range of one profile.
#[derive(Clone, Debug, PartialEq)]
pub struct Survey {
    /// Surveyed profile name.
    pub name: String,
    /// Surveyed family.
    pub kind: NoiseKind,
    /// Range over a 2D grid.
    pub range_2d: ValueRange,
    /// Range over a 3D grid.
    pub range_3d: ValueRange,
}

/// Avalanche statistics for every algorithm tag.
#[must_use]
pub fn avalanche_table(samples: u32, stream: u32) -> Vec<AvalancheRow> {
    MixAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            tracing::info!(%algorithm, samples, "Auditing avalanche");
            AvalancheRow {
                narrow: avalanche_32(algorithm, samples, stream),
                wide: avalanche_64(algorithm, samples, stream),
            }
        })
        .collect()
}

/// Samples `profile` over a `grid`-wide square and a `grid`-wide cube.
#[must_use]
pub fn survey(profile: &NoiseProfile, grid: u32) -> Survey {
    let mut range_2d = ValueRange::new();
    let mut range_3d = ValueRange::new();

    for y in 0..grid {
        for x in 0..grid {
            let p = Vec2::new(x as f32 * SPACING, y as f32 * SPACING);
            range_2d.observe(profile.sample_2d(p));
            for z in 0..grid {
                let p = Vec3::new(p.x, p.y, z as f32 * SPACING);
                range_3d.observe(profile.sample_3d(p));
            }
        }
    }

    tracing::debug!(
        profile = %profile.name,
        min = range_2d.min(),
        max = range_2d.max(),
        "Survey complete"
    );

    Survey {
        name: profile.name.clone(),
        kind: profile.kind,
        range_2d,
        range_3d,
    }
}

/// Surveys every family with default parameters.
#[must_use]
pub fn survey_all(seed: u32, grid: u32) -> Vec<Survey> {
    ALL_KINDS
        .iter()
        .map(|&kind| {
            let profile = NoiseProfile {
                name: format!("{kind:?}").to_lowercase(),
                seed,
                kind,
                ..NoiseProfile::default()
            };
            survey(&profile, grid)
        })
        .collect()
}
