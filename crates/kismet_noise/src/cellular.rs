//! # Cellular (Worley) Noise
//!
//! Nearest and second-nearest feature-point search.
//!
//! Every lattice cell owns one feature point, jittered away from the lattice
//! point by hashes of the cell coordinate. A query scans the 3×3 (or 3×3×3)
//! block of cells around the point and keeps the two smallest distances.
//!
//! ```text
//!   +-----+-----+-----+
//!   |  *  |   * |  *  |     * feature points
//!   +-----+-----+-----+     o query point
//!   | *   | o * |    *|
//!   +-----+-----+-----+     F1 = distance to the nearest *
//!   |   * |  *  | *   |     F2 = distance to the second nearest *
//!   +-----+-----+-----+
//! ```
//!
//! The scan order is fixed (z, then y, then x, each from -1 to 1) and a tie
//! never displaces the site already holding F1.

use kismet_hash::{noise_2d, noise_3d, to_unit, MixAlgorithm};
use serde::{Deserialize, Serialize};

use crate::math::{IVec2, IVec3, Vec2, Vec3};

/// Seed offset for the y jitter component.
const JITTER_SEED_Y: u32 = 2_654_435_761;
/// Seed offset for the z jitter component.
const JITTER_SEED_Z: u32 = 2_246_822_519;

/// Widths below this are treated as zero.
const EPSILON: f32 = 1e-6;

/// How a displacement is reduced to a distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// `√Σd²`
    #[default]
    Euclidean,
    /// `Σ|d|`
    Manhattan,
    /// `max|d|`
    Chebyshev,
}

impl DistanceMetric {
    /// Distance of a 2D displacement.
    #[inline]
    #[must_use]
    pub fn distance_2d(self, d: Vec2) -> f32 {
        match self {
            Self::Euclidean => d.length_squared().sqrt(),
            Self::Manhattan => d.x.abs() + d.y.abs(),
            Self::Chebyshev => d.x.abs().max(d.y.abs()),
        }
    }

    /// Distance of a 3D displacement.
    #[inline]
    #[must_use]
    pub fn distance_3d(self, d: Vec3) -> f32 {
        match self {
            Self::Euclidean => d.length_squared().sqrt(),
            Self::Manhattan => d.x.abs() + d.y.abs() + d.z.abs(),
            Self::Chebyshev => d.x.abs().max(d.y.abs()).max(d.z.abs()),
        }
    }

    /// Largest F1 a 2D query can produce with this metric and jitter.
    #[must_use]
    pub fn max_bound_2d(self, jitter: f32) -> f32 {
        let s = 0.5 * (1.0 + jitter);
        match self {
            Self::Euclidean => std::f32::consts::SQRT_2 * s,
            Self::Manhattan => 2.0 * s,
            Self::Chebyshev => s,
        }
    }

    /// Largest F1 a 3D query can produce with this metric and jitter.
    #[must_use]
    pub fn max_bound_3d(self, jitter: f32) -> f32 {
        let s = 0.5 * (1.0 + jitter);
        match self {
            Self::Euclidean => 3.0_f32.sqrt() * s,
            Self::Manhattan => 3.0 * s,
            Self::Chebyshev => s,
        }
    }
}

/// Cellular query configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellularParams {
    /// Input scale applied before the cell lookup.
    pub frequency: f32,
    /// How far feature points stray from their lattice point, `0..=1`.
    pub jitter: f32,
    /// Distance metric.
    pub metric: DistanceMetric,
    /// Mixer used for the jitter hashes.
    pub algorithm: MixAlgorithm,
}

impl Default for CellularParams {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            jitter: 1.0,
            metric: DistanceMetric::Euclidean,
            algorithm: MixAlgorithm::BalancedMix,
        }
    }
}

impl CellularParams {
    /// Organic, fully jittered cells.
    #[must_use]
    pub fn wormy() -> Self {
        Self {
            frequency: 4.0,
            jitter: 1.0,
            metric: DistanceMetric::Euclidean,
            ..Self::default()
        }
    }

    /// Boxy cells with mild jitter.
    #[must_use]
    pub fn blocky() -> Self {
        Self {
            frequency: 4.0,
            jitter: 0.35,
            metric: DistanceMetric::Chebyshev,
            ..Self::default()
        }
    }

    #[inline]
    fn bias(&self) -> f32 {
        (1.0 - self.jitter) * 0.5
    }

    /// Offset of a feature from its lattice point for one unit draw.
    #[inline]
    fn displace(&self, r: f32) -> f32 {
        self.bias() + self.jitter * r - 0.5
    }
}

/// Result of a 2D cellular query, in frequency-scaled space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellularResult2 {
    /// Distance to the nearest feature.
    pub f1: f32,
    /// Distance to the second nearest feature.
    pub f2: f32,
    /// The nearest feature point.
    pub feature: Vec2,
    /// Cell owning the nearest feature.
    pub cell: IVec2,
}

/// Result of a 3D cellular query, in frequency-scaled space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellularResult3 {
    /// Distance to the nearest feature.
    pub f1: f32,
    /// Distance to the second nearest feature.
    pub f2: f32,
    /// The nearest feature point.
    pub feature: Vec3,
    /// Cell owning the nearest feature.
    pub cell: IVec3,
}

impl CellularResult2 {
    /// See [`vein_linear`].
    #[must_use]
    pub fn vein_linear(&self, edge_width: f32) -> f32 {
        vein_linear(self.f1, self.f2, edge_width)
    }

    /// See [`vein_exp`].
    #[must_use]
    pub fn vein_exp(&self, sharpness: f32) -> f32 {
        vein_exp(self.f1, self.f2, sharpness)
    }

    /// See [`fill_2d`].
    #[must_use]
    pub fn fill(&self, params: &CellularParams) -> f32 {
        fill_2d(self.f1, params.metric, params.jitter)
    }
}

impl CellularResult3 {
    /// See [`vein_linear`].
    #[must_use]
    pub fn vein_linear(&self, edge_width: f32) -> f32 {
        vein_linear(self.f1, self.f2, edge_width)
    }

    /// See [`vein_exp`].
    #[must_use]
    pub fn vein_exp(&self, sharpness: f32) -> f32 {
        vein_exp(self.f1, self.f2, sharpness)
    }

    /// See [`fill_3d`].
    #[must_use]
    pub fn fill(&self, params: &CellularParams) -> f32 {
        fill_3d(self.f1, params.metric, params.jitter)
    }
}

/// Samples 2D cellular noise.
#[must_use]
pub fn cellular_2d(p: Vec2, seed: u32, params: &CellularParams) -> CellularResult2 {
    let scaled = p * params.frequency;
    let base = scaled.floor();
    let seed_y = seed.wrapping_add(JITTER_SEED_Y);

    let mut result = CellularResult2 {
        f1: f32::MAX,
        f2: f32::MAX,
        feature: Vec2::ZERO,
        cell: base,
    };

    for dy in -1..=1 {
        for dx in -1..=1 {
            let cell = base.offset(dx, dy);
            let rx = to_unit(noise_2d(cell.x, cell.y, seed, params.algorithm));
            let ry = to_unit(noise_2d(cell.x, cell.y, seed_y, params.algorithm));
            let feature = Vec2::new(
                cell.x as f32 + params.displace(rx),
                cell.y as f32 + params.displace(ry),
            );

            let d = params.metric.distance_2d(feature - scaled);
            if d < result.f1 {
                result.f2 = result.f1;
                result.f1 = d;
                result.feature = feature;
                result.cell = cell;
            } else if d < result.f2 {
                result.f2 = d;
            }
        }
    }

    result
}

/// Samples 3D cellular noise.
#[must_use]
pub fn cellular_3d(p: Vec3, seed: u32, params: &CellularParams) -> CellularResult3 {
    let scaled = p * params.frequency;
    let base = scaled.floor();
    let seed_y = seed.wrapping_add(JITTER_SEED_Y);
    let seed_z = seed.wrapping_add(JITTER_SEED_Z);

    let mut result = CellularResult3 {
        f1: f32::MAX,
        f2: f32::MAX,
        feature: Vec3::ZERO,
        cell: base,
    };

    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let cell = base.offset(dx, dy, dz);
                let draw = |s| to_unit(noise_3d(cell.x, cell.y, cell.z, s, params.algorithm));
                let feature = Vec3::new(
                    cell.x as f32 + params.displace(draw(seed)),
                    cell.y as f32 + params.displace(draw(seed_y)),
                    cell.z as f32 + params.displace(draw(seed_z)),
                );

                let d = params.metric.distance_3d(feature - scaled);
                if d < result.f1 {
                    result.f2 = result.f1;
                    result.f1 = d;
                    result.feature = feature;
                    result.cell = cell;
                } else if d < result.f2 {
                    result.f2 = d;
                }
            }
        }
    }

    result
}

/// Linear edge mask: 1 on a cell border, fading to 0 over `edge_width`.
///
/// An `edge_width` below `1e-6` is a hard step.
#[must_use]
pub fn vein_linear(f1: f32, f2: f32, edge_width: f32) -> f32 {
    let gap = f2 - f1;
    if edge_width < EPSILON {
        return if gap <= 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - (gap / edge_width).clamp(0.0, 1.0)
}

/// Exponential edge mask `exp(-k * max(0, f2 - f1))`.
#[must_use]
pub fn vein_exp(f1: f32, f2: f32, sharpness: f32) -> f32 {
    (-sharpness * (f2 - f1).max(0.0)).exp()
}

/// `f1` normalized by the worst-case 2D distance.
#[must_use]
pub fn fill_2d(f1: f32, metric: DistanceMetric, jitter: f32) -> f32 {
    (f1 / metric.max_bound_2d(jitter)).clamp(0.0, 1.0)
}

/// `f1` normalized by the worst-case 3D distance.
#[must_use]
pub fn fill_3d(f1: f32, metric: DistanceMetric, jitter: f32) -> f32 {
    (f1 / metric.max_bound_3d(jitter)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: [DistanceMetric; 3] = [
        DistanceMetric::Euclidean,
        DistanceMetric::Manhattan,
        DistanceMetric::Chebyshev,
    ];

    fn anchored(metric: DistanceMetric) -> CellularParams {
        CellularParams {
            frequency: 1.0,
            jitter: 0.0,
            metric,
            ..CellularParams::default()
        }
    }

    #[test]
    fn test_zero_jitter_anchors_on_lattice() {
        let params = anchored(DistanceMetric::Euclidean);

        let r2 = cellular_2d(Vec2::new(3.0, -2.0), 99, &params);
        assert_eq!(r2.f1, 0.0);
        assert_eq!(r2.cell, IVec2::new(3, -2));
        assert_eq!(r2.feature, Vec2::new(3.0, -2.0));
        assert_eq!(r2.f2, 1.0);

        let r3 = cellular_3d(Vec3::new(-5.0, 0.0, 7.0), 99, &params);
        assert_eq!(r3.f1, 0.0);
        assert_eq!(r3.cell, IVec3::new(-5, 0, 7));
    }

    #[test]
    fn test_f1_never_exceeds_f2() {
        for metric in METRICS {
            let params = CellularParams {
                metric,
                frequency: 3.0,
                ..CellularParams::default()
            };
            for i in 0..500 {
                let p = Vec3::new(i as f32 * 0.173, i as f32 * -0.091, i as f32 * 0.037);
                let r3 = cellular_3d(p, 7, &params);
                assert!(r3.f1 <= r3.f2, "{metric:?} at {p:?}");
                let r2 = cellular_2d(Vec2::new(p.x, p.y), 7, &params);
                assert!(r2.f1 <= r2.f2, "{metric:?} at {p:?}");
            }
        }
    }

    #[test]
    fn test_ties_keep_first_site_in_scan_order() {
        // cell centre: four lattice points at the same distance
        let r = cellular_2d(Vec2::new(0.5, 0.5), 1, &anchored(DistanceMetric::Euclidean));
        assert_eq!(r.cell, IVec2::new(0, 0));
        assert_eq!(r.f1, r.f2);
        assert_eq!(r.vein_linear(0.1), 1.0);
    }

    #[test]
    fn test_feature_belongs_to_reported_cell() {
        let params = CellularParams::wormy();
        for i in 0..200 {
            let p = Vec2::new(i as f32 * 0.031, 10.0 - i as f32 * 0.027);
            let r = cellular_2d(p, 3, &params);
            let offset = r.feature - r.cell.as_vec2();
            assert!(offset.x.abs() <= 0.5 && offset.y.abs() <= 0.5, "{r:?}");
        }
    }

    #[test]
    fn test_metric_ordering() {
        let d = Vec3::new(0.3, -0.4, 0.2);
        let e = DistanceMetric::Euclidean.distance_3d(d);
        let m = DistanceMetric::Manhattan.distance_3d(d);
        let c = DistanceMetric::Chebyshev.distance_3d(d);
        assert!(c <= e && e <= m);
        assert!((m - 0.9).abs() < 1e-6);
        assert!((c - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_veins_on_equal_distances() {
        assert_eq!(vein_linear(0.4, 0.4, 0.2), 1.0);
        assert_eq!(vein_exp(0.4, 0.4, 8.0), 1.0);
        assert_eq!(vein_linear(0.1, 0.5, 0.2), 0.0);
        assert!(vein_exp(0.1, 0.5, 8.0) < 0.05);
    }

    #[test]
    fn test_zero_edge_width_is_hard_step() {
        assert_eq!(vein_linear(0.3, 0.3, 0.0), 1.0);
        assert_eq!(vein_linear(0.3, 0.3001, 0.0), 0.0);
    }

    #[test]
    fn test_fill_stays_in_unit_range() {
        for metric in METRICS {
            let params = CellularParams {
                metric,
                frequency: 2.0,
                jitter: 0.6,
                ..CellularParams::default()
            };
            for i in 0..300 {
                let p = Vec3::new(i as f32 * 0.07, i as f32 * 0.05, -(i as f32) * 0.03);
                let fill = cellular_3d(p, 11, &params).fill(&params);
                assert!((0.0..=1.0).contains(&fill), "{metric:?}: {fill}");
            }
        }
    }

    #[test]
    fn test_fill_reaches_one_at_worst_case() {
        let params = anchored(DistanceMetric::Euclidean);
        let r = cellular_2d(Vec2::new(0.5, 0.5), 1, &params);
        assert!(r.fill(&params) > 0.999);
    }

    #[test]
    fn test_presets() {
        let wormy = CellularParams::wormy();
        assert_eq!(wormy.metric, DistanceMetric::Euclidean);
        assert_eq!(wormy.jitter, 1.0);
        let blocky = CellularParams::blocky();
        assert_eq!(blocky.metric, DistanceMetric::Chebyshev);
        assert!((blocky.jitter - 0.35).abs() < f32::EPSILON);
        assert_eq!(blocky.frequency, 4.0);
    }

    #[test]
    fn test_seed_changes_layout() {
        let params = CellularParams::default();
        let p = Vec2::new(12.3, 4.56);
        assert_ne!(cellular_2d(p, 1, &params).f1, cellular_2d(p, 2, &params).f1);
    }
}
