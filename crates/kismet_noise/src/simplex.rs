//! # Simplex Noise Implementation
//!
//! Gradient noise on a skewed simplex lattice.
//!
//! ## Why Simplex over Perlin?
//!
//! - Fewer directional artifacts
//! - `D + 1` corners per sample instead of `2^D`
//!
//! Corners are hashed through the same folding/mixing path as gradient
//! noise and reuse its direction tables, so a seed and algorithm tag mean the
//! same thing in both.

use kismet_hash::{noise_2d, noise_3d, MixAlgorithm};

use crate::gradient::{grad_2d, grad_3d};
use crate::math::{Vec2, Vec3};

/// Skewing factor for 2D simplex grid: `(√3 − 1) / 2`.
const F2: f32 = 0.366_025_42;
/// Unskewing factor for 2D simplex grid: `(3 − √3) / 6`.
const G2: f32 = 0.211_324_87;
/// Skewing factor for 3D.
const F3: f32 = 1.0 / 3.0;
/// Unskewing factor for 3D.
const G3: f32 = 1.0 / 6.0;

/// Squared falloff radius in 2D.
const RADIUS_2D: f32 = 0.5;
/// Squared falloff radius in 3D.
const RADIUS_3D: f32 = 0.6;

/// Empirical scale bringing 2D output to roughly `[-1, 1]`.
const SCALE_2D: f32 = 70.0;
/// Empirical scale bringing 3D output to roughly `[-1, 1]`.
const SCALE_3D: f32 = 32.0;

/// Samples 2D simplex noise.
///
/// # Returns
///
/// A value in approximately `[-1, 1]`.
#[must_use]
pub fn simplex_2d(p: Vec2, seed: u32, algorithm: MixAlgorithm) -> f32 {
    // Skew input coordinates to simplex grid
    let skew = (p.x + p.y) * F2;
    let i = (p.x + skew).floor() as i32;
    let j = (p.y + skew).floor() as i32;

    // Unskew to get first corner in simplex
    let unskew = (i as f32 + j as f32) * G2;
    let x0 = p.x - (i as f32 - unskew);
    let y0 = p.y - (j as f32 - unskew);

    // Determine which simplex we're in (upper or lower triangle)
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let corners = [
        (i, j, Vec2::new(x0, y0)),
        (
            i.wrapping_add(i1),
            j.wrapping_add(j1),
            Vec2::new(x0 - i1 as f32 + G2, y0 - j1 as f32 + G2),
        ),
        (
            i.wrapping_add(1),
            j.wrapping_add(1),
            Vec2::new(x0 - 1.0 + 2.0 * G2, y0 - 1.0 + 2.0 * G2),
        ),
    ];

    let sum: f32 = corners
        .iter()
        .map(|&(ci, cj, offset)| {
            let t = RADIUS_2D - offset.length_squared();
            if t <= 0.0 {
                0.0
            } else {
                let g = grad_2d(noise_2d(ci, cj, seed, algorithm));
                let t2 = t * t;
                t2 * t2 * g.dot(offset)
            }
        })
        .sum();

    SCALE_2D * sum
}

/// Picks the two middle corners of the 3D simplex containing the offset.
///
/// Ordering the offset magnitudes selects one of the six tetrahedra.
#[inline]
fn traversal_3d(d: Vec3) -> ([i32; 3], [i32; 3]) {
    if d.x >= d.y {
        if d.y >= d.z {
            ([1, 0, 0], [1, 1, 0])
        } else if d.x >= d.z {
            ([1, 0, 0], [1, 0, 1])
        } else {
            ([0, 0, 1], [1, 0, 1])
        }
    } else if d.y < d.z {
        ([0, 0, 1], [0, 1, 1])
    } else if d.x < d.z {
        ([0, 1, 0], [0, 1, 1])
    } else {
        ([0, 1, 0], [1, 1, 0])
    }
}

/// Samples 3D simplex noise.
///
/// # Returns
///
/// A value in approximately `[-1, 1]`.
#[must_use]
pub fn simplex_3d(p: Vec3, seed: u32, algorithm: MixAlgorithm) -> f32 {
    let skew = (p.x + p.y + p.z) * F3;
    let base = [
        (p.x + skew).floor() as i32,
        (p.y + skew).floor() as i32,
        (p.z + skew).floor() as i32,
    ];

    let unskew = (base[0] as f32 + base[1] as f32 + base[2] as f32) * G3;
    let d0 = Vec3::new(
        p.x - (base[0] as f32 - unskew),
        p.y - (base[1] as f32 - unskew),
        p.z - (base[2] as f32 - unskew),
    );

    let (o1, o2) = traversal_3d(d0);
    let offsets = [[0, 0, 0], o1, o2, [1, 1, 1]];

    let mut sum = 0.0;
    for (k, o) in offsets.iter().enumerate() {
        let shift = k as f32 * G3;
        let d = Vec3::new(
            d0.x - o[0] as f32 + shift,
            d0.y - o[1] as f32 + shift,
            d0.z - o[2] as f32 + shift,
        );
        let t = RADIUS_3D - d.length_squared();
        if t <= 0.0 {
            continue;
        }
        let hash = noise_3d(
            base[0].wrapping_add(o[0]),
            base[1].wrapping_add(o[1]),
            base[2].wrapping_add(o[2]),
            seed,
            algorithm,
        );
        let t2 = t * t;
        sum += t2 * t2 * grad_3d(hash).dot(d);
    }

    SCALE_3D * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALG: MixAlgorithm = MixAlgorithm::BalancedMix;

    #[test]
    fn test_determinism() {
        for i in 0..100 {
            let p = Vec2::new(i as f32 * 0.1, i as f32 * 0.17);
            assert_eq!(simplex_2d(p, 12345, ALG), simplex_2d(p, 12345, ALG));
        }
    }

    #[test]
    fn test_origin_is_zero() {
        // only the base corner is in range there, and its offset is zero
        assert_eq!(simplex_2d(Vec2::ZERO, 7, ALG), 0.0);
        assert_eq!(simplex_3d(Vec3::ZERO, 7, ALG), 0.0);
    }

    #[test]
    fn test_range() {
        for i in 0..10_000 {
            let x = (i as f32 * 0.1) - 500.0;
            let y = (i as f32 * 0.13) - 650.0;
            let v2 = simplex_2d(Vec2::new(x, y), 42, ALG);
            let v3 = simplex_3d(Vec3::new(x, y, y * 0.5), 42, ALG);
            assert!(v2.abs() <= 1.05, "Value {v2} out of range at ({x}, {y})");
            assert!(v3.abs() <= 1.05, "Value {v3} out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_continuity() {
        let p = Vec2::new(100.0, 100.0);
        let delta = 0.001;
        let v1 = simplex_2d(p, 42, ALG);
        let v2 = simplex_2d(Vec2::new(p.x + delta, p.y), 42, ALG);
        let v3 = simplex_2d(Vec2::new(p.x, p.y + delta), 42, ALG);
        assert!((v1 - v2).abs() < 0.01, "Noise should be continuous");
        assert!((v1 - v3).abs() < 0.01, "Noise should be continuous");
    }

    #[test]
    fn test_traversal_covers_all_six_tetrahedra() {
        let cases = [
            Vec3::new(0.3, 0.2, 0.1),
            Vec3::new(0.3, 0.1, 0.2),
            Vec3::new(0.2, 0.1, 0.3),
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(0.1, 0.3, 0.2),
            Vec3::new(0.2, 0.3, 0.1),
        ];
        let mut seen = std::collections::HashSet::new();
        for d in cases {
            let (o1, o2) = traversal_3d(d);
            // o2 always contains o1's axis plus one more
            assert_eq!(o1.iter().sum::<i32>(), 1);
            assert_eq!(o2.iter().sum::<i32>(), 2);
            seen.insert((o1, o2));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_seeds_and_algorithms_change_output() {
        let p = Vec3::new(1.37, -2.91, 0.44);
        assert_ne!(simplex_3d(p, 1, ALG), simplex_3d(p, 2, ALG));
        assert_ne!(
            simplex_3d(p, 1, MixAlgorithm::BalancedMix),
            simplex_3d(p, 1, MixAlgorithm::ChaChaAdvanced)
        );
    }
}
