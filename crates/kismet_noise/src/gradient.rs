//! # Gradient (Perlin) Noise
//!
//! Corner-hashed gradient noise on the integer lattice.
//!
//! Each cell corner is hashed through [`kismet_hash::noise_2d`] /
//! [`kismet_hash::noise_3d`] to pick one of a few canonical directions. The
//! dot products of those directions with the corner-to-point offsets are
//! blended with the quintic fade curve, one axis at a time (x, then y, then
//! z). Output stays near `[-1, 1]` by construction and is not clamped.
//!
//! The `_deriv` variants carry the analytic partial derivatives through the
//! same lerp chain, so the value they return is bit-identical to the plain
//! query.

use kismet_hash::{noise_2d, noise_3d, MixAlgorithm};

use crate::math::{Vec2, Vec3};

/// Canonical 2D directions, keyed by the low 3 bits of the corner hash.
pub(crate) const GRAD_2D: [Vec2; 8] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
];

/// Canonical 3D directions (cube edge midpoints), keyed by `hash % 12`.
pub(crate) const GRAD_3D: [Vec3; 12] = [
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(-1.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, -1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(0.0, -1.0, 1.0),
    Vec3::new(0.0, 1.0, -1.0),
    Vec3::new(0.0, -1.0, -1.0),
];

#[inline]
pub(crate) fn grad_2d(hash: u32) -> Vec2 {
    GRAD_2D[(hash & 7) as usize]
}

#[inline]
pub(crate) fn grad_3d(hash: u32) -> Vec3 {
    GRAD_3D[(hash % 12) as usize]
}

/// Quintic fade `t³(t(6t − 15) + 10)`.
///
/// `fade(0) = 0`, `fade(1) = 1`, and the first derivative vanishes at both
/// ends, which is what keeps neighbouring cells seamless.
#[inline]
#[must_use]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Derivative of [`fade`]: `30t²(t − 1)²`.
#[inline]
#[must_use]
pub fn fade_derivative(t: f32) -> f32 {
    let u = t - 1.0;
    30.0 * t * t * u * u
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn corner_2d(
    cell_x: i32,
    cell_y: i32,
    offset: Vec2,
    seed: u32,
    algorithm: MixAlgorithm,
) -> (f32, Vec2) {
    let g = grad_2d(noise_2d(cell_x, cell_y, seed, algorithm));
    (g.dot(offset), g)
}

#[inline]
fn corner_3d(cell: [i32; 3], offset: Vec3, seed: u32, algorithm: MixAlgorithm) -> (f32, Vec3) {
    let g = grad_3d(noise_3d(cell[0], cell[1], cell[2], seed, algorithm));
    (g.dot(offset), g)
}

/// 2D gradient noise.
#[must_use]
pub fn gradient_2d(p: Vec2, seed: u32, algorithm: MixAlgorithm) -> f32 {
    gradient_2d_deriv(p, seed, algorithm).0
}

/// 2D gradient noise with its analytic gradient `(∂n/∂x, ∂n/∂y)`.
#[must_use]
pub fn gradient_2d_deriv(p: Vec2, seed: u32, algorithm: MixAlgorithm) -> (f32, Vec2) {
    let cell = p.floor();
    let f = p - cell.as_vec2();
    let (x0, y0) = (cell.x, cell.y);
    let (x1, y1) = (x0.wrapping_add(1), y0.wrapping_add(1));

    let (n00, g00) = corner_2d(x0, y0, f, seed, algorithm);
    let (n10, g10) = corner_2d(x1, y0, Vec2::new(f.x - 1.0, f.y), seed, algorithm);
    let (n01, g01) = corner_2d(x0, y1, Vec2::new(f.x, f.y - 1.0), seed, algorithm);
    let (n11, g11) = corner_2d(x1, y1, Vec2::new(f.x - 1.0, f.y - 1.0), seed, algorithm);

    let (u, du) = (fade(f.x), fade_derivative(f.x));
    let (v, dv) = (fade(f.y), fade_derivative(f.y));

    // along x
    let nx0 = lerp(n00, n10, u);
    let nx1 = lerp(n01, n11, u);
    let dx0 = Vec2::new(lerp(g00.x, g10.x, u) + du * (n10 - n00), lerp(g00.y, g10.y, u));
    let dx1 = Vec2::new(lerp(g01.x, g11.x, u) + du * (n11 - n01), lerp(g01.y, g11.y, u));

    // along y
    let value = lerp(nx0, nx1, v);
    let derivative = Vec2::new(lerp(dx0.x, dx1.x, v), lerp(dx0.y, dx1.y, v) + dv * (nx1 - nx0));

    (value, derivative)
}

/// 3D gradient noise.
#[must_use]
pub fn gradient_3d(p: Vec3, seed: u32, algorithm: MixAlgorithm) -> f32 {
    gradient_3d_deriv(p, seed, algorithm).0
}

/// 3D gradient noise with its analytic gradient.
#[must_use]
pub fn gradient_3d_deriv(p: Vec3, seed: u32, algorithm: MixAlgorithm) -> (f32, Vec3) {
    let cell = p.floor();
    let f = p - cell.as_vec3();

    let (u, du) = (fade(f.x), fade_derivative(f.x));
    let (v, dv) = (fade(f.y), fade_derivative(f.y));
    let (w, dw) = (fade(f.z), fade_derivative(f.z));

    // One z-slice: the bilinear (x, y) blend of four corners at dz.
    let slice = |dz: i32| -> (f32, Vec3) {
        let z = cell.z.wrapping_add(dz);
        let fz = f.z - dz as f32;
        let at = |dx: i32, dy: i32| {
            corner_3d(
                [cell.x.wrapping_add(dx), cell.y.wrapping_add(dy), z],
                Vec3::new(f.x - dx as f32, f.y - dy as f32, fz),
                seed,
                algorithm,
            )
        };
        let (n00, g00) = at(0, 0);
        let (n10, g10) = at(1, 0);
        let (n01, g01) = at(0, 1);
        let (n11, g11) = at(1, 1);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        let dx0 = lerp_vec3(g00, g10, u) + Vec3::new(du * (n10 - n00), 0.0, 0.0);
        let dx1 = lerp_vec3(g01, g11, u) + Vec3::new(du * (n11 - n01), 0.0, 0.0);

        let n = lerp(nx0, nx1, v);
        let d = lerp_vec3(dx0, dx1, v) + Vec3::new(0.0, dv * (nx1 - nx0), 0.0);
        (n, d)
    };

    let (n0, d0) = slice(0);
    let (n1, d1) = slice(1);

    let value = lerp(n0, n1, w);
    let derivative = lerp_vec3(d0, d1, w) + Vec3::new(0.0, 0.0, dw * (n1 - n0));
    (value, derivative)
}

#[inline]
fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Central-difference gradient of any 2D scalar field.
///
/// Cheaper to wire up than an analytic derivative, less precise. An
/// `epsilon` of zero yields NaN components.
#[must_use]
pub fn finite_difference_2d(f: impl Fn(Vec2) -> f32, p: Vec2, epsilon: f32) -> Vec2 {
    let h = 2.0 * epsilon;
    Vec2::new(
        (f(Vec2::new(p.x + epsilon, p.y)) - f(Vec2::new(p.x - epsilon, p.y))) / h,
        (f(Vec2::new(p.x, p.y + epsilon)) - f(Vec2::new(p.x, p.y - epsilon))) / h,
    )
}

/// Central-difference gradient of any 3D scalar field.
#[must_use]
pub fn finite_difference_3d(f: impl Fn(Vec3) -> f32, p: Vec3, epsilon: f32) -> Vec3 {
    let h = 2.0 * epsilon;
    Vec3::new(
        (f(Vec3::new(p.x + epsilon, p.y, p.z)) - f(Vec3::new(p.x - epsilon, p.y, p.z))) / h,
        (f(Vec3::new(p.x, p.y + epsilon, p.z)) - f(Vec3::new(p.x, p.y - epsilon, p.z))) / h,
        (f(Vec3::new(p.x, p.y, p.z + epsilon)) - f(Vec3::new(p.x, p.y, p.z - epsilon))) / h,
    )
}
