//! 3D vectors and points in single precision.
//!
//! Purpose
//! - Dot/cross products, scaling, magnitudes, normalization and axis angles
//!   over `nalgebra` value types.
//! - `quick_*` counterparts route the division and square root through
//!   `crate::fastmath`, trading ~1% accuracy for fewer exact ops.
//!
//! Conventions
//! - Mutators take `&mut Vec3`, update it in place and hand the same
//!   reference back so calls can be chained.
//! - Zero-length vectors are not special-cased: `normalize` and the angle
//!   functions produce non-finite components for them, as IEEE division does.
//! - `Point - Point` is a `Vec3`; `subtract` allocates a new value,
//!   `subtract_into` writes into a caller-owned one.

use nalgebra::{Point3, Vector3};

use crate::fastmath::{approx_inverse, approx_sqrt};

/// Free displacement / direction.
pub type Vec3 = Vector3<f32>;
/// Position in space.
pub type Point = Point3<f32>;

#[inline]
pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

#[inline]
pub fn point(x: f32, y: f32, z: f32) -> Point {
    Point::new(x, y, z)
}

/// Overwrite all three components of `v`.
#[inline]
pub fn assign(v: &mut Vec3, x: f32, y: f32, z: f32) -> &mut Vec3 {
    v.x = x;
    v.y = y;
    v.z = z;
    v
}

#[inline]
pub fn assign_point(p: &mut Point, x: f32, y: f32, z: f32) -> &mut Point {
    p.x = x;
    p.y = y;
    p.z = z;
    p
}

#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product `a × b`.
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

#[inline]
pub fn multiply(v: &mut Vec3, k: f32) -> &mut Vec3 {
    *v *= k;
    v
}

#[inline]
pub fn divide(v: &mut Vec3, k: f32) -> &mut Vec3 {
    *v /= k;
    v
}

/// Divide by multiplying with `approx_inverse(k)`; `k` must be positive and finite.
#[inline]
pub fn quick_divide(v: &mut Vec3, k: f32) -> &mut Vec3 {
    *v *= approx_inverse(k);
    v
}

#[inline]
pub fn magnitude(v: &Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Approximate length: `approx_sqrt` of the squared length.
#[inline]
pub fn quick_magnitude(v: &Vec3) -> f32 {
    approx_sqrt(dot(v, v))
}

#[inline]
pub fn negate(v: &mut Vec3) -> &mut Vec3 {
    multiply(v, -1.0)
}

pub fn normalize(v: &mut Vec3) -> &mut Vec3 {
    let m = magnitude(v);
    divide(v, m)
}

pub fn quick_normalize(v: &mut Vec3) -> &mut Vec3 {
    let m = quick_magnitude(v);
    quick_divide(v, m)
}

/// Angle in `[0, π]` between `a` and `b`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding on
/// (anti)parallel inputs cannot leave the domain.
pub fn angle_between(a: &Vec3, b: &Vec3) -> f32 {
    let cos = dot(a, b) / (magnitude(a) * magnitude(b));
    cos.clamp(-1.0, 1.0).acos()
}

/// Angle between `v` and the +x axis.
#[inline]
pub fn angle_x(v: &Vec3) -> f32 {
    (v.x / magnitude(v)).acos()
}

/// Angle between `v` and the +y axis.
#[inline]
pub fn angle_y(v: &Vec3) -> f32 {
    (v.y / magnitude(v)).acos()
}

/// Angle between `v` and the +z axis.
#[inline]
pub fn angle_z(v: &Vec3) -> f32 {
    (v.z / magnitude(v)).acos()
}

/// `a - b` as a new vector.
#[inline]
pub fn subtract(a: &Point, b: &Point) -> Vec3 {
    a - b
}

/// `a - b` written into `out`.
#[inline]
pub fn subtract_into<'a>(a: &Point, b: &Point, out: &'a mut Vec3) -> &'a mut Vec3 {
    *out = a - b;
    out
}

/// `"(x, y, z)"`.
pub fn display_vec3(v: &Vec3) -> String {
    format!("({}, {}, {})", v.x, v.y, v.z)
}
