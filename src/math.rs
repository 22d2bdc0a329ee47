//! Helpers for the y = 0 track plane.
//!
//! Yaw follows the right-handed Y-up convention: a positive angle turns counter-clockwise
//! when seen from above, and a heading of 0 faces -Z.

use glam::Vec3A;

/// Unit vector the car faces for a given `heading`
#[inline]
#[must_use]
pub fn forward_dir(heading: f32) -> Vec3A {
    let (sin, cos) = heading.sin_cos();
    Vec3A::new(-sin, 0.0, -cos)
}

/// Unit vector to the car's right for a given `heading`
#[inline]
#[must_use]
pub fn right_dir(heading: f32) -> Vec3A {
    let (sin, cos) = heading.sin_cos();
    Vec3A::new(cos, 0.0, -sin)
}

/// Rotates `v` about +Y by `angle`
#[inline]
#[must_use]
pub fn rotate_y(v: Vec3A, angle: f32) -> Vec3A {
    let (sin, cos) = angle.sin_cos();
    Vec3A::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// Drops the vertical component
#[inline]
#[must_use]
pub fn planar(v: Vec3A) -> Vec3A {
    Vec3A::new(v.x, 0.0, v.z)
}

#[inline]
#[must_use]
pub fn planar_length(v: Vec3A) -> f32 {
    v.x.hypot(v.z)
}

#[inline]
#[must_use]
pub fn planar_distance(a: Vec3A, b: Vec3A) -> f32 {
    planar_length(a - b)
}

/// Moves `current` a fraction `factor` of the way towards `target`, snapping to zero
/// once the result is smaller than `epsilon`
#[inline]
#[must_use]
pub fn smooth_towards(current: f32, target: f32, factor: f32, epsilon: f32) -> f32 {
    let next = current + (target - current) * factor;
    if next.abs() < epsilon { 0.0 } else { next }
}

/// Shortest signed difference `to - from`, wrapped into `[-PI, PI]`
#[must_use]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    let delta = (to - from).rem_euclid(TAU);
    if delta > PI { delta - TAU } else { delta }
}
