use glam::Vec3A;

use crate::math::{self, angle_delta};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleState {
    /// World position, always on the y = 0 track plane
    pub position: Vec3A,
    /// Yaw about +Y in radians, wrapped to `[-PI, PI)`
    ///
    /// 0 faces -Z, and turning right makes it smaller.
    pub heading: f32,
    /// World units per tick, `y` always 0
    pub velocity: Vec3A,
    /// Heading change applied last tick, positive to the right
    pub yaw_rate: f32,
    /// Signed velocity along the car's right vector
    pub lateral_speed: f32,
    /// `atan2(lateral, |forward|)` of the velocity, 0 at rest
    pub drift_angle: f32,
    pub is_drifting: bool,
    /// Never decreases during a session
    pub drift_score: f32,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl VehicleState {
    /// At rest on the track origin, facing -Z
    pub const DEFAULT: Self = Self {
        position: Vec3A::ZERO,
        heading: 0.0,
        velocity: Vec3A::ZERO,
        yaw_rate: 0.0,
        lateral_speed: 0.0,
        drift_angle: 0.0,
        is_drifting: false,
        drift_score: 0.0,
    };

    /// Always exactly `|velocity|`
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[must_use]
    pub fn forward_dir(&self) -> Vec3A {
        math::forward_dir(self.heading)
    }

    #[must_use]
    pub fn right_dir(&self) -> Vec3A {
        math::right_dir(self.heading)
    }

    /// Signed speed along the heading, negative while reversing
    #[must_use]
    pub fn forward_speed(&self) -> f32 {
        self.velocity.dot(self.forward_dir())
    }

    #[must_use]
    pub fn distance_from_origin(&self) -> f32 {
        math::planar_length(self.position)
    }

    /// Floored drift score, as shown to the player
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn drift_score_display(&self) -> u32 {
        self.drift_score.floor() as u32
    }

    /// Blends the pose between two ticks for rendering; flags come from `next`
    #[must_use]
    pub fn lerp(&self, next: &Self, alpha: f32) -> Self {
        Self {
            position: self.position.lerp(next.position, alpha),
            heading: wrap_angle(self.heading + angle_delta(self.heading, next.heading) * alpha),
            velocity: self.velocity.lerp(next.velocity, alpha),
            ..*next
        }
    }
}

/// Wraps an angle into `[-PI, PI)`, returning in-range angles untouched
#[must_use]
pub(crate) fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    if (-PI..PI).contains(&angle) {
        angle
    } else {
        // rem_euclid can round up to exactly TAU
        let wrapped = (angle + PI).rem_euclid(TAU) - PI;
        if wrapped >= PI {
            wrapped - TAU
        } else {
            wrapped
        }
    }
}
