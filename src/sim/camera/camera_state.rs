use glam::Vec3A;

/// Where the camera sits and what it looks at, in world space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    pub position: Vec3A,
    pub look_target: Vec3A,
}

impl CameraState {
    pub const DEFAULT: Self = Self {
        position: Vec3A::ZERO,
        look_target: Vec3A::ZERO,
    };

    #[must_use]
    pub fn lerp(&self, next: &Self, alpha: f32) -> Self {
        Self {
            position: self.position.lerp(next.position, alpha),
            look_target: self.look_target.lerp(next.look_target, alpha),
        }
    }

    /// Unit vector from the camera to its target, zero if they coincide
    #[must_use]
    pub fn view_dir(&self) -> Vec3A {
        (self.look_target - self.position).normalize_or_zero()
    }
}
