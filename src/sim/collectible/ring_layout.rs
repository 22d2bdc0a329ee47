use glam::Vec3A;
use std::f32::consts::TAU;

use super::CollectibleKind;
use crate::consts::layout;

/// Places each kind of collectible evenly around its own ring centered on the origin
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingLayout {
    pub project_radius: f32,
    pub skill_radius: f32,
    pub experience_radius: f32,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RingLayout {
    pub const DEFAULT: Self = Self {
        project_radius: layout::PROJECT_RING_RADIUS,
        skill_radius: layout::SKILL_RING_RADIUS,
        experience_radius: layout::EXPERIENCE_RING_RADIUS,
    };

    #[must_use]
    pub const fn radius(&self, kind: CollectibleKind) -> f32 {
        match kind {
            CollectibleKind::Project => self.project_radius,
            CollectibleKind::Skill => self.skill_radius,
            CollectibleKind::Experience => self.experience_radius,
        }
    }

    /// Slot `index` of `count` on the ring for `kind`, starting at +X
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn position(&self, kind: CollectibleKind, index: usize, count: usize) -> Vec3A {
        let angle = if count == 0 {
            0.0
        } else {
            index as f32 / count as f32 * TAU
        };
        let radius = self.radius(kind);

        let (sin, cos) = angle.sin_cos();
        Vec3A::new(cos * radius, 0.0, sin * radius)
    }
}
