use glam::Vec3A;

use crate::{
    CollectibleRecord, ConfigError, VehicleState,
    consts::collision,
    math::{planar, planar_distance, planar_length},
    sim::config_error::{check_factor, check_fraction, check_positive},
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionConfig {
    /// A collectible is picked up strictly inside this planar distance
    pub pickup_radius: f32,
    /// Radius of the drivable disc centered on the origin
    pub boundary_radius: f32,
    /// Scales the removal of outward velocity on impact; above 1 pushes the car back in
    pub bounce_multiplier: f32,
    /// Multiplied into the whole velocity on impact
    pub speed_reduction: f32,
    /// The car is placed at `boundary_radius * safe_radius_factor` after an impact
    pub safe_radius_factor: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CollisionConfig {
    pub const DEFAULT: Self = Self {
        pickup_radius: collision::PICKUP_RADIUS,
        boundary_radius: collision::BOUNDARY_RADIUS,
        bounce_multiplier: collision::BOUNCE_MULTIPLIER,
        speed_reduction: collision::SPEED_REDUCTION,
        safe_radius_factor: collision::SAFE_RADIUS_FACTOR,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("collision.pickup_radius", self.pickup_radius)?;
        check_positive("collision.boundary_radius", self.boundary_radius)?;
        check_positive("collision.bounce_multiplier", self.bounce_multiplier)?;
        check_fraction("collision.speed_reduction", self.speed_reduction)?;
        check_factor("collision.safe_radius_factor", self.safe_radius_factor)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionResult {
    /// At most one pickup per check
    pub picked_up: Option<CollectibleRecord>,
    pub hit_boundary: bool,
}

/// Closed-form checks against point collectibles and the circular track edge
#[derive(Clone, Debug, Default)]
pub struct CollisionResolver {
    config: CollisionConfig,
}

impl CollisionResolver {
    #[must_use]
    pub const fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub const fn set_config(&mut self, config: CollisionConfig) {
        self.config = config;
    }

    /// Runs pickups, then the boundary
    ///
    /// Only `vehicle.position` and `vehicle.velocity` are ever modified.
    pub fn check(
        &self,
        vehicle: &mut VehicleState,
        collectibles: &mut [CollectibleRecord],
    ) -> CollisionResult {
        let picked_up = self.check_pickup(vehicle.position, collectibles);
        let hit_boundary = self.resolve_boundary(&mut vehicle.position, &mut vehicle.velocity);

        CollisionResult {
            picked_up,
            hit_boundary,
        }
    }

    /// Collects the first uncollected record within range, in slice order
    pub fn check_pickup(
        &self,
        position: Vec3A,
        collectibles: &mut [CollectibleRecord],
    ) -> Option<CollectibleRecord> {
        let record = collectibles.iter_mut().find(|r| {
            !r.is_collected() && planar_distance(position, r.position) < self.config.pickup_radius
        })?;

        record.collect();
        Some(record.clone())
    }

    /// Bounces the car back inside the track if it left it
    ///
    /// Returns true on impact.
    pub fn resolve_boundary(&self, position: &mut Vec3A, velocity: &mut Vec3A) -> bool {
        let radius = self.config.boundary_radius;
        let distance = planar_length(*position);
        if distance <= radius {
            return false;
        }

        let normal = planar(*position).normalize_or_zero();

        let outward_speed = velocity.dot(normal);
        if outward_speed > 0.0 {
            *velocity -= normal * (outward_speed * self.config.bounce_multiplier);
        }
        *velocity *= self.config.speed_reduction;

        *position = normal * (radius * self.config.safe_radius_factor.clamp(0.0, 1.0));
        true
    }
}
