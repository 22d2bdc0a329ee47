use super::StepperConfig;
use crate::{
    CameraConfig, CollectibleSeed, CollisionConfig, ConfigError, EffectsConfig, InputConfig,
    RingLayout, VehicleConfig, portfolio,
};

/// Everything needed to start a [`Session`](super::Session)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub input: InputConfig,
    pub vehicle: VehicleConfig,
    pub collision: CollisionConfig,
    pub camera: CameraConfig,
    pub effects: EffectsConfig,
    pub stepper: StepperConfig,
    pub layout: RingLayout,
    /// Placed on `layout` in this order, which is also pickup priority order
    pub seeds: Vec<CollectibleSeed>,
    /// Seed for camera shake and particles. A random seed is used if `None`
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::DEFAULT,
            vehicle: VehicleConfig::DEFAULT,
            collision: CollisionConfig::DEFAULT,
            camera: CameraConfig::DEFAULT,
            effects: EffectsConfig::DEFAULT,
            stepper: StepperConfig::DEFAULT,
            layout: RingLayout::DEFAULT,
            seeds: portfolio::demo_seeds(),
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    /// Rejects values that would make the simulation blow up or stall
    ///
    /// An empty seed list is fine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()?;
        self.vehicle.validate()?;
        self.collision.validate()?;
        self.camera.validate()?;
        self.effects.validate()?;
        self.stepper.validate()
    }
}
