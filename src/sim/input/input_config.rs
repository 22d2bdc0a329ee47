use crate::{
    ConfigError,
    consts::input,
    sim::config_error::{check_factor, check_fraction},
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputConfig {
    /// Per-tick smoothing factor for throttle and brake
    pub smoothing: f32,
    /// Steering uses `smoothing * steer_smoothing_scale`, capped at 1
    pub steer_smoothing_scale: f32,
    pub snap_epsilon: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl InputConfig {
    pub const DEFAULT: Self = Self {
        smoothing: input::SMOOTHING,
        steer_smoothing_scale: input::STEER_SMOOTHING_SCALE,
        snap_epsilon: input::SNAP_EPSILON,
    };

    #[must_use]
    pub fn steer_smoothing(&self) -> f32 {
        (self.smoothing * self.steer_smoothing_scale).min(1.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_factor("input.smoothing", self.smoothing)?;
        check_factor("input.steer_smoothing", self.steer_smoothing())?;
        check_fraction("input.snap_epsilon", self.snap_epsilon)
    }
}
