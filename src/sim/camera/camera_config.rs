use crate::{
    ConfigError,
    consts::camera::{self, presets},
    sim::config_error::{check_factor, check_fraction, check_positive},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CameraMode {
    #[default]
    Normal,
    Close,
    Far,
    /// Pulled far back with slower smoothing
    Cinematic,
}

impl CameraMode {
    pub const ALL: [Self; 4] = [Self::Normal, Self::Close, Self::Far, Self::Cinematic];

    /// (base distance, base height, base lerp)
    #[must_use]
    pub const fn preset(self) -> (f32, f32, f32) {
        match self {
            Self::Normal => (camera::BASE_DISTANCE, camera::BASE_HEIGHT, camera::LERP_BASE),
            Self::Close => (presets::CLOSE.0, presets::CLOSE.1, camera::LERP_BASE),
            Self::Far => (presets::FAR.0, presets::FAR.1, camera::LERP_BASE),
            Self::Cinematic => (
                presets::CINEMATIC.0,
                presets::CINEMATIC.1,
                presets::CINEMATIC_LERP_BASE,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConfig {
    pub mode: CameraMode,
    /// Distance behind the car at rest
    pub base_distance: f32,
    /// Height above the car at rest
    pub base_height: f32,
    /// Extra distance at full speed factor
    pub distance_gain: f32,
    /// Extra height at full speed factor
    pub height_gain: f32,
    /// `speed_factor = min(speed * speed_factor_scale, 1)`
    pub speed_factor_scale: f32,
    pub lerp_base: f32,
    pub lerp_speed_gain: f32,
    /// The look target leads the car by `velocity * look_ahead_gain`
    pub look_ahead_gain: f32,
    pub look_height: f32,
    /// Shake amplitude at full drift intensity
    pub shake_scale: f32,
    pub shake_axis_scale: [f32; 3],
    /// Drift angle at which the shake stops growing
    pub shake_full_drift_angle: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CameraConfig {
    pub const DEFAULT: Self = Self {
        mode: CameraMode::Normal,
        base_distance: camera::BASE_DISTANCE,
        base_height: camera::BASE_HEIGHT,
        distance_gain: camera::DISTANCE_GAIN,
        height_gain: camera::HEIGHT_GAIN,
        speed_factor_scale: camera::SPEED_FACTOR_SCALE,
        lerp_base: camera::LERP_BASE,
        lerp_speed_gain: camera::LERP_SPEED_GAIN,
        look_ahead_gain: camera::LOOK_AHEAD_GAIN,
        look_height: camera::LOOK_HEIGHT,
        shake_scale: camera::SHAKE_SCALE,
        shake_axis_scale: camera::SHAKE_AXIS_SCALE,
        shake_full_drift_angle: camera::SHAKE_FULL_DRIFT_ANGLE,
    };

    /// The default config with `mode`'s preset applied
    #[must_use]
    pub const fn for_mode(mode: CameraMode) -> Self {
        Self::DEFAULT.with_mode(mode)
    }

    /// Replaces the base distance, height and lerp with `mode`'s preset
    #[must_use]
    pub const fn with_mode(mut self, mode: CameraMode) -> Self {
        let (distance, height, lerp) = mode.preset();
        self.mode = mode;
        self.base_distance = distance;
        self.base_height = height;
        self.lerp_base = lerp;
        self
    }

    #[must_use]
    pub fn speed_factor(&self, speed: f32) -> f32 {
        (speed * self.speed_factor_scale).min(1.0)
    }

    /// Smoothing factor towards the ideal pose for a given speed factor
    #[must_use]
    pub fn lerp_factor(&self, speed_factor: f32) -> f32 {
        (self.lerp_base + speed_factor * self.lerp_speed_gain).min(1.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("camera.base_distance", self.base_distance)?;
        check_positive("camera.base_height", self.base_height)?;
        check_positive("camera.speed_factor_scale", self.speed_factor_scale)?;
        check_factor("camera.lerp_base", self.lerp_base)?;
        check_fraction("camera.lerp_speed_gain", self.lerp_speed_gain)?;
        check_positive("camera.shake_full_drift_angle", self.shake_full_drift_angle)
    }
}
