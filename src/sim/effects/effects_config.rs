use crate::{
    ConfigError,
    consts::effects::{burst, smoke},
    sim::config_error::{check_factor, check_fraction, check_positive},
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectsConfig {
    /// Disables all emission when false; live particles still age out
    pub enabled: bool,

    /// The car must be faster than this to smoke
    pub smoke_min_speed: f32,
    /// Chance per drifting tick of emitting one puff
    pub smoke_emit_chance: f32,
    /// How far behind the car a puff appears
    pub smoke_behind_dist: f32,
    /// Full width of the random spread on X and Z
    pub smoke_jitter: f32,
    pub smoke_height: f32,
    pub smoke_start_scale: f32,
    pub smoke_start_opacity: f32,
    /// Multiplied into scale and opacity every tick
    pub smoke_decay: f32,
    /// Puffs smaller than this are removed
    pub smoke_min_scale: f32,

    pub burst_count: usize,
    pub burst_min_speed: f32,
    pub burst_speed_range: f32,
    pub burst_drag: f32,
    pub burst_life_decay: f32,
    /// Bursts start this far above the track
    pub burst_height: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl EffectsConfig {
    pub const DEFAULT: Self = Self {
        enabled: true,
        smoke_min_speed: smoke::MIN_SPEED,
        smoke_emit_chance: smoke::EMIT_CHANCE,
        smoke_behind_dist: smoke::BEHIND_DIST,
        smoke_jitter: smoke::JITTER,
        smoke_height: smoke::HEIGHT,
        smoke_start_scale: smoke::START_SCALE,
        smoke_start_opacity: smoke::START_OPACITY,
        smoke_decay: smoke::DECAY,
        smoke_min_scale: smoke::MIN_SCALE,
        burst_count: burst::COUNT,
        burst_min_speed: burst::MIN_SPEED,
        burst_speed_range: burst::SPEED_RANGE,
        burst_drag: burst::DRAG,
        burst_life_decay: burst::LIFE_DECAY,
        burst_height: burst::HEIGHT,
    };

    /// No emission at all
    pub const DISABLED: Self = Self {
        enabled: false,
        ..Self::DEFAULT
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("effects.smoke_emit_chance", self.smoke_emit_chance)?;
        check_factor("effects.smoke_decay", self.smoke_decay)?;
        check_positive("effects.smoke_min_scale", self.smoke_min_scale)?;
        check_factor("effects.burst_drag", self.burst_drag)?;
        check_positive("effects.burst_life_decay", self.burst_life_decay)
    }
}
