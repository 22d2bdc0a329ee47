use log::{trace, warn};

use crate::{ConfigError, consts::stepper};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepperConfig {
    /// Simulation ticks per second
    pub tick_rate: u16,
    /// Backlog beyond this many ticks in a single advance is dropped
    pub max_ticks_per_advance: u32,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl StepperConfig {
    pub const DEFAULT: Self = Self {
        tick_rate: stepper::TICK_RATE,
        max_ticks_per_advance: stepper::MAX_TICKS_PER_ADVANCE,
    };

    /// Seconds per tick
    #[must_use]
    pub fn tick_time(&self) -> f32 {
        1.0 / f32::from(self.tick_rate)
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate < stepper::MIN_TICK_RATE || self.tick_rate > stepper::MAX_TICK_RATE {
            return Err(ConfigError::TickRate {
                value: self.tick_rate,
                min: stepper::MIN_TICK_RATE,
                max: stepper::MAX_TICK_RATE,
            });
        }

        if self.max_ticks_per_advance == 0 {
            return Err(ConfigError::NoTicksPerAdvance);
        }

        Ok(())
    }
}

/// Turns variable frame times into a whole number of fixed ticks
#[derive(Clone, Debug)]
pub struct FixedStepper {
    config: StepperConfig,
    tick_time: f64,
    accumulator: f64,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(StepperConfig::DEFAULT)
    }
}

impl FixedStepper {
    #[must_use]
    pub fn new(config: StepperConfig) -> Self {
        Self {
            config,
            tick_time: 1.0 / f64::from(config.tick_rate.max(1)),
            accumulator: 0.0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StepperConfig {
        &self.config
    }

    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn tick_time(&self) -> f32 {
        self.tick_time as f32
    }

    /// Adds `elapsed` seconds and returns how many ticks are now due
    ///
    /// Negative or non-finite frame times count as zero.
    pub fn push(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += f64::from(elapsed);
        }

        let max_ticks = self.config.max_ticks_per_advance;
        let mut ticks = 0;
        while self.accumulator >= self.tick_time && ticks < max_ticks {
            self.accumulator -= self.tick_time;
            ticks += 1;
        }

        if self.accumulator >= self.tick_time {
            warn!(
                "Dropping {:.1}ms of simulation backlog (max {max_ticks} ticks per advance)",
                self.accumulator * 1000.0
            );
            self.accumulator = 0.0;
        }

        trace!("Stepping {ticks} tick(s), {:.4}s carried over", self.accumulator);
        ticks
    }

    /// How far the leftover time reaches into the next tick, in `[0, 1)`
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn alpha(&self) -> f32 {
        ((self.accumulator / self.tick_time) as f32).clamp(0.0, 1.0 - f32::EPSILON)
    }

    pub const fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
