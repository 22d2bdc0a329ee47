use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be within (0, 1] (got {value})")]
    NotAFactor { field: &'static str, value: f32 },
    #[error("{field} must be within [0, 1] (got {value})")]
    NotAFraction { field: &'static str, value: f32 },
    #[error("tick rate must be within {min}..={max} (got {value})")]
    TickRate { value: u16, min: u16, max: u16 },
    #[error("max ticks per advance must be at least 1")]
    NoTicksPerAdvance,
}

pub(crate) fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Multiplicative factors: `(0, 1]`
pub(crate) fn check_factor(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::NotAFactor { field, value })
    }
}

pub(crate) fn check_fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotAFraction { field, value })
    }
}
