use crate::{
    ConfigError,
    consts::vehicle::{self as vehicle_consts, ackermann},
    sim::config_error::{check_factor, check_fraction, check_positive},
};

/// How tire grip acts on the velocity each tick
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrictionModel {
    /// Rolling resistance only; drifting is purely a handbrake state
    Uniform,
    /// Lateral velocity is bled off separately from forward velocity, and the handbrake
    /// relaxes that grip so the tail can slide
    LateralSplit {
        /// Fraction of lateral velocity removed per tick while gripping
        lateral_grip: f32,
        /// Scales `lateral_grip` while a drift is engaged (< 1 lets the car slide)
        drift_grip_multiplier: f32,
        /// Lateral speed an engaged drift needs before it counts as drifting
        drift_lateral_thresh: f32,
    },
}

impl FrictionModel {
    pub const DEFAULT_LATERAL_SPLIT: Self = Self::LateralSplit {
        lateral_grip: vehicle_consts::LATERAL_GRIP,
        drift_grip_multiplier: vehicle_consts::DRIFT_GRIP_MULTIPLIER,
        drift_lateral_thresh: vehicle_consts::DRIFT_LATERAL_THRESH,
    };
}

/// How steering input turns into yaw
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringModel {
    /// `yaw = steering * turn_sensitivity * speed`
    SpeedScaled { turn_sensitivity: f32 },
    /// Yaw rate from the turning radius `wheelbase / tan(steer_angle)`
    Ackermann {
        wheelbase: f32,
        max_steer_angle: f32,
        /// Radians per tick
        max_yaw_rate: f32,
        /// Multiplied into the yaw rate while the wheel is centered
        yaw_decay: f32,
    },
}

impl SteeringModel {
    pub const DEFAULT_SPEED_SCALED: Self = Self::SpeedScaled {
        turn_sensitivity: vehicle_consts::TURN_SENSITIVITY,
    };

    pub const DEFAULT_ACKERMANN: Self = Self::Ackermann {
        wheelbase: ackermann::WHEELBASE,
        max_steer_angle: ackermann::MAX_STEER_ANGLE,
        max_yaw_rate: ackermann::MAX_YAW_RATE,
        yaw_decay: ackermann::YAW_DECAY,
    };

    /// Returns this tick's yaw rate, positive meaning a turn to the right
    ///
    /// `prev_yaw_rate` only matters for the Ackermann decay.
    #[must_use]
    pub fn yaw_rate(&self, steering: f32, speed: f32, prev_yaw_rate: f32) -> f32 {
        match *self {
            Self::SpeedScaled { turn_sensitivity } => steering * turn_sensitivity * speed,
            Self::Ackermann {
                wheelbase,
                max_steer_angle,
                max_yaw_rate,
                yaw_decay,
            } => {
                let steer_tan = (steering * max_steer_angle).tan();
                if steer_tan.abs() < ackermann::MIN_STEER_TAN {
                    return prev_yaw_rate * yaw_decay;
                }

                let turn_radius = wheelbase / steer_tan.abs();
                (speed / turn_radius * steer_tan.signum()).clamp(-max_yaw_rate, max_yaw_rate)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleConfig {
    pub max_speed: f32,
    /// Engine acceleration at full throttle, per tick
    pub acceleration: f32,
    /// Brake deceleration at full pedal, per tick
    pub brake_force: f32,
    /// Below this speed the brake pedal reverses the car instead
    pub reverse_speed_thresh: f32,
    /// Reverse thrust, as a fraction of `acceleration`
    pub reverse_accel_scale: f32,
    /// Handbrake deceleration, as a fraction of `brake_force`
    pub handbrake_decel_scale: f32,
    /// Rolling resistance, multiplied into the velocity every tick
    pub friction: f32,
    pub friction_model: FrictionModel,
    /// Handbrake only engages a drift above `drift_speed_ratio * max_speed`
    pub drift_speed_ratio: f32,
    pub drift_score_rate: f32,
    pub steering_model: SteeringModel,
    /// The car cannot turn at or below this speed
    pub min_steer_speed: f32,
    /// Below this speed the velocity snaps to zero
    pub rest_speed: f32,
    /// Velocity components below this magnitude snap to zero
    pub component_epsilon: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl VehicleConfig {
    pub const DEFAULT: Self = Self {
        max_speed: vehicle_consts::MAX_SPEED,
        acceleration: vehicle_consts::ACCELERATION,
        brake_force: vehicle_consts::BRAKE_FORCE,
        reverse_speed_thresh: vehicle_consts::REVERSE_SPEED_THRESH,
        reverse_accel_scale: vehicle_consts::REVERSE_ACCEL_SCALE,
        handbrake_decel_scale: vehicle_consts::HANDBRAKE_DECEL_SCALE,
        friction: vehicle_consts::FRICTION,
        friction_model: FrictionModel::DEFAULT_LATERAL_SPLIT,
        drift_speed_ratio: vehicle_consts::DRIFT_SPEED_RATIO,
        drift_score_rate: vehicle_consts::DRIFT_SCORE_RATE,
        steering_model: SteeringModel::DEFAULT_SPEED_SCALED,
        min_steer_speed: vehicle_consts::MIN_STEER_SPEED,
        rest_speed: vehicle_consts::REST_SPEED,
        component_epsilon: vehicle_consts::COMPONENT_EPSILON,
    };

    /// Speed above which the handbrake can engage a drift
    #[must_use]
    pub fn drift_min_speed(&self) -> f32 {
        self.drift_speed_ratio * self.max_speed
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("vehicle.max_speed", self.max_speed)?;
        check_positive("vehicle.acceleration", self.acceleration)?;
        check_positive("vehicle.brake_force", self.brake_force)?;
        check_positive("vehicle.reverse_speed_thresh", self.reverse_speed_thresh)?;
        check_fraction("vehicle.reverse_accel_scale", self.reverse_accel_scale)?;
        check_fraction("vehicle.handbrake_decel_scale", self.handbrake_decel_scale)?;
        check_factor("vehicle.friction", self.friction)?;
        check_fraction("vehicle.drift_speed_ratio", self.drift_speed_ratio)?;
        check_positive("vehicle.drift_score_rate", self.drift_score_rate)?;
        check_positive("vehicle.min_steer_speed", self.min_steer_speed)?;
        check_positive("vehicle.rest_speed", self.rest_speed)?;
        check_positive("vehicle.component_epsilon", self.component_epsilon)?;

        if let FrictionModel::LateralSplit {
            lateral_grip,
            drift_grip_multiplier,
            drift_lateral_thresh,
        } = self.friction_model
        {
            check_fraction("vehicle.lateral_grip", lateral_grip)?;
            check_fraction("vehicle.drift_grip_multiplier", drift_grip_multiplier)?;
            check_positive("vehicle.drift_lateral_thresh", drift_lateral_thresh)?;
        }

        match self.steering_model {
            SteeringModel::SpeedScaled { turn_sensitivity } => {
                check_positive("vehicle.turn_sensitivity", turn_sensitivity)
            }
            SteeringModel::Ackermann {
                wheelbase,
                max_steer_angle,
                max_yaw_rate,
                yaw_decay,
            } => {
                check_positive("vehicle.wheelbase", wheelbase)?;
                check_positive("vehicle.max_steer_angle", max_steer_angle)?;
                check_positive("vehicle.max_yaw_rate", max_yaw_rate)?;
                check_fraction("vehicle.yaw_decay", yaw_decay)
            }
        }
    }
}
