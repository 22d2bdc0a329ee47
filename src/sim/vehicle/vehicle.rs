use glam::Vec3A;

use super::{FrictionModel, VehicleConfig, VehicleState, vehicle_state::wrap_angle};
use crate::{
    ControlState,
    math::{forward_dir, right_dir},
};

/// The car's dynamics model
///
/// Integrates one fixed tick per [`update`](Self::update) with forward Euler. All rates in
/// [`VehicleConfig`] are per tick, so callers must drive this at a stable cadence.
pub struct Vehicle {
    config: VehicleConfig,
    state: VehicleState,
}

impl Vehicle {
    #[must_use]
    pub const fn new(config: VehicleConfig) -> Self {
        Self {
            config,
            state: VehicleState::DEFAULT,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &VehicleConfig {
        &self.config
    }

    pub const fn set_config(&mut self, config: VehicleConfig) {
        self.config = config;
    }

    #[must_use]
    pub const fn get_state(&self) -> &VehicleState {
        &self.state
    }

    /// Read-only copy of the current state
    #[must_use]
    pub const fn snapshot(&self) -> VehicleState {
        self.state
    }

    pub const fn set_state(&mut self, state: VehicleState) {
        self.state = state;
    }

    /// Position and velocity are adjusted in place by boundary response
    pub(crate) const fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.state.speed()
    }

    #[must_use]
    pub const fn is_drifting(&self) -> bool {
        self.state.is_drifting
    }

    #[must_use]
    pub const fn drift_score(&self) -> f32 {
        self.state.drift_score
    }

    #[must_use]
    pub fn drift_score_display(&self) -> u32 {
        self.state.drift_score_display()
    }

    /// Back to rest on the track origin, drift score cleared
    pub const fn reset(&mut self) {
        self.state = VehicleState::DEFAULT;
    }

    /// Advances the car by one tick
    ///
    /// Out-of-range controls are clamped, never rejected.
    pub fn update(&mut self, controls: ControlState) {
        let controls = controls.clamp();
        let config = &self.config;
        let state = &mut self.state;

        let forward = forward_dir(state.heading);
        let mut vel = state.velocity;

        // Engine
        vel += forward * (controls.throttle * config.acceleration);

        // Brake against the motion, reverse from (near) rest
        if controls.brake > 0.0 {
            if vel.length() < config.reverse_speed_thresh {
                vel -= forward
                    * (controls.brake * config.acceleration * config.reverse_accel_scale);
            } else {
                let decel = (controls.brake * config.brake_force).min(vel.length());
                vel -= vel.normalize_or_zero() * decel;
            }
        }

        // Handbrake
        let speed = vel.length();
        let drift_engaged = controls.handbrake && speed > config.drift_min_speed();
        if drift_engaged {
            let decel = (config.brake_force * config.handbrake_decel_scale).min(speed);
            vel -= vel.normalize_or_zero() * decel;
        }

        vel = vel.clamp_length_max(config.max_speed);
        let speed = vel.length();

        // Steering
        state.yaw_rate = if speed > config.min_steer_speed {
            config
                .steering_model
                .yaw_rate(controls.steering, speed, state.yaw_rate)
        } else {
            0.0
        };
        state.heading = wrap_angle(state.heading - state.yaw_rate);

        let forward = forward_dir(state.heading);
        let right = right_dir(state.heading);

        // Tire grip
        if let FrictionModel::LateralSplit {
            lateral_grip,
            drift_grip_multiplier,
            ..
        } = config.friction_model
        {
            let grip = if drift_engaged {
                lateral_grip * drift_grip_multiplier
            } else {
                lateral_grip
            };

            let forward_speed = vel.dot(forward);
            let lateral_speed = vel.dot(right);
            vel = forward * forward_speed + right * (lateral_speed * (1.0 - grip));
        }

        // Rolling resistance
        vel *= config.friction;

        state.position += vel;
        state.position.y = 0.0;

        vel = Self::snap_to_rest(vel, config.rest_speed, config.component_epsilon);
        state.velocity = vel;

        let forward_speed = vel.dot(forward);
        state.lateral_speed = vel.dot(right);
        state.drift_angle = if vel == Vec3A::ZERO {
            0.0
        } else {
            state.lateral_speed.atan2(forward_speed.abs())
        };

        state.is_drifting = match config.friction_model {
            FrictionModel::Uniform => drift_engaged,
            FrictionModel::LateralSplit {
                drift_lateral_thresh,
                ..
            } => drift_engaged && state.lateral_speed.abs() > drift_lateral_thresh,
        };

        if state.is_drifting {
            state.drift_score += (vel.length() * config.drift_score_rate).max(0.0);
        }
    }

    fn snap_to_rest(vel: Vec3A, rest_speed: f32, component_epsilon: f32) -> Vec3A {
        if vel.length() < rest_speed {
            return Vec3A::ZERO;
        }

        let snap = |c: f32| if c.abs() < component_epsilon { 0.0 } else { c };
        Vec3A::new(snap(vel.x), 0.0, snap(vel.z))
    }
}
