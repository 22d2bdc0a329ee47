use fastrand::Rng;
use glam::Vec3A;

use super::{CameraConfig, CameraMode, CameraState};
use crate::{VehicleState, math::rotate_y};

/// Follows the car from behind and above, pulling back as it speeds up
pub struct ChaseCamera {
    config: CameraConfig,
    state: CameraState,
    rng: Rng,
}

impl ChaseCamera {
    /// `seed` drives the drift shake
    #[must_use]
    pub fn new(config: CameraConfig, seed: u64) -> Self {
        Self {
            config,
            state: CameraState::DEFAULT,
            rng: Rng::with_seed(seed),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub const fn set_config(&mut self, config: CameraConfig) {
        self.config = config;
    }

    #[must_use]
    pub const fn mode(&self) -> CameraMode {
        self.config.mode
    }

    /// Switches preset; the camera glides to the new pose over the next ticks
    pub const fn set_mode(&mut self, mode: CameraMode) {
        self.config = self.config.with_mode(mode);
    }

    #[must_use]
    pub const fn state(&self) -> &CameraState {
        &self.state
    }

    pub const fn set_state(&mut self, state: CameraState) {
        self.state = state;
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Places the camera at its ideal pose without smoothing or shake
    pub fn snap_to(&mut self, vehicle: &VehicleState) -> CameraState {
        let speed_factor = self.config.speed_factor(vehicle.speed());
        self.state = CameraState {
            position: vehicle.position + self.ideal_offset(vehicle.heading, speed_factor),
            look_target: self.look_target(vehicle),
        };
        self.state
    }

    /// Moves the camera one tick towards the car
    pub fn update(&mut self, vehicle: &VehicleState) -> CameraState {
        let speed_factor = self.config.speed_factor(vehicle.speed());

        let mut offset = self.ideal_offset(vehicle.heading, speed_factor);
        if vehicle.is_drifting {
            offset += self.shake(vehicle.drift_angle);
        }

        let ideal = vehicle.position + offset;
        let lerp = self.config.lerp_factor(speed_factor);

        self.state = CameraState {
            position: self.state.position.lerp(ideal, lerp),
            look_target: self.look_target(vehicle),
        };
        self.state
    }

    /// Behind and above the car, rotated by its heading
    fn ideal_offset(&self, heading: f32, speed_factor: f32) -> Vec3A {
        let distance = self.config.base_distance + speed_factor * self.config.distance_gain;
        let height = self.config.base_height + speed_factor * self.config.height_gain;

        rotate_y(Vec3A::new(0.0, height, distance), heading)
    }

    fn look_target(&self, vehicle: &VehicleState) -> Vec3A {
        let mut target = vehicle.position + vehicle.velocity * self.config.look_ahead_gain;
        target.y += self.config.look_height;
        target
    }

    fn shake(&mut self, drift_angle: f32) -> Vec3A {
        let intensity = (drift_angle.abs() / self.config.shake_full_drift_angle).min(1.0);
        let amplitude = self.config.shake_scale * intensity;
        let [x, y, z] = self.config.shake_axis_scale;

        Vec3A::new(
            (self.rng.f32() - 0.5) * amplitude * x,
            (self.rng.f32() - 0.5) * amplitude * y,
            (self.rng.f32() - 0.5) * amplitude * z,
        )
    }
}
