use super::{Action, ControlState, InputConfig, KeyHandle, RawKeys};
use crate::math::smooth_towards;

/// Turns raw key flags into smoothed, analog-feeling controls
///
/// Key-event collaborators hold a [`KeyHandle`] and only flip flags; all smoothing happens
/// in [`update`](Self::update), once per tick.
pub struct InputConditioner {
    config: InputConfig,
    keys: KeyHandle,
    throttle: f32,
    brake: f32,
    steering: f32,
}

impl InputConditioner {
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self::with_keys(config, KeyHandle::new())
    }

    /// Reads from an existing set of key flags
    #[must_use]
    pub const fn with_keys(config: InputConfig, keys: KeyHandle) -> Self {
        Self {
            config,
            keys,
            throttle: 0.0,
            brake: 0.0,
            steering: 0.0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &InputConfig {
        &self.config
    }

    pub const fn set_config(&mut self, config: InputConfig) {
        self.config = config;
    }

    /// A handle for key-event callbacks
    #[must_use]
    pub fn key_handle(&self) -> KeyHandle {
        self.keys.clone()
    }

    pub fn set_key(&self, action: Action, pressed: bool) {
        self.keys.set_key(action, pressed);
    }

    #[must_use]
    pub fn raw_keys(&self) -> RawKeys {
        self.keys.raw()
    }

    /// Advances the smoothed values one tick towards the held keys
    pub fn update(&mut self) -> ControlState {
        let keys = self.keys.raw();
        let smoothing = self.config.smoothing;
        let epsilon = self.config.snap_epsilon;

        let throttle_target = f32::from(u8::from(keys.accelerate));
        let brake_target = f32::from(u8::from(keys.brake));
        let steer_target = match (keys.left, keys.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        self.throttle = smooth_towards(self.throttle, throttle_target, smoothing, epsilon);
        self.brake = smooth_towards(self.brake, brake_target, smoothing, epsilon);
        self.steering = smooth_towards(
            self.steering,
            steer_target,
            self.config.steer_smoothing(),
            epsilon,
        );

        ControlState {
            throttle: self.throttle,
            brake: self.brake,
            steering: self.steering,
            handbrake: keys.handbrake,
        }
    }

    /// The controls produced by the last [`update`](Self::update), with the live handbrake flag
    #[must_use]
    pub fn current(&self) -> ControlState {
        ControlState {
            throttle: self.throttle,
            brake: self.brake,
            steering: self.steering,
            handbrake: self.keys.is_pressed(Action::Handbrake),
        }
    }

    /// Drops the smoothing history, leaving key flags untouched
    pub const fn reset(&mut self) {
        self.throttle = 0.0;
        self.brake = 0.0;
        self.steering = 0.0;
    }
}
