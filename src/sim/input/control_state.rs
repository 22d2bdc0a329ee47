/// Normalized controls for one simulation tick
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlState {
    /// 0 to 1
    pub throttle: f32,
    /// 0 to 1
    pub brake: f32,
    /// -1 (full left) to 1 (full right)
    pub steering: f32,
    pub handbrake: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ControlState {
    pub const DEFAULT: Self = Self {
        throttle: 0.0,
        brake: 0.0,
        steering: 0.0,
        handbrake: false,
    };

    /// Full throttle, nothing else
    pub const FULL_THROTTLE: Self = Self {
        throttle: 1.0,
        ..Self::DEFAULT
    };

    /// Brings every value into range; non-finite values become 0
    #[must_use]
    pub fn clamp(mut self) -> Self {
        fn finite_or_zero(v: f32) -> f32 {
            if v.is_finite() { v } else { 0.0 }
        }

        self.throttle = finite_or_zero(self.throttle).clamp(0.0, 1.0);
        self.brake = finite_or_zero(self.brake).clamp(0.0, 1.0);
        self.steering = finite_or_zero(self.steering).clamp(-1.0, 1.0);
        self
    }
}
