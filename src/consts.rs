//! Default tuning values.
//!
//! Anything with a per-tick meaning (accelerations, friction factors, smoothing factors)
//! is expressed per simulation tick at [`stepper::TICK_RATE`].

pub mod input {
    /// Exponential smoothing factor for throttle and brake, per tick
    pub const SMOOTHING: f32 = 0.15;
    /// Steering smooths faster than the pedals
    pub const STEER_SMOOTHING_SCALE: f32 = 2.0;
    /// Smoothed values below this magnitude snap to exactly zero
    pub const SNAP_EPSILON: f32 = 0.01;
}

pub mod vehicle {
    pub const MAX_SPEED: f32 = 1.2;
    pub const ACCELERATION: f32 = 0.1;
    pub const BRAKE_FORCE: f32 = 0.12;
    /// Below this speed the brake pedal reverses instead of braking
    pub const REVERSE_SPEED_THRESH: f32 = 0.1;
    /// Reverse thrust as a fraction of `ACCELERATION`
    pub const REVERSE_ACCEL_SCALE: f32 = 0.6;
    /// Handbrake deceleration as a fraction of `BRAKE_FORCE`
    pub const HANDBRAKE_DECEL_SCALE: f32 = 0.3;
    /// Rolling resistance, multiplied into the velocity every tick
    pub const FRICTION: f32 = 0.92;

    /// Fraction of lateral velocity removed per tick while gripping
    pub const LATERAL_GRIP: f32 = 0.85;
    /// Scales `LATERAL_GRIP` while the handbrake drift is engaged
    pub const DRIFT_GRIP_MULTIPLIER: f32 = 0.15;
    /// Drift can only engage above this fraction of `MAX_SPEED`
    pub const DRIFT_SPEED_RATIO: f32 = 0.25;
    /// Lateral speed needed before an engaged drift counts as drifting
    pub const DRIFT_LATERAL_THRESH: f32 = 0.01;
    pub const DRIFT_SCORE_RATE: f32 = 2.0;

    /// No steering below this speed
    pub const MIN_STEER_SPEED: f32 = 0.1;
    pub const TURN_SENSITIVITY: f32 = 0.03;

    pub mod ackermann {
        pub const WHEELBASE: f32 = 2.5;
        pub const MAX_STEER_ANGLE: f32 = 0.6;
        /// Radians per tick
        pub const MAX_YAW_RATE: f32 = 0.05;
        /// Applied to the yaw rate while the wheel is centered
        pub const YAW_DECAY: f32 = 0.9;
        /// `tan(steer_angle)` below this is treated as driving straight
        pub const MIN_STEER_TAN: f32 = 1e-4;
    }

    /// Below this speed the whole velocity snaps to zero
    pub const REST_SPEED: f32 = 0.01;
    /// Individual velocity components below this snap to zero
    pub const COMPONENT_EPSILON: f32 = 1e-4;
}

pub mod collision {
    pub const PICKUP_RADIUS: f32 = 3.0;
    pub const BOUNDARY_RADIUS: f32 = 85.0;
    pub const BOUNCE_MULTIPLIER: f32 = 1.5;
    pub const SPEED_REDUCTION: f32 = 0.3;
    /// Fraction of the boundary radius the car is placed at after a hit
    pub const SAFE_RADIUS_FACTOR: f32 = 0.98;
}

pub mod camera {
    pub const BASE_DISTANCE: f32 = 12.0;
    pub const BASE_HEIGHT: f32 = 6.0;
    pub const DISTANCE_GAIN: f32 = 8.0;
    pub const HEIGHT_GAIN: f32 = 4.0;
    /// `speed_factor = min(speed * SPEED_FACTOR_SCALE, 1)`
    pub const SPEED_FACTOR_SCALE: f32 = 2.0;
    pub const LERP_BASE: f32 = 0.08;
    pub const LERP_SPEED_GAIN: f32 = 0.02;
    pub const LOOK_AHEAD_GAIN: f32 = 3.0;
    pub const LOOK_HEIGHT: f32 = 2.0;
    pub const SHAKE_SCALE: f32 = 0.5;
    /// Per-axis shake amplitude relative to `SHAKE_SCALE`
    pub const SHAKE_AXIS_SCALE: [f32; 3] = [1.0, 0.5, 0.3];
    /// Drift angle at which shake intensity saturates
    pub const SHAKE_FULL_DRIFT_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    pub mod presets {
        pub const CLOSE: (f32, f32) = (8.0, 4.0);
        pub const FAR: (f32, f32) = (16.0, 8.0);
        pub const CINEMATIC: (f32, f32) = (20.0, 10.0);
        pub const CINEMATIC_LERP_BASE: f32 = 0.05;
    }
}

pub mod effects {
    pub const POOL_CAPACITY: usize = 256;

    pub mod smoke {
        pub const MIN_SPEED: f32 = 0.3;
        pub const EMIT_CHANCE: f32 = 0.4;
        pub const BEHIND_DIST: f32 = 2.5;
        pub const JITTER: f32 = 1.5;
        pub const HEIGHT: f32 = 0.1;
        pub const START_SCALE: f32 = 1.0;
        pub const START_OPACITY: f32 = 0.8;
        pub const DECAY: f32 = 0.95;
        pub const MIN_SCALE: f32 = 0.1;
    }

    pub mod burst {
        pub const COUNT: usize = 12;
        pub const MIN_SPEED: f32 = 2.0;
        pub const SPEED_RANGE: f32 = 5.0;
        pub const DRAG: f32 = 0.98;
        pub const LIFE_DECAY: f32 = 0.02;
        pub const HEIGHT: f32 = 2.0;
    }
}

pub mod layout {
    pub const PROJECT_RING_RADIUS: f32 = 30.0;
    pub const SKILL_RING_RADIUS: f32 = 15.0;
    pub const EXPERIENCE_RING_RADIUS: f32 = 50.0;
}

pub mod stepper {
    pub const TICK_RATE: u16 = 60;
    pub const MIN_TICK_RATE: u16 = 15;
    pub const MAX_TICK_RATE: u16 = 240;
    /// Backlog beyond this many ticks in one `advance` is dropped
    pub const MAX_TICKS_PER_ADVANCE: u32 = 5;
}
