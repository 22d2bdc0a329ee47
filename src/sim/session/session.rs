use fastrand::Rng;
use log::{debug, info};

use super::{FixedStepper, GameStats, SessionConfig, SimEvent};
use crate::{
    Action, CameraMode, CameraState, ChaseCamera, CollectibleSet, CollisionResolver, ConfigError,
    ControlState, InputConditioner, KeyHandle, Particle, ParticlePool, Vehicle, VehicleState,
};

/// One play-through: input, dynamics, collisions and camera run in that order every tick
///
/// Key-event callbacks get a [`KeyHandle`] and may only flip key flags. Everything else is
/// mutated through `&mut self`, so no caller can observe a half-finished tick or reset.
pub struct Session {
    config: SessionConfig,
    input: InputConditioner,
    vehicle: Vehicle,
    collisions: CollisionResolver,
    collectibles: CollectibleSet,
    camera: ChaseCamera,
    particles: ParticlePool,
    stepper: FixedStepper,
    stats: GameStats,
    rng: Rng,
    /// Vehicle pose before the latest tick, for interpolation
    prev_vehicle: VehicleState,
    prev_camera: CameraState,
    tick_count: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with the default tuning and the stock portfolio
    #[must_use]
    pub fn new() -> Self {
        Self::build(SessionConfig::default())
    }

    pub fn new_with_config(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        let collectibles = CollectibleSet::from_seeds(&config.seeds, &config.layout);
        let vehicle = Vehicle::new(config.vehicle);
        let mut camera = ChaseCamera::new(config.camera, rng.u64(..));
        let prev_camera = camera.snap_to(vehicle.get_state());

        info!(
            "Created session with {} collectibles, ticking at {}Hz",
            collectibles.len(),
            config.stepper.tick_rate
        );

        Self {
            input: InputConditioner::new(config.input),
            collisions: CollisionResolver::new(config.collision),
            particles: ParticlePool::new(config.effects),
            stepper: FixedStepper::new(config.stepper),
            stats: GameStats::new(collectibles.total()),
            prev_vehicle: vehicle.snapshot(),
            prev_camera,
            vehicle,
            collectibles,
            camera,
            rng,
            tick_count: 0,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// A handle for key-event callbacks, usable from any thread
    #[must_use]
    pub fn key_handle(&self) -> KeyHandle {
        self.input.key_handle()
    }

    pub fn set_key(&self, action: Action, pressed: bool) {
        self.input.set_key(action, pressed);
    }

    #[must_use]
    pub const fn input(&self) -> &InputConditioner {
        &self.input
    }

    #[must_use]
    pub const fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    #[must_use]
    pub const fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    pub const fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera.set_mode(mode);
    }

    #[must_use]
    pub const fn collectibles(&self) -> &CollectibleSet {
        &self.collectibles
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    /// Ticks run since creation or the last reset
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Runs exactly one tick from the held keys
    pub fn step(&mut self) -> Vec<SimEvent> {
        let controls = self.input.update();
        self.tick(controls)
    }

    /// Runs exactly one tick with `controls`, bypassing key smoothing
    pub fn step_with_controls(&mut self, controls: ControlState) -> Vec<SimEvent> {
        self.tick(controls)
    }

    /// Runs as many ticks as `elapsed` seconds of frame time cover
    ///
    /// Leftover time carries into the next call and feeds [`interpolated`](Self::interpolated).
    pub fn advance(&mut self, elapsed: f32) -> Vec<SimEvent> {
        let ticks = self.stepper.push(elapsed);

        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(self.step());
        }
        events
    }

    /// Vehicle and camera blended between the last two ticks by the leftover frame time
    #[must_use]
    pub fn interpolated(&self) -> (VehicleState, CameraState) {
        let alpha = self.stepper.alpha();
        (
            self.prev_vehicle.lerp(self.vehicle.get_state(), alpha),
            self.prev_camera.lerp(self.camera.state(), alpha),
        )
    }

    /// Back to the starting line with everything uncollected
    ///
    /// Held keys stay held. A drift in progress is closed with a [`SimEvent::DriftEnded`]
    /// carrying the score it had reached.
    pub fn reset(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.vehicle.is_drifting() {
            let score = self.vehicle.drift_score_display();
            debug!("Drift ended by reset, drift score {score}");
            events.push(SimEvent::DriftEnded { score });
        }

        if let Some(seed) = self.config.rng_seed {
            self.rng.seed(seed);
            self.camera.reseed(self.rng.u64(..));
        }

        self.vehicle.reset();
        self.collectibles.reset();
        self.stats.reset();
        self.input.reset();
        self.particles.clear();
        self.stepper.reset();

        self.prev_camera = self.camera.snap_to(self.vehicle.get_state());
        self.prev_vehicle = self.vehicle.snapshot();
        self.tick_count = 0;

        info!("Session reset");
        events
    }

    fn tick(&mut self, controls: ControlState) -> Vec<SimEvent> {
        let mut events = Vec::new();

        self.prev_vehicle = self.vehicle.snapshot();
        self.prev_camera = *self.camera.state();
        let was_drifting = self.vehicle.is_drifting();

        self.vehicle.update(controls);

        let result = self
            .collisions
            .check(self.vehicle.state_mut(), self.collectibles.records_mut());

        if let Some(record) = result.picked_up {
            self.stats.record_pickup(&record);
            self.particles.emit_burst(record.position, &mut self.rng);
            info!(
                "Picked up {} \"{}\" for {} points ({}/{})",
                record.kind,
                record.label,
                record.points,
                self.collectibles.collected_count(),
                self.collectibles.total()
            );
            events.push(SimEvent::Pickup(record));

            if self.collectibles.is_complete() {
                info!("All collectibles picked up, final score {}", self.stats.score);
                events.push(SimEvent::AllCollected);
            }
        }

        if result.hit_boundary {
            let position = self.vehicle.get_state().position;
            debug!("Boundary hit, car placed at {position}");
            events.push(SimEvent::BoundaryHit { position });
        }

        match (was_drifting, self.vehicle.is_drifting()) {
            (false, true) => {
                debug!("Drift started at speed {:.3}", self.vehicle.speed());
                events.push(SimEvent::DriftStarted);
            }
            (true, false) => {
                let score = self.vehicle.drift_score_display();
                debug!("Drift ended, drift score {score}");
                events.push(SimEvent::DriftEnded { score });
            }
            _ => {}
        }
        self.stats.drift_score = self.vehicle.drift_score_display();

        self.camera.update(self.vehicle.get_state());

        self.particles.update();
        self.particles
            .emit_drift_smoke(self.vehicle.get_state(), &mut self.rng);

        self.tick_count += 1;
        events
    }
}
