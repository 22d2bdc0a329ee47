use arrayvec::ArrayVec;
use fastrand::Rng;
use glam::Vec3A;

use super::{EffectsConfig, Particle, ParticleKind};
use crate::{VehicleState, consts::effects::POOL_CAPACITY};

/// Short-lived cosmetic particles
///
/// Nothing here feeds back into the simulation. Emissions past [`POOL_CAPACITY`] are dropped.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    config: EffectsConfig,
    particles: ArrayVec<Particle, POOL_CAPACITY>,
}

impl ParticlePool {
    #[must_use]
    pub const fn new(config: EffectsConfig) -> Self {
        Self {
            config,
            particles: ArrayVec::new_const(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EffectsConfig {
        &self.config
    }

    pub const fn set_config(&mut self, config: EffectsConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Maybe leaves a puff of smoke behind a drifting car
    ///
    /// Returns true if a puff was added.
    pub fn emit_drift_smoke(&mut self, vehicle: &VehicleState, rng: &mut Rng) -> bool {
        let config = &self.config;
        if !config.enabled || !vehicle.is_drifting || vehicle.speed() <= config.smoke_min_speed {
            return false;
        }

        if rng.f32() >= config.smoke_emit_chance {
            return false;
        }

        let jitter = Vec3A::new(
            (rng.f32() - 0.5) * config.smoke_jitter,
            0.0,
            (rng.f32() - 0.5) * config.smoke_jitter,
        );

        let mut position = vehicle.position - vehicle.forward_dir() * config.smoke_behind_dist;
        position += jitter;
        position.y = config.smoke_height;

        let puff = Particle {
            kind: ParticleKind::Smoke,
            position,
            velocity: Vec3A::ZERO,
            scale: config.smoke_start_scale,
            opacity: config.smoke_start_opacity,
            life: 1.0,
        };

        self.particles.try_push(puff).is_ok()
    }

    /// Throws a ring of particles out of a collected item
    ///
    /// Returns how many fit in the pool.
    pub fn emit_burst(&mut self, position: Vec3A, rng: &mut Rng) -> usize {
        let config = self.config;
        if !config.enabled {
            return 0;
        }

        let origin = Vec3A::new(position.x, config.burst_height, position.z);

        let mut added = 0;
        for _ in 0..config.burst_count {
            let dir = Vec3A::new(
                (rng.f32() - 0.5) * 2.0,
                rng.f32(),
                (rng.f32() - 0.5) * 2.0,
            )
            .try_normalize()
            .unwrap_or(Vec3A::Y);
            let speed = rng.f32() * config.burst_speed_range + config.burst_min_speed;

            let particle = Particle {
                kind: ParticleKind::Burst,
                position: origin,
                velocity: dir * speed,
                scale: 1.0,
                opacity: 1.0,
                life: 1.0,
            };

            if self.particles.try_push(particle).is_err() {
                break;
            }
            added += 1;
        }

        added
    }

    /// Ages every particle one tick and removes the expired ones
    pub fn update(&mut self) {
        let config = &self.config;

        self.particles.retain(|p| match p.kind {
            ParticleKind::Smoke => {
                p.scale *= config.smoke_decay;
                p.opacity *= config.smoke_decay;
                p.scale >= config.smoke_min_scale
            }
            ParticleKind::Burst => {
                p.life -= config.burst_life_decay;
                p.opacity = p.life.max(0.0);
                p.position += p.velocity;
                p.velocity *= config.burst_drag;
                p.life > 0.0
            }
        });
    }
}
