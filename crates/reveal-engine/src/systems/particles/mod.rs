//! Particle pool for the reveal effect.
//!
//! A bounded, unordered set of short-lived particles. Spawn requests beyond
//! the cap are dropped, never queued. `step` advances and draws in a single
//! pass so the pool is walked once per frame.

mod emitter;
mod particle;
mod rng;

// Re-export public types
pub use emitter::{burst_count, SpawnCarry, BURST_DIVISOR, CARRY_MS_PER_PARTICLE};
pub use particle::Particle;
pub use rng::{ConstantRandom, RandomSource, Rng};

use glam::Vec2;

use crate::api::config::RevealConfig;
use crate::renderer::traits::Surface;

pub struct ParticlePool {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl ParticlePool {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            max_particles,
        }
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Emit up to `count` particles at `origin`. Returns how many were added.
    pub fn spawn<R: RandomSource + ?Sized>(
        &mut self,
        origin: Vec2,
        count: usize,
        config: &RevealConfig,
        rng: &mut R,
    ) -> usize {
        let room = self.max_particles.saturating_sub(self.particles.len());
        let spawn_count = count.min(room);
        for _ in 0..spawn_count {
            self.particles.push(Particle::emit(origin, config, rng));
        }
        spawn_count
    }

    /// Advance every particle by `dt_ms`, drop the expired ones, and draw the
    /// survivors onto `surface`.
    pub fn step<S: Surface + ?Sized>(&mut self, dt_ms: f32, config: &RevealConfig, surface: &mut S) {
        let particle_speed = config.particle_speed;
        self.particles.retain_mut(|p| {
            if !p.tick(dt_ms, particle_speed) {
                return false;
            }
            surface.fill_circle(p.position, p.radius(), p.color());
            true
        });
    }

    /// Remove all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
