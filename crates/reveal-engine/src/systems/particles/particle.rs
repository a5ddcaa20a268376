//! A single emitted particle.

use glam::Vec2;

use super::rng::RandomSource;
use crate::api::config::RevealConfig;
use crate::renderer::traits::Hsla;

/// A single particle with kinematic and visual-decay state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in logical pixels.
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    pub size: f32,
    pub base_alpha: f32,
    /// Remaining life in ms.
    pub life: f32,
    /// Life at spawn; fixed for the particle's lifetime.
    pub life_max: f32,
    /// Hue in degrees.
    pub hue: f32,
}

impl Particle {
    /// Downward acceleration at 1× particle speed, px/s².
    pub const GRAVITY: f32 = 30.0;
    /// Per-step multiplicative horizontal drag.
    pub const DRAG: f32 = 0.993;
    /// Half-width of the upward emission cone, radians.
    pub const CONE_HALF_SPREAD: f32 = 0.6;
    pub const MIN_SPEED: f32 = 34.0;
    pub const SPEED_RANGE: f32 = 88.0;
    pub const MIN_RADIUS: f32 = 0.4;
    pub const SATURATION: f32 = 95.0;
    pub const LIGHTNESS: f32 = 66.0;

    /// Emit a particle at `origin` with randomized kinematics from `config`.
    pub fn emit<R: RandomSource + ?Sized>(origin: Vec2, config: &RevealConfig, rng: &mut R) -> Self {
        let angle = -std::f32::consts::FRAC_PI_2 + (rng.next_f32() - 0.5) * 2.0 * Self::CONE_HALF_SPREAD;
        let speed = (Self::MIN_SPEED + rng.next_f32() * Self::SPEED_RANGE) * config.particle_speed;
        let life = config.lifespan * (0.7 + rng.next_f32() * 0.7);

        Particle {
            position: origin,
            velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            size: config.size * (0.45 + rng.next_f32() * 0.95),
            base_alpha: config.opacity * (0.6 + rng.next_f32() * 0.5),
            life,
            life_max: life,
            hue: 230.0 + rng.next_f32() * 95.0,
        }
    }

    /// Advance by `dt_ms`. Returns false when expired; an expired particle is
    /// not moved.
    pub fn tick(&mut self, dt_ms: f32, particle_speed: f32) -> bool {
        self.life -= dt_ms;
        if self.life <= 0.0 {
            return false;
        }

        let dt = dt_ms / 1000.0;
        self.position += self.velocity * dt;
        self.velocity.y += Self::GRAVITY * particle_speed * dt;
        self.velocity.x *= Self::DRAG;

        true
    }

    /// Remaining life fraction in (0, 1].
    pub fn fade(&self) -> f32 {
        self.life / self.life_max
    }

    /// Draw radius: shrinks to half size as the particle fades.
    pub fn radius(&self) -> f32 {
        (self.size * (0.5 + 0.5 * self.fade())).max(Self::MIN_RADIUS)
    }

    pub fn color(&self) -> Hsla {
        Hsla {
            h: self.hue,
            s: Self::SATURATION,
            l: Self::LIGHTNESS,
            a: self.base_alpha * self.fade(),
        }
    }
}
