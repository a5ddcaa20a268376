//! Emission rate for the reveal's particle stream.
//!
//! Two terms add up each frame: a fractional carry that accumulates
//! `density · dt / 220` and pays out whole particles, and a flat burst of
//! `max(1, round(density / 9))`. The carry keeps low densities smooth, the
//! burst keeps high densities visible. The sum grows non-linearly with
//! density; both terms are kept as tuned.

/// Milliseconds of animation per unit of density in the carry term.
pub const CARRY_MS_PER_PARTICLE: f32 = 220.0;
/// Density divisor for the per-frame burst.
pub const BURST_DIVISOR: f32 = 9.0;

/// Particles a frame gets from the flat burst term. Zero density means zero.
pub fn burst_count(density: f32) -> usize {
    if density <= 0.0 {
        0
    } else {
        ((density / BURST_DIVISOR).round() as usize).max(1)
    }
}

/// Fractional spawn credit carried between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnCarry {
    carry: f32,
}

impl SpawnCarry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add credit for `dt_ms` at `density`. Returns the whole particles to
    /// spawn; the remainder stays in the carry.
    pub fn accumulate(&mut self, density: f32, dt_ms: f32) -> usize {
        self.carry += density * dt_ms / CARRY_MS_PER_PARTICLE;
        let whole = self.carry.floor();
        self.carry -= whole;
        whole as usize
    }

    /// Outstanding fractional credit, always in [0, 1).
    pub fn value(&self) -> f32 {
        self.carry
    }
}
