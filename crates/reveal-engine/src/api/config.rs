use serde::{Deserialize, Serialize};

use crate::api::controls::RawControls;
use crate::api::error::RevealError;

/// Granularity at which text is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// One unit per character.
    #[default]
    Letter,
    /// One unit per run of non-whitespace or run of whitespace.
    Word,
}

impl RevealMode {
    /// Parse a control value. Anything other than `"word"` means letter mode.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("word") {
            RevealMode::Word
        } else {
            RevealMode::Letter
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealMode::Letter => "letter",
            RevealMode::Word => "word",
        }
    }
}

/// Snapshot of the user-tunable animation parameters.
///
/// Values are expected to be in domain already; build one through
/// [`RawControls::sanitize`](crate::api::controls::RawControls::sanitize)
/// when they come from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealConfig {
    pub mode: RevealMode,
    /// Soft per-unit fade (true) or hard typewriter reveal (false).
    pub fade_in: bool,
    /// Fraction of a unit's reveal window shared with its neighbour, in [0, 1).
    pub overlap: f32,
    /// Inverse duration multiplier.
    pub text_speed: f32,
    /// Multiplier for particle velocity and gravity.
    pub particle_speed: f32,
    /// Particles per 220 ms of animation, plus a proportional per-frame burst.
    pub density: f32,
    /// Base particle lifetime in milliseconds.
    pub lifespan: f32,
    /// Base particle radius in pixels.
    pub size: f32,
    /// Base particle opacity in [0, 1].
    pub opacity: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            mode: RevealMode::Letter,
            fade_in: true,
            overlap: 0.2,
            text_speed: 1.0,
            particle_speed: 1.0,
            density: 16.0,
            lifespan: 1100.0,
            size: 3.5,
            opacity: 0.7,
        }
    }
}

impl RevealConfig {
    /// Reveal duration at 1× text speed.
    pub const BASE_DURATION_MS: f64 = 2600.0;

    /// Total reveal duration for this configuration.
    pub fn duration_ms(&self) -> f64 {
        Self::BASE_DURATION_MS / self.text_speed as f64
    }

    /// Parse a configuration from JSON. Missing fields take their defaults and
    /// every value is clamped into its control range.
    pub fn from_json(json: &str) -> Result<Self, RevealError> {
        Ok(RawControls::from_json(json)?.sanitize())
    }
}

/// Device class, used to size the particle pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classify a browser user agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("mobi") || ua.contains("android") {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Particle pool cap for this class.
    pub fn max_particles(self) -> usize {
        match self {
            DeviceClass::Desktop => 1300,
            DeviceClass::Mobile => 850,
        }
    }
}

/// Mount-time options for an animator. Fixed for the animator's lifetime.
#[derive(Debug, Clone)]
pub struct AnimatorOptions {
    /// Pool cap (default: desktop class).
    pub max_particles: usize,
    /// Reduced-motion preference, queried once at mount.
    pub reduced_motion: bool,
}

impl Default for AnimatorOptions {
    fn default() -> Self {
        Self {
            max_particles: DeviceClass::Desktop.max_particles(),
            reduced_motion: false,
        }
    }
}

impl AnimatorOptions {
    pub fn for_device(device: DeviceClass) -> Self {
        Self {
            max_particles: device.max_particles(),
            ..Self::default()
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }
}
