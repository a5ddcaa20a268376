//! Control surface adapter.
//!
//! Turns whatever the control form currently holds into a sanitized
//! [`RevealConfig`], and formats the readouts shown next to each control.
//! This is the only place out-of-domain values are handled; the animator
//! assumes every config it sees is in range.

use serde::Deserialize;

use crate::api::config::{RevealConfig, RevealMode};
use crate::api::error::RevealError;
use crate::extensions::easing::clamp;

/// Title used when the text input is empty after sanitizing.
pub const DEFAULT_TITLE: &str = "From Presentation to Proof";

/// Allowed range for one numeric control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
}

impl ControlRange {
    const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into range; non-finite input takes `fallback`.
    pub fn apply(&self, value: f32, fallback: f32) -> f32 {
        if value.is_finite() {
            clamp(value, self.min, self.max)
        } else {
            fallback
        }
    }
}

pub const OVERLAP_RANGE: ControlRange = ControlRange::new(0.0, 0.95);
pub const TEXT_SPEED_RANGE: ControlRange = ControlRange::new(0.1, 8.0);
pub const PARTICLE_SPEED_RANGE: ControlRange = ControlRange::new(0.1, 8.0);
pub const DENSITY_RANGE: ControlRange = ControlRange::new(0.0, 240.0);
pub const LIFESPAN_RANGE: ControlRange = ControlRange::new(60.0, 10_000.0);
pub const SIZE_RANGE: ControlRange = ControlRange::new(0.2, 40.0);
pub const OPACITY_RANGE: ControlRange = ControlRange::new(0.0, 1.0);

/// Unvalidated control values, as read from the form or a JSON payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawControls {
    pub mode: String,
    pub fade_in: bool,
    pub overlap: f32,
    pub text_speed: f32,
    pub particle_speed: f32,
    pub density: f32,
    pub lifespan: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Default for RawControls {
    fn default() -> Self {
        Self::from(&RevealConfig::default())
    }
}

impl From<&RevealConfig> for RawControls {
    fn from(c: &RevealConfig) -> Self {
        Self {
            mode: c.mode.as_str().to_string(),
            fade_in: c.fade_in,
            overlap: c.overlap,
            text_speed: c.text_speed,
            particle_speed: c.particle_speed,
            density: c.density,
            lifespan: c.lifespan,
            size: c.size,
            opacity: c.opacity,
        }
    }
}

impl RawControls {
    /// Parse raw controls from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, RevealError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Clamp every value into its domain and build a config snapshot.
    pub fn sanitize(&self) -> RevealConfig {
        let d = RevealConfig::default();
        RevealConfig {
            mode: RevealMode::parse(&self.mode),
            fade_in: self.fade_in,
            overlap: OVERLAP_RANGE.apply(self.overlap, d.overlap),
            text_speed: TEXT_SPEED_RANGE.apply(self.text_speed, d.text_speed),
            particle_speed: PARTICLE_SPEED_RANGE.apply(self.particle_speed, d.particle_speed),
            density: DENSITY_RANGE.apply(self.density, d.density),
            lifespan: LIFESPAN_RANGE.apply(self.lifespan, d.lifespan),
            size: SIZE_RANGE.apply(self.size, d.size),
            opacity: OPACITY_RANGE.apply(self.opacity, d.opacity),
        }
    }
}

/// Human-readable value labels for the control form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readouts {
    pub overlap: String,
    pub text_speed: String,
    pub particle_speed: String,
    pub density: String,
    pub lifespan: String,
    pub size: String,
    pub opacity: String,
}

impl Readouts {
    pub fn from_config(config: &RevealConfig) -> Self {
        Self {
            overlap: format!("{}%", (config.overlap * 100.0).round() as i32),
            text_speed: format!("{:.1}x", config.text_speed),
            particle_speed: format!("{:.1}x", config.particle_speed),
            density: format!("{}", config.density.round() as i32),
            lifespan: format!("{}ms", config.lifespan.round() as i32),
            size: format!("{:.1}", config.size),
            opacity: format!("{:.2}", config.opacity),
        }
    }
}

/// Collapse whitespace runs to single spaces and trim; empty → [`DEFAULT_TITLE`].
pub fn sanitize_text(raw: &str) -> String {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_unchanged() {
        assert_eq!(RawControls::default().sanitize(), RevealConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let raw = RawControls {
            overlap: 1.0,
            text_speed: 0.0,
            particle_speed: 100.0,
            density: -5.0,
            lifespan: 0.0,
            size: -1.0,
            opacity: 3.0,
            ..RawControls::default()
        };
        let c = raw.sanitize();
        assert!(c.overlap < 1.0);
        assert_eq!(c.text_speed, 0.1);
        assert_eq!(c.particle_speed, 8.0);
        assert_eq!(c.density, 0.0);
        assert_eq!(c.lifespan, 60.0);
        assert_eq!(c.size, 0.2);
        assert_eq!(c.opacity, 1.0);
    }

    #[test]
    fn sanitized_values_write_back_in_range() {
        let raw = RawControls { mode: "WORD".into(), text_speed: 0.0, overlap: 1.5, ..RawControls::default() };
        let back = RawControls::from(&raw.sanitize());
        assert_eq!(back.mode, "word");
        assert_eq!(back.text_speed, 0.1);
        assert_eq!(back.overlap, 0.95);
        assert_eq!(back.sanitize(), raw.sanitize());
    }

    #[test]
    fn non_finite_values_take_defaults() {
        let raw = RawControls {
            text_speed: f32::NAN,
            density: f32::INFINITY,
            ..RawControls::default()
        };
        let c = raw.sanitize();
        assert_eq!(c.text_speed, 1.0);
        assert_eq!(c.density, 16.0);
    }

    #[test]
    fn unknown_mode_is_letter() {
        let raw = RawControls { mode: "paragraph".into(), ..RawControls::default() };
        assert_eq!(raw.sanitize().mode, RevealMode::Letter);
    }

    #[test]
    fn raw_controls_from_json() {
        let raw = RawControls::from_json(r#"{ "mode": "word", "overlap": 0.5 }"#).unwrap();
        assert_eq!(raw.mode, "word");
        assert_eq!(raw.overlap, 0.5);
        assert_eq!(raw.density, 16.0);
        assert!(RawControls::from_json("42").is_err());
    }

    #[test]
    fn readouts_format() {
        let r = Readouts::from_config(&RevealConfig::default());
        assert_eq!(r.overlap, "20%");
        assert_eq!(r.text_speed, "1.0x");
        assert_eq!(r.particle_speed, "1.0x");
        assert_eq!(r.density, "16");
        assert_eq!(r.lifespan, "1100ms");
        assert_eq!(r.size, "3.5");
        assert_eq!(r.opacity, "0.70");
    }

    #[test]
    fn sanitize_text_collapses_whitespace() {
        assert_eq!(sanitize_text("  Hello \t\n  world  "), "Hello world");
    }

    #[test]
    fn sanitize_text_falls_back_to_default() {
        assert_eq!(sanitize_text(""), DEFAULT_TITLE);
        assert_eq!(sanitize_text(" \n\t "), DEFAULT_TITLE);
    }
}
