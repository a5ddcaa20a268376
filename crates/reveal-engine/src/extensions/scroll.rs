// extensions/scroll.rs
//
// Scroll-position → visual-parameter mapping for the page's "shift zone".
// The host writes the resulting values into CSS custom properties; this module
// only does the math so it can be tested without a DOM.

use super::easing::{clamp, ease_in_out_cubic, ease_out_cubic};

/// Progress at which the intensity crosses into the "proof" state.
pub const PROOF_THRESHOLD: f32 = 0.6;

/// Map shift-zone progress to the page intensity value `v`.
///
/// Three pieces: a slow climb to 0.48, a short hold that only adds 0.06 (a
/// deliberate calm before the color flood), then an ease-out to 1.0.
pub fn map_shift_v(progress: f32) -> f32 {
    let p = clamp(progress, 0.0, 1.0);

    if p < 0.44 {
        return ease_in_out_cubic(p / 0.44) * 0.48;
    }
    if p < 0.56 {
        return 0.48 + ease_in_out_cubic((p - 0.44) / 0.12) * 0.06;
    }
    0.54 + ease_out_cubic((p - 0.56) / 0.44) * 0.46
}

/// Scroll range covered by the shift zone, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftZone {
    pub start: f32,
    pub end: f32,
}

impl Default for ShiftZone {
    fn default() -> Self {
        Self { start: 0.0, end: 1.0 }
    }
}

impl ShiftZone {
    /// Derive the zone from the element's offset box and the viewport height.
    /// The span is kept at least one pixel wide.
    pub fn measure(offset_top: f32, offset_height: f32, viewport_height: f32) -> Self {
        let start = offset_top;
        let mut end = start + offset_height - viewport_height;
        if end <= start + 1.0 {
            end = start + 1.0;
        }
        Self { start, end }
    }

    /// Normalized progress through the zone at `scroll_y`.
    pub fn progress(&self, scroll_y: f32) -> f32 {
        clamp((scroll_y - self.start) / (self.end - self.start), 0.0, 1.0)
    }
}

/// All values the page derives from one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftVars {
    /// Linear progress through the shift zone.
    pub p: f32,
    /// Eased intensity.
    pub v: f32,
    /// Peaks at the middle of the zone.
    pub crack: f32,
    pub depth: f32,
    /// Short pulse around p = 0.56.
    pub impact: f32,
    /// Whole-page scroll progress.
    pub scroll: f32,
    pub proof: bool,
}

impl ShiftVars {
    pub fn compute(zone: &ShiftZone, scroll_y: f32, scroll_height: f32, viewport_height: f32) -> Self {
        let p = zone.progress(scroll_y);
        let v = map_shift_v(p);
        let crack = clamp(1.0 - (p - 0.5).abs() * 2.0, 0.0, 1.0);
        let depth = clamp(ease_out_cubic(clamp((v - 0.16) / 0.84, 0.0, 1.0)), 0.0, 1.0);
        let impact_raw = clamp(1.0 - (p - 0.56).abs() / 0.14, 0.0, 1.0);
        let impact = ease_out_cubic(impact_raw);
        let scrollable = scroll_height - viewport_height;
        let scroll = if scrollable > 0.0 {
            clamp(scroll_y / scrollable, 0.0, 1.0)
        } else {
            0.0
        };

        Self {
            p,
            v,
            crack,
            depth,
            impact,
            scroll,
            proof: v > PROOF_THRESHOLD,
        }
    }

    /// CSS custom properties in the order the page applies them.
    pub fn css_properties(&self) -> [(&'static str, String); 6] {
        [
            ("--p", format!("{:.4}", self.p)),
            ("--v", format!("{:.4}", self.v)),
            ("--crack", format!("{:.4}", self.crack)),
            ("--depth", format!("{:.4}", self.depth)),
            ("--impact", format!("{:.4}", self.impact)),
            ("--scroll", format!("{:.4}", self.scroll)),
        ]
    }

    /// Value for the root element's `data-proof` attribute.
    pub fn proof_flag(&self) -> &'static str {
        if self.proof { "on" } else { "off" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_v_endpoints() {
        assert_eq!(map_shift_v(0.0), 0.0);
        assert!((map_shift_v(1.0) - 1.0).abs() < 1e-6);
        // Clamped outside the zone.
        assert_eq!(map_shift_v(-3.0), 0.0);
        assert!((map_shift_v(7.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn shift_v_is_continuous_at_breakpoints() {
        let eps = 1e-4;
        assert!((map_shift_v(0.44 - eps) - map_shift_v(0.44)).abs() < 1e-3);
        assert!((map_shift_v(0.56 - eps) - map_shift_v(0.56)).abs() < 1e-3);
        assert!((map_shift_v(0.44) - 0.48).abs() < 1e-6);
        assert!((map_shift_v(0.56) - 0.54).abs() < 1e-6);
    }

    #[test]
    fn shift_v_is_monotonic() {
        let mut prev = map_shift_v(0.0);
        for i in 1..=200 {
            let v = map_shift_v(i as f32 / 200.0);
            assert!(v + 1e-6 >= prev, "v dropped at step {}: {} < {}", i, v, prev);
            prev = v;
        }
    }

    #[test]
    fn zone_keeps_minimum_span() {
        let zone = ShiftZone::measure(500.0, 300.0, 900.0);
        assert_eq!(zone.start, 500.0);
        assert_eq!(zone.end, 501.0);
    }

    #[test]
    fn vars_at_zone_middle() {
        let zone = ShiftZone::measure(1000.0, 3000.0, 1000.0);
        let vars = ShiftVars::compute(&zone, 2000.0, 8000.0, 1000.0);
        assert!((vars.p - 0.5).abs() < 1e-6);
        assert!((vars.crack - 1.0).abs() < 1e-6);
        assert!(!vars.proof);
        assert_eq!(vars.proof_flag(), "off");
    }

    #[test]
    fn vars_past_zone_turn_proof_on() {
        let zone = ShiftZone::measure(0.0, 2000.0, 1000.0);
        let vars = ShiftVars::compute(&zone, 5000.0, 6000.0, 1000.0);
        assert_eq!(vars.p, 1.0);
        assert_eq!(vars.scroll, 1.0);
        assert_eq!(vars.impact, 0.0);
        assert!(vars.proof);
    }

    #[test]
    fn short_page_has_no_scroll_progress() {
        let zone = ShiftZone::measure(0.0, 500.0, 1000.0);
        let vars = ShiftVars::compute(&zone, 0.0, 800.0, 1000.0);
        assert_eq!(vars.scroll, 0.0);
    }

    #[test]
    fn css_properties_use_four_decimals() {
        let zone = ShiftZone::measure(0.0, 2000.0, 1000.0);
        let vars = ShiftVars::compute(&zone, 0.0, 4000.0, 1000.0);
        let props = vars.css_properties();
        assert_eq!(props[0], ("--p", "0.0000".to_string()));
        assert_eq!(props[5].0, "--scroll");
    }
}
