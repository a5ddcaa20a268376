//! Surface trait for 2D drawing backends.
//!
//! The engine never talks to a browser directly. Everything it draws goes
//! through [`Surface`], which the web crate implements over
//! `CanvasRenderingContext2d` and which [`RecordingSurface`] implements
//! headlessly for tests.
//!
//! Coordinates are logical (CSS) pixels. Device-pixel-ratio scaling is the
//! implementor's job.
//!
//! [`RecordingSurface`]: super::recording::RecordingSurface

use glam::Vec2;

/// Font stack used for the title text.
pub const TITLE_FONT_FAMILY: &str =
    "ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial";

/// Weight used for the title text.
pub const TITLE_FONT_WEIGHT: u16 = 700;

/// A font description in the shape CSS `font` shorthand expects.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub weight: u16,
    pub size_px: f32,
    pub family: &'static str,
}

impl FontSpec {
    /// Bold title font at the given pixel size.
    pub fn title(size_px: f32) -> Self {
        Self {
            weight: TITLE_FONT_WEIGHT,
            size_px,
            family: TITLE_FONT_FAMILY,
        }
    }

    /// CSS `font` shorthand, e.g. `700 62px ui-sans-serif, ...`.
    pub fn css(&self) -> String {
        format!("{} {}px {}", self.weight, self.size_px, self.family)
    }
}

/// Straight-alpha RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Hue/saturation/lightness color. `h` in degrees, `s`/`l` in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub fn css(&self) -> String {
        format!("hsla({:.0}, {}%, {}%, {:.3})", self.h, self.s, self.l, self.a)
    }
}

/// One stop of a linear gradient. `offset` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Linear gradient between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: Vec2,
    pub to: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self {
            from,
            to,
            stops: Vec::with_capacity(3),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// 2D drawing capability the animator renders into.
///
/// Text drawing is bracketed: `begin_text` sets font and paint once, any
/// number of `fill_text` calls follow, `end_text` restores state. Draw calls
/// are infallible; a backend that cannot draw simply drops the call.
///
/// # Example Implementation
///
/// ```ignore
/// struct SkiaSurface { canvas: skia::Canvas, /* ... */ }
///
/// impl Surface for SkiaSurface {
///     fn size(&self) -> Vec2 { Vec2::new(self.w, self.h) }
///     fn measure_text(&mut self, text: &str, font: &FontSpec) -> f32 {
///         self.font_for(font).measure_str(text, None).0
///     }
///     // ...
/// }
/// ```
pub trait Surface {
    /// Logical size of the drawable area.
    fn size(&self) -> Vec2;

    /// Advance width of `text` rendered in `font`.
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f32;

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle with a gradient.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &LinearGradient);

    /// Start a run of text draws. `fill_text` positions use a middle baseline.
    fn begin_text(&mut self, font: &FontSpec, paint: &LinearGradient);

    /// Draw `text` with its left edge at `pos.x` and vertical middle at `pos.y`.
    fn fill_text(&mut self, text: &str, pos: Vec2, alpha: f32);

    /// End the current run of text draws.
    fn end_text(&mut self);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_font_css() {
        let font = FontSpec::title(62.0);
        assert_eq!(
            font.css(),
            "700 62px ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial"
        );
    }

    #[test]
    fn rgba_css() {
        assert_eq!(Rgba::new(255, 248, 237, 0.92).css(), "rgba(255,248,237,0.92)");
    }

    #[test]
    fn hsla_css_rounds_hue_and_alpha() {
        let c = Hsla { h: 271.6, s: 95.0, l: 66.0, a: 0.123456 };
        assert_eq!(c.css(), "hsla(272, 95%, 66%, 0.123)");
    }

    #[test]
    fn gradient_builder_keeps_stop_order() {
        let g = LinearGradient::new(Vec2::ZERO, Vec2::ONE)
            .with_stop(0.0, Rgba::new(255, 255, 255, 1.0))
            .with_stop(1.0, Rgba::new(0, 0, 0, 0.0));
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[1].offset, 1.0);
    }
}
