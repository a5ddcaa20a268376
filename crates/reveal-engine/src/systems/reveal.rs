//! Progressive text reveal.
//!
//! Each unit gets a window of global progress during which it goes from
//! hidden to shown. Windows advance by `1 − overlap` per unit and are
//! normalized so the last one ends exactly at 1.

use glam::Vec2;

use crate::api::config::RevealConfig;
use crate::extensions::easing::clamp;
use crate::renderer::traits::{FontSpec, LinearGradient, Rgba, Surface};
use crate::systems::layout::TextLayout;

/// Vertical distance a unit settles through while fading in, in px.
pub const SETTLE_OFFSET_PX: f32 = 4.0;

/// Sub-range of global progress over which one unit reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealWindow {
    pub start: f32,
    pub end: f32,
}

impl RevealWindow {
    /// Window for unit `index` of `count` with the given overlap.
    pub fn for_unit(index: usize, count: usize, overlap: f32) -> Self {
        let spacing = 1.0 - overlap;
        let span = 1.0 + count.saturating_sub(1) as f32 * spacing;
        let offset = index as f32 * spacing;
        Self {
            start: offset / span,
            end: (offset + 1.0) / span,
        }
    }

    /// Local reveal fraction of this unit at global `progress`, in [0, 1].
    pub fn local(&self, progress: f32) -> f32 {
        clamp((progress - self.start) / (self.end - self.start), 0.0, 1.0)
    }
}

/// Diagonal wash drawn behind every frame.
pub fn backdrop_gradient(size: Vec2) -> LinearGradient {
    LinearGradient::new(Vec2::ZERO, size)
        .with_stop(0.0, Rgba::new(255, 255, 255, 0.03))
        .with_stop(1.0, Rgba::new(255, 255, 255, 0.0))
}

/// Left-to-right ink across the text's extent.
pub fn ink_gradient(layout: &TextLayout, baseline_y: f32, font_px: f32) -> LinearGradient {
    LinearGradient::new(
        Vec2::new(layout.x, baseline_y - font_px * 0.6),
        Vec2::new(layout.x + layout.width, baseline_y),
    )
    .with_stop(0.0, Rgba::new(255, 255, 255, 0.97))
    .with_stop(0.5, Rgba::new(237, 228, 255, 0.95))
    .with_stop(1.0, Rgba::new(255, 248, 237, 0.92))
}

pub fn draw_backdrop<S: Surface + ?Sized>(surface: &mut S) {
    let size = surface.size();
    surface.fill_rect(Vec2::ZERO, size, &backdrop_gradient(size));
}

/// Draw the text as revealed at `progress` and return the lead point, the
/// particle emission anchor at the currently revealing edge.
///
/// Stops at the first unit that has not started; every later unit starts
/// later still, so none of them would draw anything.
pub fn draw_revealed_text<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &TextLayout,
    progress: f32,
    config: &RevealConfig,
    font: &FontSpec,
    baseline_y: f32,
) -> Vec2 {
    surface.begin_text(font, &ink_gradient(layout, baseline_y, font.size_px));

    let count = layout.units.len();
    let mut lead_x = layout.x;

    for (i, unit) in layout.units.iter().enumerate() {
        let local = RevealWindow::for_unit(i, count, config.overlap).local(progress);
        if local <= 0.0 {
            break;
        }

        lead_x = unit.start_x + unit.width * local;

        if config.fade_in {
            let y = baseline_y + (1.0 - local) * SETTLE_OFFSET_PX;
            surface.fill_text(&unit.text, Vec2::new(unit.start_x, y), local);
        } else if local >= 1.0 {
            surface.fill_text(&unit.text, Vec2::new(unit.start_x, baseline_y), 1.0);
        }
    }

    surface.end_text();

    Vec2::new(lead_x, baseline_y)
}
