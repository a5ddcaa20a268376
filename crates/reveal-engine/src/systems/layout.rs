//! Text layout for the reveal.
//!
//! Splits the title into reveal units and measures each one against the
//! surface's font metrics. Units are laid out left to right from the offset
//! that centers the whole string on the canvas.
//!
//! Font size is fitted separately (see [`fit_font_size`]) and must be re-run
//! whenever the canvas width or the text changes.

use crate::api::config::RevealMode;
use crate::extensions::easing::clamp;
use crate::renderer::traits::{FontSpec, Surface};

/// Text may use at most this fraction of the canvas width.
pub const FIT_WIDTH_RATIO: f32 = 0.86;
/// Font-fit never shrinks below this size.
pub const MIN_FONT_PX: f32 = 24.0;
/// Starting size as a fraction of canvas width, before fitting.
pub const NOMINAL_FONT_RATIO: f32 = 0.078;
pub const NOMINAL_FONT_MIN_PX: f32 = 30.0;
pub const NOMINAL_FONT_MAX_PX: f32 = 84.0;
/// Text baseline as a fraction of canvas height.
pub const BASELINE_RATIO: f32 = 0.58;

/// One atomic element of the reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub text: String,
    pub start_x: f32,
    pub width: f32,
    pub is_whitespace: bool,
}

impl Unit {
    pub fn end_x(&self) -> f32 {
        self.start_x + self.width
    }
}

/// Measured layout of the whole title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLayout {
    /// Left edge of the centered text.
    pub x: f32,
    /// Width of the whole string measured in one piece.
    pub width: f32,
    pub units: Vec<Unit>,
}

impl TextLayout {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Split `text` into reveal units.
///
/// Letter mode yields one unit per `char`. Word mode yields maximal runs of
/// non-whitespace and maximal runs of whitespace, so every character lands in
/// exactly one unit and concatenating the units gives back `text`.
pub fn split_units(text: &str, mode: RevealMode) -> Vec<&str> {
    match mode {
        RevealMode::Letter => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
        RevealMode::Word => {
            let mut units = Vec::new();
            let mut run_start = 0;
            let mut run_is_space = None;
            for (i, c) in text.char_indices() {
                let space = c.is_whitespace();
                match run_is_space {
                    Some(prev) if prev != space => {
                        units.push(&text[run_start..i]);
                        run_start = i;
                    }
                    _ => {}
                }
                run_is_space = Some(space);
            }
            if run_start < text.len() {
                units.push(&text[run_start..]);
            }
            units
        }
    }
}

/// Pick the title font size for `canvas_width`.
///
/// Starts from a width-proportional nominal size and shrinks one pixel at a
/// time until the text fits in [`FIT_WIDTH_RATIO`] of the width or the size
/// reaches [`MIN_FONT_PX`].
pub fn fit_font_size<S: Surface + ?Sized>(surface: &mut S, text: &str, canvas_width: f32) -> f32 {
    let max_width = canvas_width * FIT_WIDTH_RATIO;
    let mut font_px = clamp(
        canvas_width * NOMINAL_FONT_RATIO,
        NOMINAL_FONT_MIN_PX,
        NOMINAL_FONT_MAX_PX,
    );
    while font_px > MIN_FONT_PX {
        if surface.measure_text(text, &FontSpec::title(font_px)) <= max_width {
            break;
        }
        font_px -= 1.0;
    }
    font_px
}

/// Measure `text` unit by unit and center it on a canvas `canvas_width` wide.
pub fn build_layout<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    mode: RevealMode,
    font: &FontSpec,
    canvas_width: f32,
) -> TextLayout {
    let width = surface.measure_text(text, font);
    let x = (canvas_width - width) * 0.5;

    let mut cursor = x;
    let units = split_units(text, mode)
        .into_iter()
        .map(|part| {
            let unit_width = surface.measure_text(part, font);
            let unit = Unit {
                text: part.to_string(),
                start_x: cursor,
                width: unit_width,
                is_whitespace: part.chars().all(char::is_whitespace),
            };
            cursor += unit_width;
            unit
        })
        .collect();

    TextLayout { x, width, units }
}
