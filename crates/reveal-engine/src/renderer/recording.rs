//! Headless surface that records draw calls.
//!
//! Text is measured with a fixed advance per character, which keeps layout
//! math predictable without a font rasterizer. Each `clear` starts a new frame,
//! so `commands` always holds what the most recent frame put on screen.

use glam::Vec2;

use super::traits::{FontSpec, Hsla, LinearGradient, Surface};

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect { origin: Vec2, size: Vec2 },
    Text { text: String, pos: Vec2, alpha: f32, font_px: f32 },
    Circle { center: Vec2, radius: f32, color: Hsla },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    /// Advance per character as a fraction of the font size.
    pub char_advance: f32,
    pub commands: Vec<DrawCommand>,
    /// Number of `clear` calls since creation.
    pub frames: u32,
    text_font: Option<FontSpec>,
}

impl RecordingSurface {
    pub const DEFAULT_CHAR_ADVANCE: f32 = 0.5;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            char_advance: Self::DEFAULT_CHAR_ADVANCE,
            commands: Vec::new(),
            frames: 0,
            text_font: None,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Text draws of the current frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2, f32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, pos, alpha, .. } => Some((text.as_str(), *pos, *alpha)),
            _ => None,
        })
    }

    /// Concatenation of every text draw with non-zero alpha.
    pub fn visible_text(&self) -> String {
        self.texts()
            .filter(|(_, _, alpha)| *alpha > 0.0)
            .map(|(text, _, _)| text)
            .collect()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size_px * self.char_advance
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, _paint: &LinearGradient) {
        self.commands.push(DrawCommand::Rect { origin, size });
    }

    fn begin_text(&mut self, font: &FontSpec, _paint: &LinearGradient) {
        self.text_font = Some(font.clone());
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, alpha: f32) {
        let font_px = self.text_font.as_ref().map_or(0.0, |f| f.size_px);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            alpha,
            font_px,
        });
    }

    fn end_text(&mut self) {
        self.text_font = None;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_by_char_count() {
        let mut s = RecordingSurface::new(800.0, 400.0);
        let w = s.measure_text("héllo", &FontSpec::title(20.0));
        assert_eq!(w, 50.0);
    }

    #[test]
    fn clear_starts_new_frame() {
        let mut s = RecordingSurface::new(800.0, 400.0);
        s.begin_text(&FontSpec::title(20.0), &LinearGradient::new(Vec2::ZERO, Vec2::ONE));
        s.fill_text("A", Vec2::ZERO, 1.0);
        s.end_text();
        assert_eq!(s.visible_text(), "A");

        s.clear();
        assert_eq!(s.commands, vec![DrawCommand::Clear]);
        assert_eq!(s.frames, 1);
    }

    #[test]
    fn zero_alpha_text_is_not_visible() {
        let mut s = RecordingSurface::new(800.0, 400.0);
        s.fill_text("A", Vec2::ZERO, 0.0);
        s.fill_text("B", Vec2::ZERO, 0.5);
        assert_eq!(s.visible_text(), "B");
    }
}
