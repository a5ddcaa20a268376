use std::f64::consts::TAU;

use glam::Vec2;
use reveal_engine::{FontSpec, Hsla, LinearGradient, RevealError, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use crate::dom;

/// [`Surface`] over a 2D canvas context.
///
/// The canvas backing store is sized in device pixels and the context carries
/// a `dpr` scale transform, so every coordinate the engine hands in is in CSS
/// pixels of the stage element.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    stage: HtmlElement,
    size: Vec2,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, stage: HtmlElement) -> Result<Self, RevealError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(dom::host_error)?
            .ok_or(RevealError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RevealError::MissingContext)?;

        Ok(Self {
            canvas,
            ctx,
            stage,
            size: Vec2::ONE,
            dpr: 1.0,
        })
    }

    /// Match the canvas to the stage's current box and the window's pixel
    /// ratio. Both dimensions are at least one pixel.
    pub fn fit_to_stage(&mut self, window: &Window) {
        let rect = self.stage.get_bounding_client_rect();
        let width = rect.width().max(1.0);
        let height = rect.height().max(1.0);
        self.dpr = window.device_pixel_ratio().max(1.0);
        self.size = Vec2::new(width as f32, height as f32);

        self.canvas.set_width((width * self.dpr).floor() as u32);
        self.canvas.set_height((height * self.dpr).floor() as u32);
        dom::set_style(&self.canvas, "width", &format!("{}px", width));
        dom::set_style(&self.canvas, "height", &format!("{}px", height));

        if let Err(err) = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0) {
            log::warn!("canvas transform: {:?}", err);
        }
        log::debug!("canvas: {}x{} @{}x", width, height, self.dpr);
    }

    fn gradient(&self, paint: &LinearGradient) -> CanvasGradient {
        let g = self.ctx.create_linear_gradient(
            paint.from.x as f64,
            paint.from.y as f64,
            paint.to.x as f64,
            paint.to.y as f64,
        );
        for stop in &paint.stops {
            if let Err(err) = g.add_color_stop(stop.offset, &stop.color.css()) {
                log::warn!("gradient stop {}: {:?}", stop.offset, err);
            }
        }
        g
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> f32 {
        self.ctx.set_font(&font.css());
        self.ctx
            .measure_text(text)
            .map_or(0.0, |metrics| metrics.width() as f32)
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &LinearGradient) {
        let g = self.gradient(paint);
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn begin_text(&mut self, font: &FontSpec, paint: &LinearGradient) {
        self.ctx.save();
        self.ctx.set_font(&font.css());
        self.ctx.set_text_baseline("middle");
        let g = self.gradient(paint);
        self.ctx.set_fill_style_canvas_gradient(&g);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        if let Err(err) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fillText: {:?}", err);
        }
    }

    fn end_text(&mut self) {
        // Drops the font, baseline, ink and alpha set since begin_text.
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
