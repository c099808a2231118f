use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::EffectsError;
use crate::particles::DotField;

/// Wrapper around a 2D canvas context with the few calls the dot field needs
pub struct CanvasContext {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

impl CanvasContext {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EffectsError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(EffectsError::dom)?
            .ok_or_else(|| EffectsError::Dom("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EffectsError::Dom("context is not a CanvasRenderingContext2d".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the drawing buffer to the given CSS pixel size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn clear(&self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    pub fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(style);
        self.ctx.fill();
    }

    /// Clear the canvas and paint every dot at its own opacity
    pub fn draw_dots(&self, field: &DotField) {
        let (width, height) = field.size();
        self.clear(width, height);
        for dot in field.dots() {
            self.fill_circle(dot.position.x, dot.position.y, dot.radius, &field.fill_style(dot));
        }
    }
}
