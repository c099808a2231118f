//! Drifting dot field behind the "why" section
//!
//! Dots move in straight lines and bounce elastically off the canvas edges.
//! The set is regenerated whenever the canvas is resized.

use crate::config::DotsConfig;
use crate::math::{Lcg, Vec2};

/// A single drifting dot
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub opacity: f64,
}

/// Number of dots for a canvas of the given size
pub fn dot_count(width: f64, height: f64, density_divisor: f64) -> usize {
    if width <= 0.0 || height <= 0.0 || density_divisor <= 0.0 {
        return 0;
    }
    (width * height / density_divisor).floor() as usize
}

/// Particle system for the decorative canvas
pub struct DotField {
    dots: Vec<Dot>,
    width: f64,
    height: f64,
    config: DotsConfig,
    rng: Lcg,
}

impl DotField {
    pub fn new(config: &DotsConfig, rng: Lcg) -> Self {
        Self {
            dots: Vec::new(),
            width: 0.0,
            height: 0.0,
            config: config.clone(),
            rng,
        }
    }

    /// Resize the field and regenerate every dot
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let count = dot_count(self.width, self.height, self.config.density_divisor);
        let config = &self.config;
        let rng = &mut self.rng;
        self.dots = (0..count)
            .map(|_| Dot {
                position: Vec2::new(rng.range(0.0, self.width), rng.range(0.0, self.height)),
                velocity: Vec2::new(
                    rng.range(config.velocity.min, config.velocity.max),
                    rng.range(config.velocity.min, config.velocity.max),
                ),
                radius: rng.range(config.radius.min, config.radius.max),
                opacity: rng.range(config.opacity.min, config.opacity.max),
            })
            .collect();
    }

    /// Advance every dot by one frame
    pub fn step(&mut self) {
        for dot in &mut self.dots {
            let (x, dx) = reflect(dot.position.x + dot.velocity.x, dot.velocity.x, self.width);
            let (y, dy) = reflect(dot.position.y + dot.velocity.y, dot.velocity.y, self.height);
            dot.position = Vec2::new(x, y);
            dot.velocity = Vec2::new(dx, dy);
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.dots.len()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Canvas fill style for a dot
    pub fn fill_style(&self, dot: &Dot) -> String {
        let [r, g, b] = self.config.color;
        format!("rgba({},{},{},{})", r, g, b, dot.opacity)
    }
}

/// Bounce a coordinate back into `[0, limit]`, flipping velocity on contact
fn reflect(pos: f64, velocity: f64, limit: f64) -> (f64, f64) {
    if pos < 0.0 {
        ((-pos).min(limit), -velocity)
    } else if pos > limit {
        ((2.0 * limit - pos).max(0.0), -velocity)
    } else {
        (pos, velocity)
    }
}
