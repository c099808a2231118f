use crate::config::TiltConfig;
use crate::host::{Element, Rect};

/// Pointer position relative to the centre of `rect`, each axis in `[-0.5, 0.5]`
pub fn pointer_offset(rect: &Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let axis = |pos: f64, start: f64, len: f64| {
        if len > 0.0 {
            ((pos - start) / len - 0.5).clamp(-0.5, 0.5)
        } else {
            0.0
        }
    };
    (
        axis(client_x, rect.left, rect.width),
        axis(client_y, rect.top, rect.height),
    )
}

/// Perspective tilt for a hovered card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub lift_px: f64,
    pub perspective_px: f64,
}

impl TiltTransform {
    /// Corners reach `max_rotation_deg` on both axes
    pub fn from_offset(offset_x: f64, offset_y: f64, config: &TiltConfig) -> Self {
        let scale = 2.0 * config.max_rotation_deg;
        Self {
            rotate_x_deg: tidy(-offset_y * scale),
            rotate_y_deg: tidy(offset_x * scale),
            lift_px: config.lift_px,
            perspective_px: config.perspective_px,
        }
    }

    #[cfg(test)]
    pub fn is_level(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg) translateY({}px)",
            self.perspective_px,
            self.rotate_y_deg,
            self.rotate_x_deg,
            tidy(-self.lift_px)
        )
    }
}

// Two decimals, and never "-0" in the generated CSS.
fn tidy(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// A card that tilts toward the pointer while hovered
pub struct TiltCard<E: Element> {
    card: E,
    config: TiltConfig,
}

impl<E: Element> TiltCard<E> {
    pub fn new(card: E, config: &TiltConfig) -> Self {
        Self {
            card,
            config: config.clone(),
        }
    }

    pub fn on_pointer_move(&self, client_x: f64, client_y: f64) -> TiltTransform {
        let (ox, oy) = pointer_offset(&self.card.bounding_rect(), client_x, client_y);
        let transform = TiltTransform::from_offset(ox, oy, &self.config);
        self.card.set_style("transform", &transform.to_css());
        transform
    }

    pub fn on_pointer_leave(&self) {
        self.card.set_style("transform", "");
    }
}
