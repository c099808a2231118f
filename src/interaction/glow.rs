use crate::host::{Element, Rect};

/// Soft gradient layer that follows the pointer inside a region
pub struct CursorGlow<E: Element> {
    layer: E,
}

impl<E: Element> CursorGlow<E> {
    /// `layer` is the glow element already appended to the region
    pub fn new(layer: E) -> Self {
        Self { layer }
    }

    /// Move the layer to the pointer; returns its new offset, or `None` when
    /// the pointer lies outside `region`.
    pub fn on_pointer_move(&self, region: &Rect, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !region.contains(client_x, client_y) {
            return None;
        }
        let x = client_x - region.left;
        let y = client_y - region.top;
        self.layer.set_style("left", &format!("{}px", x));
        self.layer.set_style("top", &format!("{}px", y));
        Some((x, y))
    }
}
