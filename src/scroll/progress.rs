use crate::host::Element;

/// Fraction of the page scrolled, always within `[0, 1]`.
///
/// A page no taller than the viewport has nothing to scroll and reports 0.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Thin bar at the top of the page scaled to the scroll fraction
pub struct ProgressBar<E: Element> {
    bar: E,
}

impl<E: Element> ProgressBar<E> {
    pub fn new(bar: E) -> Self {
        Self { bar }
    }

    pub fn on_scroll(&self, scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
        let fraction = scroll_fraction(scroll_y, scroll_height, viewport_height);
        self.bar.set_style("transform", &format!("scaleX({})", fraction));
        fraction
    }
}
