//! Capabilities the behaviors need from the page.
//!
//! Behaviors never touch `web_sys` directly. They write classes, styles and
//! text through [`Element`], receive visibility and pointer input as plain
//! values, and defer work through a [`Scheduler`]. The browser implements
//! these in [`dom`]; tests use the in-memory versions in `fake`.

use std::cell::Cell;
use std::rc::Rc;

pub mod dom;
#[cfg(test)]
pub mod fake;

/// Bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

const RATIO_TOLERANCE: f64 = 1e-3;

/// One intersection report for an observed element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    /// Visible fraction of the element, 0.0 to 1.0
    pub ratio: f64,
}

impl Visibility {
    pub const fn new(intersecting: bool, ratio: f64) -> Self {
        Self { intersecting, ratio }
    }

    /// Whether at least `threshold` of the element is on screen
    pub fn reaches(&self, threshold: f64) -> bool {
        // Observers may report a crossing ratio a hair under the threshold.
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// Write access to a single page element
pub trait Element {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Set an inline style property; an empty value clears it
    fn set_style(&self, property: &str, value: &str);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn bounding_rect(&self) -> Rect;

    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Deferred execution on the page's event loop
pub trait Scheduler: Clone + 'static {
    /// Run `task` before the next repaint; `false` if it could not be queued
    fn request_frame(&self, task: Box<dyn FnOnce()>) -> bool;
    /// Run `task` after `delay_ms` milliseconds
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Shared cancellation flag for a chain of scheduled callbacks.
///
/// Clones observe the same flag, so one handle can stop several loops.
#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
