use std::cell::RefCell;
use std::rc::Rc;

use crate::config::NavConfig;
use crate::host::{Element, Scheduler};

pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Nav bar that gains a compact class once the page scrolls past a threshold.
///
/// Scroll events only request a frame; the class is recomputed inside that
/// frame, and at most one frame is pending at a time.
pub struct NavShrink<E: Element> {
    nav: E,
    class: String,
    threshold_px: f64,
    frame_pending: bool,
}

impl<E: Element> NavShrink<E> {
    pub fn new(nav: E, config: &NavConfig) -> Self {
        Self {
            nav,
            class: config.scrolled_class.clone(),
            threshold_px: config.threshold_px,
            frame_pending: false,
        }
    }

    /// Returns `true` when the caller must request an animation frame
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn on_frame(&mut self, scroll_y: f64) {
        self.nav.set_class(&self.class, is_scrolled(scroll_y, self.threshold_px));
        self.frame_pending = false;
    }

    /// The requested frame was never queued; the next scroll asks again
    pub fn frame_refused(&mut self) {
        self.frame_pending = false;
    }
}

/// Scroll handler body: request at most one frame that reads `scroll_y`
pub fn request_nav_update<E, S, F>(nav: &Rc<RefCell<NavShrink<E>>>, scheduler: &S, scroll_y: F)
where
    E: Element + 'static,
    S: Scheduler,
    F: FnOnce() -> f64 + 'static,
{
    if !nav.borrow_mut().on_scroll() {
        return;
    }
    let pending = nav.clone();
    let queued = scheduler.request_frame(Box::new(move || {
        pending.borrow_mut().on_frame(scroll_y());
    }));
    if !queued {
        nav.borrow_mut().frame_refused();
    }
}
