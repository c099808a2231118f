//! Behaviors driven by the page's scroll position

mod reveal;
mod nav;
mod progress;

pub use reveal::{RevealTarget, stagger_delay, stagger_indices};
pub use nav::{NavShrink, is_scrolled, request_nav_update};
pub use progress::{ProgressBar, scroll_fraction};
