//! Pointer and click driven behaviors

mod tilt;
mod glow;
mod menu;

pub use tilt::{TiltCard, TiltTransform, pointer_offset};
pub use glow::CursorGlow;
pub use menu::MobileMenu;
