//! Time-driven effects: frame-stepped counters and the typewriter headline,
//! plus the self-rescheduling chains that drive them.

pub mod scheduled;
mod counter;
mod typing;

pub use scheduled::{frame_loop, timer_chain};
pub use counter::{CounterAnimation, CounterTrigger, StatCounter, pad, parse_target};
pub use typing::{TypingAnimation, TypingEffect, TypingPhase, TypingStep, run_typing};
