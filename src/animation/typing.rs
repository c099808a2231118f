//! Typewriter reveal for the hero headline

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::scheduled::timer_chain;
use crate::config::TypingConfig;
use crate::host::{Element, Scheduler, TaskHandle};

const CURSOR_PROPERTY: &str = "border-right";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Pending,
    Typing,
    /// All text restored; cursor removal may still be scheduled
    Done,
}

/// Result of one timer tick
#[derive(Debug, Clone, PartialEq)]
pub enum TypingStep {
    /// Text typed so far, including the new character
    Typed(String),
    Finished,
}

/// Character-by-character state machine over the captured text
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    chars: Vec<char>,
    typed: usize,
    phase: TypingPhase,
}

impl TypingAnimation {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
            phase: TypingPhase::Pending,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn tick(&mut self) -> TypingStep {
        if self.phase == TypingPhase::Done {
            return TypingStep::Finished;
        }
        self.phase = TypingPhase::Typing;
        if self.typed < self.chars.len() {
            self.typed += 1;
            TypingStep::Typed(self.chars[..self.typed].iter().collect())
        } else {
            self.phase = TypingPhase::Done;
            TypingStep::Finished
        }
    }
}

/// Headline element bound to its typing animation
pub struct TypingEffect<E: Element> {
    element: E,
    animation: TypingAnimation,
}

impl<E: Element> TypingEffect<E> {
    /// Capture the text, clear it and show the cursor
    pub fn begin(element: E, config: &TypingConfig) -> Self {
        let animation = TypingAnimation::new(&element.text());
        element.set_text("");
        element.set_style(CURSOR_PROPERTY, &config.cursor_style);
        Self { element, animation }
    }

    #[cfg(test)]
    pub fn phase(&self) -> TypingPhase {
        self.animation.phase()
    }

    /// Type one character; returns `false` once the text is complete
    pub fn tick(&mut self) -> bool {
        match self.animation.tick() {
            TypingStep::Typed(text) => {
                self.element.set_text(&text);
                true
            }
            TypingStep::Finished => false,
        }
    }

    pub fn remove_cursor(&self) {
        self.element.set_style(CURSOR_PROPERTY, "none");
    }
}

/// Drive `effect` with the configured delays.
///
/// Nothing happens for `start_delay_ms`, then one character lands every
/// `interval_ms`. One interval after the last character the cursor removal is
/// queued `cursor_removal_delay_ms` out.
pub fn run_typing<E, S>(
    effect: Rc<RefCell<TypingEffect<E>>>,
    config: &TypingConfig,
    scheduler: &S,
    handle: &TaskHandle,
) where
    E: Element + 'static,
    S: Scheduler,
{
    let interval = config.interval_ms;
    let removal_delay = config.cursor_removal_delay_ms;
    let mut cursor_pending = true;

    timer_chain(scheduler, handle, config.start_delay_ms, move || {
        if effect.borrow_mut().tick() {
            return Some(interval);
        }
        if cursor_pending {
            cursor_pending = false;
            return Some(removal_delay);
        }
        effect.borrow().remove_cursor();
        None
    });
}
