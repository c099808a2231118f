//! Count-up animation for stat numbers
//!
//! The counter advances one unit per rendered frame, so its speed follows the
//! display's frame rate rather than wall-clock time.

use crate::config::CounterConfig;
use crate::host::{Element, Visibility};

/// Parse the leading integer of `text` the way a browser's `parseInt(_, 10)` does.
///
/// Leading whitespace and a `+` sign are accepted and trailing non-digits are
/// ignored. Negative numbers and text without leading digits yield `None`;
/// digit runs past `u32::MAX` saturate.
pub fn parse_target(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Render `value` zero-padded to at least `width` digits
pub fn pad(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Frame-stepped counter from 0 up to a fixed target
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    next: Option<u32>,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            next: Some(0),
        }
    }

    /// Value to render on this frame, or `None` once the target was shown
    pub fn next_frame(&mut self) -> Option<u32> {
        let value = self.next?;
        self.next = if value < self.target { Some(value + 1) } else { None };
        Some(value)
    }

    pub fn is_complete(&self) -> bool {
        self.next.is_none()
    }
}

/// What the observer should do after a visibility report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTrigger {
    /// Not visible enough yet; keep observing
    Wait,
    /// Animation started; stop observing and drive frames
    Start,
    /// Already started or not numeric; nothing to do
    Ignore,
}

#[derive(Debug, Clone, PartialEq)]
enum CounterState {
    Waiting(u32),
    Running(CounterAnimation),
    Done,
    NotNumeric,
}

/// A `.stat-num` element and its one-shot count-up
pub struct StatCounter<E: Element> {
    element: E,
    threshold: f64,
    pad_width: usize,
    state: CounterState,
}

impl<E: Element> StatCounter<E> {
    /// Reads the target from the element's current text
    pub fn new(element: E, config: &CounterConfig) -> Self {
        let state = match parse_target(&element.text()) {
            Some(target) => CounterState::Waiting(target),
            None => CounterState::NotNumeric,
        };
        Self {
            element,
            threshold: config.threshold,
            pad_width: config.pad_width,
            state,
        }
    }

    /// Whether the element should be observed at all
    pub fn is_numeric(&self) -> bool {
        self.state != CounterState::NotNumeric
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        matches!(self.state, CounterState::Running(_))
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.state == CounterState::Done
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn on_visibility(&mut self, visibility: Visibility) -> CounterTrigger {
        match self.state {
            CounterState::Waiting(target) if visibility.reaches(self.threshold) => {
                self.state = CounterState::Running(CounterAnimation::new(target));
                CounterTrigger::Start
            }
            CounterState::Waiting(_) => CounterTrigger::Wait,
            _ => CounterTrigger::Ignore,
        }
    }

    /// Render one frame; returns whether another frame is needed
    pub fn on_frame(&mut self) -> bool {
        let CounterState::Running(animation) = &mut self.state else {
            return false;
        };
        match animation.next_frame() {
            Some(value) => {
                self.element.set_text(&pad(value, self.pad_width));
                if animation.is_complete() {
                    self.state = CounterState::Done;
                    false
                } else {
                    true
                }
            }
            None => {
                self.state = CounterState::Done;
                false
            }
        }
    }
}
