//! In-memory element and scheduler for tests

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Element, Rect, Scheduler};

#[derive(Debug, Default)]
struct FakeState {
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    rect: Rect,
    text_history: Vec<String>,
}

/// Element double; clones share state like two references to one DOM node
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<FakeState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let element = Self::new();
        element.state.borrow_mut().text = text.to_string();
        element
    }

    pub fn with_rect(rect: Rect) -> Self {
        let element = Self::new();
        element.set_rect(rect);
        element
    }

    pub fn set_rect(&self, rect: Rect) {
        self.state.borrow_mut().rect = rect;
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    /// Every value passed to `set_text`, in order
    pub fn text_history(&self) -> Vec<String> {
        self.state.borrow().text_history.clone()
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.text = text.to_string();
        state.text_history.push(text.to_string());
    }

    fn bounding_rect(&self) -> Rect {
        self.state.borrow().rect
    }
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_seq: u64,
    frames: Vec<Task>,
    frames_refused: bool,
    timers: Vec<(u64, u64, Task)>,
}

/// Scheduler driven by hand: frames run on `run_frame`, timers on `advance`
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    pub fn pending_frames(&self) -> usize {
        self.queue.borrow().frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    /// Make later `request_frame` calls fail, as a browser without rAF would
    pub fn refuse_frames(&self, refused: bool) {
        self.queue.borrow_mut().frames_refused = refused;
    }

    /// Run every frame callback queued so far; returns how many ran
    pub fn run_frame(&self) -> usize {
        let tasks = std::mem::take(&mut self.queue.borrow_mut().frames);
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }

    /// Run up to `max` frames, stopping early once nothing is queued
    pub fn run_frames(&self, max: usize) -> usize {
        let mut ran = 0;
        while ran < max && self.run_frame() > 0 {
            ran += 1;
        }
        ran
    }

    /// Move the clock forward, firing due timers in deadline order
    pub fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now_ms + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _, _))| *at <= target)
                    .min_by_key(|(_, (at, seq, _))| (*at, *seq))
                    .map(|(index, _)| index);
                due.map(|index| {
                    let (at, _, task) = queue.timers.remove(index);
                    queue.now_ms = at;
                    task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self, task: Box<dyn FnOnce()>) -> bool {
        let mut queue = self.queue.borrow_mut();
        if queue.frames_refused {
            return false;
        }
        queue.frames.push(task);
        true
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut queue = self.queue.borrow_mut();
        let at = queue.now_ms + u64::from(delay_ms);
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.timers.push((at, seq, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fake_element_classes() {
        let el = FakeElement::new();
        el.add_class("a");
        el.add_class("a");
        assert_eq!(el.classes(), vec!["a".to_string()]);
        el.set_class("a", false);
        assert!(!el.has_class("a"));
    }

    #[test]
    fn test_fake_element_empty_style_clears() {
        let el = FakeElement::new();
        el.set_style("transform", "scaleX(1)");
        assert_eq!(el.style("transform").as_deref(), Some("scaleX(1)"));
        el.set_style("transform", "");
        assert_eq!(el.style("transform"), None);
    }

    #[test]
    fn test_manual_scheduler_timer_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = log.clone();
        scheduler.set_timeout(20, Box::new(move || l.borrow_mut().push("late")));
        let l = log.clone();
        scheduler.set_timeout(10, Box::new(move || l.borrow_mut().push("early")));

        scheduler.advance(15);
        assert_eq!(*log.borrow(), vec!["early"]);
        scheduler.advance(5);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.now_ms(), 20);
    }

    #[test]
    fn test_manual_scheduler_nested_timer() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));

        let inner = scheduler.clone();
        let f = fired.clone();
        scheduler.set_timeout(
            10,
            Box::new(move || {
                let f2 = f.clone();
                inner.set_timeout(10, Box::new(move || f2.set(f2.get() + 1)));
                f.set(f.get() + 1);
            }),
        );

        scheduler.advance(20);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_frames_queued_during_frame_wait() {
        let scheduler = ManualScheduler::new();
        let inner = scheduler.clone();
        scheduler.request_frame(Box::new(move || {
            inner.request_frame(Box::new(|| {}));
        }));

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(scheduler.pending_frames(), 1);
        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn test_refused_frames_are_dropped() {
        let scheduler = ManualScheduler::new();
        scheduler.refuse_frames(true);
        assert!(!scheduler.request_frame(Box::new(|| {})));
        assert_eq!(scheduler.pending_frames(), 0);

        scheduler.refuse_frames(false);
        assert!(scheduler.request_frame(Box::new(|| {})));
        assert_eq!(scheduler.pending_frames(), 1);
    }
}
