//! Self-rescheduling callback chains with a shared stop handle

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{Scheduler, TaskHandle};

type FrameStep = Rc<RefCell<dyn FnMut() -> bool>>;
type TimerStep = Rc<RefCell<dyn FnMut() -> Option<u32>>>;

/// Call `step` once per animation frame while it returns `true`.
///
/// Cancelling `handle` stops the chain before its next step.
pub fn frame_loop<S, F>(scheduler: &S, handle: &TaskHandle, step: F)
where
    S: Scheduler,
    F: FnMut() -> bool + 'static,
{
    let step: FrameStep = Rc::new(RefCell::new(step));
    schedule_frame(scheduler.clone(), handle.clone(), step);
}

fn schedule_frame<S: Scheduler>(scheduler: S, handle: TaskHandle, step: FrameStep) {
    let next = scheduler.clone();
    // A refused frame ends the chain; the scheduler reports the failure.
    let _ = scheduler.request_frame(Box::new(move || {
        if handle.is_cancelled() {
            return;
        }
        let keep_going = (&mut *step.borrow_mut())();
        if keep_going && !handle.is_cancelled() {
            schedule_frame(next, handle, step);
        }
    }));
}

/// Call `step` after `first_delay_ms`, then again after each delay it returns,
/// until it returns `None`.
pub fn timer_chain<S, F>(scheduler: &S, handle: &TaskHandle, first_delay_ms: u32, step: F)
where
    S: Scheduler,
    F: FnMut() -> Option<u32> + 'static,
{
    let step: TimerStep = Rc::new(RefCell::new(step));
    schedule_timer(scheduler.clone(), handle.clone(), first_delay_ms, step);
}

fn schedule_timer<S: Scheduler>(scheduler: S, handle: TaskHandle, delay_ms: u32, step: TimerStep) {
    let next = scheduler.clone();
    scheduler.set_timeout(
        delay_ms,
        Box::new(move || {
            if handle.is_cancelled() {
                return;
            }
            let next_delay = (&mut *step.borrow_mut())();
            if let Some(delay) = next_delay {
                if !handle.is_cancelled() {
                    schedule_timer(next, handle, delay, step);
                }
            }
        }),
    );
}
