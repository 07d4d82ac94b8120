use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen_futures::spawn_local;

use crate::scheduler::{OnceTask, RepeatingTask, Scheduler, TaskId};

#[derive(Default)]
struct Timers {
    next_id: u64,
    timeouts: HashMap<TaskId, Timeout>,
    intervals: HashMap<TaskId, Interval>,
}

/// `Scheduler` backed by the browser's `setTimeout`/`setInterval`.
#[derive(Clone, Default)]
pub struct TimerScheduler {
    timers: Rc<RefCell<Timers>>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&self) -> TaskId {
        let mut timers = self.timers.borrow_mut();
        timers.next_id += 1;
        TaskId(timers.next_id)
    }
}

/// Drops a timer handle once the current callback has returned, so a timer
/// never frees its own closure mid-call.
fn release(timers: Weak<RefCell<Timers>>, id: TaskId) {
    spawn_local(async move {
        if let Some(timers) = timers.upgrade() {
            let mut timers = timers.borrow_mut();
            timers.timeouts.remove(&id);
            timers.intervals.remove(&id);
        }
    });
}

impl Scheduler for TimerScheduler {
    fn after(&self, delay_ms: u32, task: OnceTask) -> TaskId {
        let id = self.fresh_id();
        let timers = Rc::downgrade(&self.timers);
        let timeout = Timeout::new(delay_ms, move || {
            task();
            release(timers, id);
        });
        self.timers.borrow_mut().timeouts.insert(id, timeout);
        id
    }

    fn every(&self, period_ms: u32, mut task: RepeatingTask) -> TaskId {
        let id = self.fresh_id();
        let timers = Rc::downgrade(&self.timers);
        let done = Cell::new(false);
        let interval = Interval::new(period_ms, move || {
            if done.get() {
                return;
            }
            if task().is_break() {
                done.set(true);
                release(timers.clone(), id);
            }
        });
        self.timers.borrow_mut().intervals.insert(id, interval);
        id
    }

    fn cancel(&self, id: TaskId) {
        release(Rc::downgrade(&self.timers), id);
    }
}
