//! Deferred callbacks. Everything runs on the page's single event loop, so
//! shared state lives in `Rc<RefCell<_>>` and tasks need not be `Send`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::ops::ControlFlow;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

pub type OnceTask = Box<dyn FnOnce()>;
pub type RepeatingTask = Box<dyn FnMut() -> ControlFlow<()>>;

pub trait Scheduler {
    /// Runs `task` once after `delay_ms`.
    fn after(&self, delay_ms: u32, task: OnceTask) -> TaskId;

    /// Runs `task` every `period_ms` until it returns `ControlFlow::Break`.
    fn every(&self, period_ms: u32, task: RepeatingTask) -> TaskId;

    /// Cancels a pending task. Unknown or finished ids are ignored.
    fn cancel(&self, id: TaskId);
}

pub type SharedScheduler = Rc<dyn Scheduler>;

enum Job {
    Once(OnceTask),
    Repeating { period_ms: u32, task: RepeatingTask },
}

#[derive(Default)]
struct VirtualClock {
    now: u64,
    next_id: u64,
    next_seq: u64,
    // (due, seq) keeps same-instant tasks in scheduling order
    queue: BTreeMap<(u64, u64), (TaskId, Job)>,
    // repeating task currently out of the queue running its tick
    running: Option<TaskId>,
    cancelled: HashSet<TaskId>,
}

impl VirtualClock {
    fn push(&mut self, id: TaskId, due: u64, job: Job) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((due, seq), (id, job));
    }

    fn fresh_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    fn is_pending(&self, id: TaskId) -> bool {
        self.running == Some(id) || self.queue.values().any(|(queued, _)| *queued == id)
    }
}

/// Deterministic scheduler whose clock only moves when told to.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        let clock = self.clock.borrow();
        clock
            .queue
            .values()
            .filter(|(id, _)| !clock.cancelled.contains(id))
            .count()
    }

    /// Moves the clock forward, running every task that falls due on the way,
    /// including tasks scheduled by those tasks.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                match clock.queue.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        let entry = clock.queue.remove(&key);
                        clock.now = key.0;
                        entry.map(|(id, job)| (key.0, id, job))
                    }
                    _ => None,
                }
            };
            let Some((due, id, job)) = next else { break };
            if self.clock.borrow_mut().cancelled.remove(&id) {
                continue;
            }
            // the borrow is released before the task runs so it can schedule more
            match job {
                Job::Once(task) => task(),
                Job::Repeating { period_ms, mut task } => {
                    self.clock.borrow_mut().running = Some(id);
                    let flow = task();
                    let mut clock = self.clock.borrow_mut();
                    clock.running = None;
                    let cancelled = clock.cancelled.remove(&id);
                    if flow.is_continue() && !cancelled {
                        let next_due = due + u64::from(period_ms.max(1));
                        clock.push(id, next_due, Job::Repeating { period_ms, task });
                    }
                }
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for VirtualScheduler {
    fn after(&self, delay_ms: u32, task: OnceTask) -> TaskId {
        let mut clock = self.clock.borrow_mut();
        let id = clock.fresh_id();
        let due = clock.now + u64::from(delay_ms);
        clock.push(id, due, Job::Once(task));
        id
    }

    fn every(&self, period_ms: u32, task: RepeatingTask) -> TaskId {
        let mut clock = self.clock.borrow_mut();
        let id = clock.fresh_id();
        let due = clock.now + u64::from(period_ms.max(1));
        clock.push(id, due, Job::Repeating { period_ms, task });
        id
    }

    fn cancel(&self, id: TaskId) {
        let mut clock = self.clock.borrow_mut();
        if clock.is_pending(id) {
            clock.cancelled.insert(id);
        }
    }
}
