use std::ops::ControlFlow;

use crate::scheduler::{Scheduler, TaskId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterFrame {
    /// Floor of the running value.
    Running(f64),
    /// Exactly the target; the ramp is over.
    Finished(f64),
}

impl CounterFrame {
    pub fn value(self) -> f64 {
        match self {
            CounterFrame::Running(value) | CounterFrame::Finished(value) => value,
        }
    }

    /// Text for the element, e.g. `42` or `2.5`.
    pub fn display(self) -> String {
        format!("{}", self.value())
    }
}

/// Reads a `data-counter` value. Only finite numbers can be counted to.
pub fn parse_target(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|target| target.is_finite())
}

/// Linear ramp from 0 to `target`, one step per tick. A non-finite target
/// finishes on the first tick.
#[derive(Debug, Clone)]
pub struct CounterRamp {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterRamp {
    pub fn new(target: f64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self {
            target,
            increment: target / ticks,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Finished(self.target);
        }
        self.current += self.increment;
        if !self.target.is_finite() || self.current >= self.target {
            self.finished = true;
            CounterFrame::Finished(self.target)
        } else {
            CounterFrame::Running(self.current.floor())
        }
    }
}

/// Drives a `CounterRamp` off a repeating timer. The timer is only ever
/// stopped by the ramp finishing.
pub struct CounterAnimator;

impl CounterAnimator {
    pub fn animate(
        scheduler: &dyn Scheduler,
        target: f64,
        duration_ms: u32,
        tick_ms: u32,
        mut render: impl FnMut(&str) + 'static,
    ) -> TaskId {
        let mut ramp = CounterRamp::new(target, duration_ms, tick_ms);
        scheduler.every(
            tick_ms,
            Box::new(move || {
                let frame = ramp.tick();
                render(&frame.display());
                match frame {
                    CounterFrame::Finished(_) => ControlFlow::Break(()),
                    CounterFrame::Running(_) => ControlFlow::Continue(()),
                }
            }),
        )
    }
}
