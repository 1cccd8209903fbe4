//! Scheduler port: the event loop's timers and task queue.

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Timer and task facilities of a single-threaded event loop.
pub trait Scheduler {
    /// Handle of a repeating timer. Dropping it cancels the timer.
    type Interval;

    /// Call `tick` every `period` until the returned handle is dropped.
    ///
    /// The first call happens one `period` from now.
    fn every(&self, period: Duration, tick: impl FnMut() + 'static) -> Self::Interval;

    /// Run `task` on the event loop without waiting for it.
    fn spawn(&self, task: impl Future<Output = ()> + 'static);

    /// Resolve after `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Scheduler> Scheduler for Rc<T> {
    type Interval = T::Interval;

    fn every(&self, period: Duration, tick: impl FnMut() + 'static) -> Self::Interval {
        (**self).every(period, tick)
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        (**self).spawn(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}
