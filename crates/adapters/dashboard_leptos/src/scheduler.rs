//! Browser event-loop scheduler: `setInterval`, `setTimeout` and local tasks.

use std::future::Future;
use std::time::Duration;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use homepanel_app::ports::Scheduler;

/// Longest delay the browser timers accept.
const MAX_TIMER_MS: u32 = i32::MAX as u32;

/// [`Scheduler`] backed by the browser's timers.
///
/// Dropping an [`Interval`] clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

fn timer_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).map_or(MAX_TIMER_MS, |ms| ms.min(MAX_TIMER_MS))
}

impl Scheduler for BrowserScheduler {
    type Interval = Interval;

    fn every(&self, period: Duration, tick: impl FnMut() + 'static) -> Interval {
        Interval::new(timer_millis(period), tick)
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        TimeoutFuture::new(timer_millis(duration))
    }
}
