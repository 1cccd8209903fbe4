//! Refresh coordinator: owns the two poll timers and re-arms them.
//!
//! The temperature task runs at the period stored in the settings, the alarm
//! task at a fixed period. Re-arming drops both timer handles, loads the
//! settings, then arms fresh timers. In-flight fetches are not cancelled: a
//! fetch started before a re-arm still renders when it resolves.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::config::PanelConfig;
use crate::ports::{PanelApi, PanelView, Scheduler, SettingsForm};

/// Periods of the timers currently armed, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArmedPeriods {
    pub temperature: Option<Duration>,
    pub alarm: Option<Duration>,
}

struct ArmedTimer<H> {
    period: Duration,
    _handle: H,
}

struct Timers<H> {
    temperature: Option<ArmedTimer<H>>,
    alarm: Option<ArmedTimer<H>>,
}

impl<H> Timers<H> {
    fn cancel(&mut self) {
        self.temperature = None;
        self.alarm = None;
    }
}

impl<H> Default for Timers<H> {
    fn default() -> Self {
        Self {
            temperature: None,
            alarm: None,
        }
    }
}

/// Poller/refresh coordinator for the panel page.
///
/// Shared through `Rc`: timer callbacks hold a weak reference, so dropping
/// the last `Rc` cancels both timers.
pub struct Poller<A, V, F, S: Scheduler> {
    pub(crate) api: A,
    pub(crate) view: V,
    pub(crate) form: F,
    pub(crate) scheduler: S,
    pub(crate) config: PanelConfig,
    timers: RefCell<Timers<S::Interval>>,
    stopped: Cell<bool>,
}

impl<A, V, F, S: Scheduler> Poller<A, V, F, S> {
    /// Create an idle coordinator; nothing runs until [`start`](Self::start).
    pub fn new(api: A, view: V, form: F, scheduler: S, config: PanelConfig) -> Self {
        Self {
            api,
            view,
            form,
            scheduler,
            config,
            timers: RefCell::new(Timers::default()),
            stopped: Cell::new(false),
        }
    }

    /// Configuration the coordinator runs with.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Periods of the currently armed timers.
    pub fn armed_periods(&self) -> ArmedPeriods {
        let timers = self.timers.borrow();
        ArmedPeriods {
            temperature: timers.temperature.as_ref().map(|t| t.period),
            alarm: timers.alarm.as_ref().map(|t| t.period),
        }
    }

    /// Cancel both timers for good.
    ///
    /// Re-arms still in flight finish their settings load but arm nothing.
    pub fn shutdown(&self) {
        self.stopped.set(true);
        self.timers.borrow_mut().cancel();
        tracing::info!("panel refresh stopped");
    }
}

impl<A, V, F, S> Poller<A, V, F, S>
where
    A: PanelApi + 'static,
    V: PanelView + 'static,
    F: SettingsForm + 'static,
    S: Scheduler + 'static,
{
    /// Render both poll tasks right away, then re-arm.
    ///
    /// The first render does not wait for the first timer period.
    pub fn start(self: &Rc<Self>) {
        tracing::info!("starting panel refresh");
        self.spawn_with(|poller| async move { poller.poll_temperatures().await });
        self.spawn_with(|poller| async move { poller.poll_alarm().await });
        self.spawn_with(|poller| async move { poller.rearm().await });
    }

    /// Cancel both timers, reload settings, and arm fresh timers.
    ///
    /// The temperature period comes from the loaded settings and falls back
    /// to the configured default when the setting is missing, unusable, or
    /// the load fails.
    pub async fn rearm(self: &Rc<Self>) {
        self.timers.borrow_mut().cancel();

        let fallback = self.config.polling.default_refresh();
        let period = match self.load_settings().await {
            Some(settings) => settings.refresh_period().unwrap_or_else(|err| {
                tracing::debug!(%err, "using default refresh period");
                fallback
            }),
            None => fallback,
        };

        self.arm(period);
    }

    fn arm(self: &Rc<Self>, temperature_period: Duration) {
        let alarm_period = self.config.polling.alarm_period();
        let mut timers = self.timers.borrow_mut();
        timers.cancel();
        if self.stopped.get() {
            tracing::debug!("panel refresh stopped, not arming");
            return;
        }
        timers.temperature = Some(self.arm_task(temperature_period, |poller| async move {
            poller.poll_temperatures().await;
        }));
        timers.alarm = Some(self.arm_task(alarm_period, |poller| async move {
            poller.poll_alarm().await;
        }));
        tracing::info!(
            temperature_ms = temperature_period.as_millis(),
            alarm_ms = alarm_period.as_millis(),
            "poll timers armed"
        );
    }

    fn arm_task<Fut>(
        self: &Rc<Self>,
        period: Duration,
        task: impl Fn(Rc<Self>) -> Fut + 'static,
    ) -> ArmedTimer<S::Interval>
    where
        Fut: Future<Output = ()> + 'static,
    {
        let weak = Rc::downgrade(self);
        let handle = self.scheduler.every(period, move || {
            if let Some(poller) = weak.upgrade() {
                poller.spawn_with(&task);
            }
        });
        ArmedTimer {
            period,
            _handle: handle,
        }
    }

    /// Spawn the future built by `task` on the scheduler.
    pub(crate) fn spawn_with<Fut>(self: &Rc<Self>, task: impl FnOnce(Rc<Self>) -> Fut)
    where
        Fut: Future<Output = ()> + 'static,
    {
        self.scheduler.spawn(task(Rc::clone(self)));
    }
}
