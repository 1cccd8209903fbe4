//! In-memory port implementations shared by the coordinator tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::oneshot;

use homepanel_domain::alarm::{AlarmIndicator, AlarmStatus};
use homepanel_domain::readout::TemperatureReadout;
use homepanel_domain::room::RoomReading;
use homepanel_domain::settings::{Settings, SettingsSubmission};

use crate::config::PanelConfig;
use crate::poller::Poller;
use crate::ports::{
    ApiError, Control, ControlState, FieldKind, MessageSlot, PanelApi, PanelView, Scheduler,
    SettingsForm, StatusMessage,
};

/// Backend with one canned response per endpoint.
///
/// Responses are taken when the request is made. A request can be held
/// until the test releases it with [`hold`](Self::hold).
pub struct FakeApi {
    pub temperatures: RefCell<Result<TemperatureReadout, ApiError>>,
    pub alarm: RefCell<Result<AlarmStatus, ApiError>>,
    pub reset: RefCell<Result<String, ApiError>>,
    pub settings: RefCell<Result<Settings, ApiError>>,
    pub save: RefCell<Result<String, ApiError>>,
    pub submissions: RefCell<Vec<SettingsSubmission>>,
    calls: RefCell<Vec<&'static str>>,
    settings_probe: RefCell<Option<Box<dyn Fn()>>>,
    held: RefCell<Vec<(&'static str, oneshot::Receiver<()>)>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            temperatures: RefCell::new(Ok(TemperatureReadout::default())),
            alarm: RefCell::new(Ok(AlarmStatus::default())),
            reset: RefCell::new(Ok("Alarma resetata".to_string())),
            settings: RefCell::new(Ok(Settings::default())),
            save: RefCell::new(Ok("Setari salvate".to_string())),
            submissions: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            settings_probe: RefCell::new(None),
            held: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    /// Number of calls made to `endpoint`.
    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == endpoint).count()
    }

    /// Run `probe` whenever settings are fetched.
    pub fn on_settings_fetch(&self, probe: impl Fn() + 'static) {
        *self.settings_probe.borrow_mut() = Some(Box::new(probe));
    }

    /// Hold the next request to `endpoint` until the returned sender fires.
    pub fn hold(&self, endpoint: &'static str) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.held.borrow_mut().push((endpoint, gate));
        release
    }

    /// Record a call and take the gate held for it, if any.
    fn enter(&self, endpoint: &'static str) -> Option<oneshot::Receiver<()>> {
        self.calls.borrow_mut().push(endpoint);
        let mut held = self.held.borrow_mut();
        let position = held.iter().position(|(e, _)| *e == endpoint)?;
        Some(held.remove(position).1)
    }
}

async fn respond<T>(gate: Option<oneshot::Receiver<()>>, result: T) -> T {
    if let Some(gate) = gate {
        let _ = gate.await;
    }
    result
}

impl PanelApi for FakeApi {
    fn fetch_temperatures(&self) -> impl Future<Output = Result<TemperatureReadout, ApiError>> {
        let gate = self.enter("temperatures");
        let result = self.temperatures.borrow().clone();
        respond(gate, result)
    }

    fn fetch_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, ApiError>> {
        let gate = self.enter("alarm");
        let result = self.alarm.borrow().clone();
        respond(gate, result)
    }

    fn reset_alarm(&self) -> impl Future<Output = Result<String, ApiError>> {
        let gate = self.enter("reset");
        let result = self.reset.borrow().clone();
        respond(gate, result)
    }

    fn fetch_settings(&self) -> impl Future<Output = Result<Settings, ApiError>> {
        let gate = self.enter("settings");
        if let Some(probe) = self.settings_probe.borrow().as_ref() {
            probe();
        }
        let result = self.settings.borrow().clone();
        respond(gate, result)
    }

    fn save_settings(
        &self,
        submission: &SettingsSubmission,
    ) -> impl Future<Output = Result<String, ApiError>> {
        let gate = self.enter("save");
        self.submissions.borrow_mut().push(submission.clone());
        let result = self.save.borrow().clone();
        respond(gate, result)
    }
}

/// Everything a [`RecordingView`] was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Room(usize, RoomReading),
    Alarm(AlarmIndicator),
    Message(MessageSlot, StatusMessage),
    Cleared(MessageSlot),
    Control(Control, ControlState),
}

/// View that records every call in order.
#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn room_renders(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ViewEvent::Room(..)))
            .count()
    }

    pub fn last_room(&self, index: usize) -> Option<RoomReading> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Room(i, reading) if *i == index => Some(*reading),
            _ => None,
        })
    }

    pub fn last_alarm(&self) -> Option<AlarmIndicator> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Alarm(indicator) => Some(*indicator),
            _ => None,
        })
    }

    /// Message currently displayed in `slot`.
    pub fn message(&self, slot: MessageSlot) -> Option<StatusMessage> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Message(s, message) if *s == slot => Some(Some(message.clone())),
            ViewEvent::Cleared(s) if *s == slot => Some(None),
            _ => None,
        })?
    }

    pub fn control(&self, control: Control) -> ControlState {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Control(c, state) if *c == control => Some(*state),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PanelView for RecordingView {
    fn render_room(&self, index: usize, reading: RoomReading) {
        self.push(ViewEvent::Room(index, reading));
    }

    fn render_alarm(&self, indicator: AlarmIndicator) {
        self.push(ViewEvent::Alarm(indicator));
    }

    fn show_message(&self, slot: MessageSlot, message: StatusMessage) {
        self.push(ViewEvent::Message(slot, message));
    }

    fn clear_message(&self, slot: MessageSlot) {
        self.push(ViewEvent::Cleared(slot));
    }

    fn set_control(&self, control: Control, state: ControlState) {
        self.push(ViewEvent::Control(control, state));
    }
}

/// Settings form backed by a map of field name → (kind, value).
#[derive(Default)]
pub struct MemoryForm {
    fields: RefCell<BTreeMap<String, (FieldKind, String)>>,
}

impl MemoryForm {
    pub fn add(&self, name: &str, kind: FieldKind, value: &str) {
        self.fields
            .borrow_mut()
            .insert(name.to_string(), (kind, value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.fields.borrow().get(name).map(|(_, v)| v.clone())
    }
}

impl SettingsForm for MemoryForm {
    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.fields.borrow().get(name).map(|(kind, _)| *kind)
    }

    fn value(&self, name: &str) -> Option<String> {
        self.get(name)
    }

    fn set_value(&self, name: &str, value: &str) {
        if let Some((_, current)) = self.fields.borrow_mut().get_mut(name) {
            *current = value.to_string();
        }
    }
}

type Task = Pin<Box<dyn Future<Output = ()>>>;

struct TimerEntry {
    period: Duration,
    live: Rc<Cell<bool>>,
    tick: Rc<RefCell<Box<dyn FnMut()>>>,
}

/// Scheduler driven by hand: timers fire on [`fire`](Self::fire), spawned
/// tasks run on [`run_until_idle`](Self::run_until_idle), sleeps resolve at once.
#[derive(Default)]
pub struct ManualScheduler {
    timers: RefCell<Vec<TimerEntry>>,
    tasks: RefCell<VecDeque<Task>>,
    sleeps: RefCell<Vec<Duration>>,
}

/// Handle returned by [`ManualScheduler::every`]; marks the timer dead on drop.
pub struct ManualInterval {
    live: Rc<Cell<bool>>,
}

impl Drop for ManualInterval {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

impl ManualScheduler {
    /// Await spawned tasks, including tasks they spawn, until none remain.
    pub async fn run_until_idle(&self) {
        loop {
            let next = self.tasks.borrow_mut().pop_front();
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }

    /// Tick every live timer armed with `period`.
    pub fn fire(&self, period: Duration) {
        let ticks: Vec<_> = self
            .timers
            .borrow()
            .iter()
            .filter(|t| t.live.get() && t.period == period)
            .map(|t| Rc::clone(&t.tick))
            .collect();
        for tick in ticks {
            let mut tick = tick.borrow_mut();
            (*tick)();
        }
    }

    /// Periods of the timers still live, in arming order.
    pub fn live_periods(&self) -> Vec<Duration> {
        self.timers
            .borrow()
            .iter()
            .filter(|t| t.live.get())
            .map(|t| t.period)
            .collect()
    }

    pub fn timers_created(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Scheduler for ManualScheduler {
    type Interval = ManualInterval;

    fn every(&self, period: Duration, tick: impl FnMut() + 'static) -> Self::Interval {
        let live = Rc::new(Cell::new(true));
        self.timers.borrow_mut().push(TimerEntry {
            period,
            live: Rc::clone(&live),
            tick: Rc::new(RefCell::new(Box::new(tick))),
        });
        ManualInterval { live }
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        self.tasks.borrow_mut().push_back(Box::pin(task));
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(duration);
        std::future::ready(())
    }
}

pub type TestPoller =
    Poller<Rc<FakeApi>, Rc<RecordingView>, Rc<MemoryForm>, Rc<ManualScheduler>>;

/// A coordinator wired to fakes, with handles on each fake.
pub struct Harness {
    pub api: Rc<FakeApi>,
    pub view: Rc<RecordingView>,
    pub form: Rc<MemoryForm>,
    pub scheduler: Rc<ManualScheduler>,
    pub poller: Rc<TestPoller>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_form(|_| {})
    }

    /// Build a harness after letting `setup` add fields to the form.
    pub fn with_form(setup: impl FnOnce(&MemoryForm)) -> Self {
        let api = Rc::new(FakeApi::default());
        let view = Rc::new(RecordingView::default());
        let form = Rc::new(MemoryForm::default());
        setup(&form);
        let scheduler = Rc::new(ManualScheduler::default());
        let poller = Rc::new(Poller::new(
            Rc::clone(&api),
            Rc::clone(&view),
            Rc::clone(&form),
            Rc::clone(&scheduler),
            PanelConfig::default(),
        ));
        Self {
            api,
            view,
            form,
            scheduler,
            poller,
        }
    }
}
