//! Controller - owns the state and drives the timer loops

use std::sync::Arc;
use std::time::Duration;

use nclock_core::RealDuration;
use nclock_state::{
    alarm_list_view, clock_view, settings_view, stopwatch_view, AppState, CycleStamp,
};
use nclock_store::{load_presets, load_settings, save_presets, save_settings, KvStore};
use nclock_time::{dilated_cycle, dilated_time_of_day, WallClock};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::{interval, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::events::{Command, UiEvent};
use crate::planner::next_firing;

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Cadence of the clock redisplay / sampled alarm check
    pub clock_tick: Duration,
    /// Cadence of the stopwatch redisplay while running
    pub stopwatch_tick: Duration,
    /// Plan alarms as precise one-shot wakeups instead of relying on the
    /// sampled check catching second zero
    pub precise_alarms: bool,
    /// Event channel capacity; a full channel drops events rather than
    /// blocking the loop
    pub event_buffer: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            clock_tick: Duration::from_millis(100),
            stopwatch_tick: Duration::from_millis(10),
            precise_alarms: true,
            event_buffer: 256,
        }
    }
}

pub struct Controller {
    state: Arc<Mutex<AppState>>,
    clock: Arc<dyn WallClock>,
    store: Arc<dyn KvStore>,
    config: RuntimeConfig,
    events: mpsc::Sender<UiEvent>,
    /// Count of observed real-midnight wraps since startup
    real_day: u64,
    last_midnight_offset: RealDuration,
    plan_dirty: bool,
}

impl Controller {
    /// Load persisted state and assemble the controller plus the event
    /// stream its consumers read from
    pub fn new(
        clock: Arc<dyn WallClock>,
        store: Arc<dyn KvStore>,
        config: RuntimeConfig,
    ) -> (Self, mpsc::Receiver<UiEvent>) {
        let settings = load_settings(&*store);
        let presets = load_presets(&*store);
        let state = AppState::from_parts(Default::default(), settings, presets);
        let (events, rx) = mpsc::channel(config.event_buffer);
        let last_midnight_offset = clock.since_local_midnight();

        let controller = Controller {
            state: Arc::new(Mutex::new(state)),
            clock,
            store,
            config,
            events,
            real_day: 0,
            last_midnight_offset,
            plan_dirty: true,
        };
        (controller, rx)
    }

    /// Shared read access for UI surfaces
    pub fn state(&self) -> Arc<Mutex<AppState>> {
        Arc::clone(&self.state)
    }

    /// Run the cooperative select loop until the command channel closes
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        let mut clock_tick = interval(self.config.clock_tick);
        clock_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut sw_tick = interval(self.config.stopwatch_tick);
        sw_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut alarm_deadline: Option<Instant> = None;
        info!(precise = self.config.precise_alarms, "controller started");

        loop {
            if self.plan_dirty && self.config.precise_alarms {
                alarm_deadline = self.plan_delay().map(|d| Instant::now() + d);
                self.plan_dirty = false;
                debug!(?alarm_deadline, "alarm plan refreshed");
            }

            tokio::select! {
                _ = clock_tick.tick() => {
                    for event in self.tick_clock() {
                        self.emit(event);
                    }
                }
                _ = sw_tick.tick() => {
                    let view = {
                        let state = self.state.lock();
                        state
                            .stopwatch()
                            .is_running()
                            .then(|| stopwatch_view(&state, self.clock.now()))
                    };
                    if let Some(view) = view {
                        self.emit(UiEvent::Stopwatch(view));
                    }
                }
                _ = maybe_sleep(alarm_deadline), if alarm_deadline.is_some() => {
                    for event in self.fire_planned() {
                        self.emit(event);
                    }
                }
                cmd = commands.recv() => {
                    let Some(cmd) = cmd else {
                        info!("command channel closed, stopping");
                        break;
                    };
                    for event in self.handle_command(cmd) {
                        self.emit(event);
                    }
                }
            }
        }
    }

    /// One clock tick: redisplay the dilated clock and, in sampled mode,
    /// run the polled alarm check
    fn tick_clock(&mut self) -> Vec<UiEvent> {
        let (tod, stamp) = self.observe();
        let mut state = self.state.lock();

        let mut out = vec![UiEvent::Clock(clock_view(&state, tod))];
        if !self.config.precise_alarms {
            out.extend(state.due_alarms(tod, stamp).into_iter().map(UiEvent::Alarm));
        }
        out
    }

    /// A planned wakeup landed on an alarm boundary: the sampled check now
    /// observes second zero by construction
    fn fire_planned(&mut self) -> Vec<UiEvent> {
        let (tod, stamp) = self.observe();
        let events = {
            let mut state = self.state.lock();
            state.due_alarms(tod, stamp)
        };
        self.plan_dirty = true;
        events.into_iter().map(UiEvent::Alarm).collect()
    }

    /// Sample the wall clock: dilated time of day plus the cycle stamp,
    /// advancing the day counter on a midnight wrap
    fn observe(&mut self) -> (nclock_core::TimeOfDay, CycleStamp) {
        let offset = self.clock.since_local_midnight();
        if offset < self.last_midnight_offset {
            self.real_day += 1;
            self.plan_dirty = true;
            debug!(day = self.real_day, "crossed real midnight");
        }
        self.last_midnight_offset = offset;

        let n = self.state.lock().n();
        (
            dilated_time_of_day(offset, n),
            CycleStamp {
                real_day: self.real_day,
                cycle: dilated_cycle(offset, n),
            },
        )
    }

    fn plan_delay(&self) -> Option<Duration> {
        let state = self.state.lock();
        next_firing(
            state.alarms(),
            state.n(),
            self.clock.since_local_midnight(),
        )
        .map(|plan| plan.delay.to_std())
    }

    fn handle_command(&mut self, cmd: Command) -> Vec<UiEvent> {
        let now = self.clock.now();
        let offset = self.clock.since_local_midnight();
        let mut state = self.state.lock();
        let mut out = Vec::new();

        match cmd {
            Command::SetN(raw) => {
                state.set_n(raw);
                self.plan_dirty = true;
                out.push(UiEvent::Clock(clock_view(
                    &state,
                    dilated_time_of_day(offset, state.n()),
                )));
            }
            Command::ApplyPreset(id) => match state.apply_preset(id) {
                Ok(_) => {
                    self.plan_dirty = true;
                    out.push(UiEvent::Clock(clock_view(
                        &state,
                        dilated_time_of_day(offset, state.n()),
                    )));
                }
                Err(err) => warn!(%err, "apply preset rejected"),
            },
            Command::SavePreset(name) => {
                state.preset_save_current(name);
                self.persist_presets(&state);
                out.push(UiEvent::Clock(clock_view(
                    &state,
                    dilated_time_of_day(offset, state.n()),
                )));
            }
            Command::DeletePreset(id) => match state.preset_delete(id) {
                Ok(()) => {
                    self.persist_presets(&state);
                    out.push(UiEvent::Clock(clock_view(
                        &state,
                        dilated_time_of_day(offset, state.n()),
                    )));
                }
                Err(err) => warn!(%err, "delete preset rejected"),
            },
            Command::StopwatchToggle => {
                state.stopwatch_toggle(now);
                out.push(UiEvent::Stopwatch(stopwatch_view(&state, now)));
            }
            Command::StopwatchLapOrReset => {
                state.stopwatch_lap_or_reset(now);
                out.push(UiEvent::Stopwatch(stopwatch_view(&state, now)));
            }
            Command::AlarmAdd => match state.alarm_add() {
                Ok(_) => {
                    self.plan_dirty = true;
                    out.push(UiEvent::Alarms(alarm_list_view(&state)));
                }
                Err(err) => warn!(%err, "add alarm rejected"),
            },
            Command::AlarmToggle(id) => match state.alarm_toggle(id) {
                Ok(_) => {
                    self.plan_dirty = true;
                    out.push(UiEvent::Alarms(alarm_list_view(&state)));
                }
                Err(err) => warn!(%err, "toggle alarm rejected"),
            },
            Command::AlarmSetTime { id, hour, minute } => {
                match state.alarm_set_time(id, hour, minute) {
                    Ok(()) => {
                        self.plan_dirty = true;
                        out.push(UiEvent::Alarms(alarm_list_view(&state)));
                    }
                    Err(err) => warn!(%err, "set alarm time rejected"),
                }
            }
            Command::AlarmDelete(id) => match state.alarm_delete(id) {
                Ok(()) => {
                    self.plan_dirty = true;
                    out.push(UiEvent::Alarms(alarm_list_view(&state)));
                }
                Err(err) => warn!(%err, "delete alarm rejected"),
            },
            Command::SetShowSeconds(on) => {
                state.set_show_seconds(on);
                self.persist_settings(&state);
                out.push(UiEvent::Settings(settings_view(&state)));
                out.push(UiEvent::Clock(clock_view(
                    &state,
                    dilated_time_of_day(offset, state.n()),
                )));
            }
            Command::SetPresetsEnabled(on) => {
                state.set_presets_enabled(on);
                self.persist_settings(&state);
                out.push(UiEvent::Settings(settings_view(&state)));
                out.push(UiEvent::Clock(clock_view(
                    &state,
                    dilated_time_of_day(offset, state.n()),
                )));
            }
            Command::SetLanguage(lang) => {
                state.set_language(lang);
                self.persist_settings(&state);
                out.push(UiEvent::Settings(settings_view(&state)));
                out.push(UiEvent::Clock(clock_view(
                    &state,
                    dilated_time_of_day(offset, state.n()),
                )));
                out.push(UiEvent::Alarms(alarm_list_view(&state)));
            }
        }
        out
    }

    fn persist_presets(&self, state: &AppState) {
        if let Err(err) = save_presets(&*self.store, state.presets().iter()) {
            warn!(%err, "preset save failed");
        }
    }

    fn persist_settings(&self, state: &AppState) {
        if let Err(err) = save_settings(&*self.store, state.settings()) {
            warn!(%err, "settings save failed");
        }
    }

    /// Non-blocking emission: a lagging or closed consumer drops events,
    /// never stalls the loop
    fn emit(&self, event: UiEvent) {
        if let Err(err) = self.events.try_send(event) {
            warn!(%err, "event dropped");
        }
    }
}

async fn maybe_sleep(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        // Guarded out by the select condition
        None => std::future::pending().await,
    }
}
