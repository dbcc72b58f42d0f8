//! Application state
//!
//! One owned struct holds everything mutable: the current N, settings, the
//! alarm and preset rosters, and the stopwatch. The runtime owns a single
//! instance; UI surfaces read it and issue mutations through the setters
//! below. There is no global mutable state.

use nclock_core::{
    AlarmId, AppEvent, NClockResult, NValue, Preset, PresetId, Settings, TimeOfDay, WallInstant,
};
use tracing::debug;

use crate::alarms::{AlarmRoster, CycleStamp};
use crate::i18n::{label, LabelKey};
use crate::presets::PresetRoster;
use crate::stopwatch::{Stopwatch, StopwatchPhase};

/// Outcome of the stopwatch's secondary (lap/reset) button
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SecondaryAction {
    Lapped,
    Reset,
    Noop,
}

#[derive(Debug)]
pub struct AppState {
    n: NValue,
    settings: Settings,
    alarms: AlarmRoster,
    presets: PresetRoster,
    stopwatch: Stopwatch,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_parts(NValue::default(), Settings::default(), None)
    }
}

impl AppState {
    /// Assemble from loaded state; `presets = None` seeds the built-ins
    pub fn from_parts(n: NValue, settings: Settings, presets: Option<Vec<Preset>>) -> Self {
        let presets = match presets {
            Some(records) => PresetRoster::seeded(records),
            None => PresetRoster::default(),
        };
        AppState {
            n,
            settings,
            alarms: AlarmRoster::with_default(label(settings.language, LabelKey::AlarmDefaultLabel)),
            presets,
            stopwatch: Stopwatch::new(),
        }
    }

    #[inline]
    pub fn n(&self) -> NValue {
        self.n
    }

    #[inline]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[inline]
    pub fn alarms(&self) -> &AlarmRoster {
        &self.alarms
    }

    #[inline]
    pub fn presets(&self) -> &PresetRoster {
        &self.presets
    }

    #[inline]
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Set N from raw slider input; out-of-range values are clamped at
    /// this boundary so the dilation engine only ever sees valid N
    pub fn set_n(&mut self, raw: i64) -> NValue {
        self.n = NValue::clamped(raw);
        debug!(n = %self.n, "n changed");
        self.n
    }

    pub fn apply_preset(&mut self, id: PresetId) -> NClockResult<NValue> {
        let preset = self
            .presets
            .get(id)
            .ok_or(nclock_core::NClockError::PresetNotFound(id))?;
        self.n = preset.n;
        debug!(preset = %id, n = %self.n, "preset applied");
        Ok(self.n)
    }

    pub fn set_show_seconds(&mut self, on: bool) {
        self.settings.show_seconds = on;
    }

    pub fn set_presets_enabled(&mut self, on: bool) {
        self.settings.presets_enabled = on;
    }

    pub fn set_language(&mut self, language: nclock_core::Language) {
        self.settings.language = language;
    }

    pub fn alarm_add(&mut self) -> NClockResult<AlarmId> {
        let default_label = label(self.settings.language, LabelKey::AlarmDefaultLabel);
        self.alarms.add(7, 0, default_label)
    }

    pub fn alarm_toggle(&mut self, id: AlarmId) -> NClockResult<bool> {
        self.alarms.toggle(id)
    }

    pub fn alarm_set_time(&mut self, id: AlarmId, hour: u8, minute: u8) -> NClockResult<()> {
        self.alarms.set_time(id, hour, minute)
    }

    pub fn alarm_delete(&mut self, id: AlarmId) -> NClockResult<()> {
        self.alarms.delete(id)
    }

    /// Save the current N under a name
    pub fn preset_save_current(&mut self, name: impl Into<String>) -> PresetId {
        self.presets.add(name, self.n)
    }

    pub fn preset_delete(&mut self, id: PresetId) -> NClockResult<()> {
        self.presets.delete(id)
    }

    /// The single start/stop button
    pub fn stopwatch_toggle(&mut self, now: WallInstant) -> StopwatchPhase {
        if self.stopwatch.is_running() {
            self.stopwatch.stop(now);
        } else {
            self.stopwatch.start(now);
        }
        self.stopwatch.phase()
    }

    /// The combined lap/reset button: lap while running, reset when
    /// stopped with history, otherwise nothing
    pub fn stopwatch_lap_or_reset(&mut self, now: WallInstant) -> SecondaryAction {
        if self.stopwatch.is_running() {
            match self.stopwatch.lap(now, self.n) {
                Some(_) => SecondaryAction::Lapped,
                None => SecondaryAction::Noop,
            }
        } else if self.stopwatch.reset() {
            SecondaryAction::Reset
        } else {
            SecondaryAction::Noop
        }
    }

    /// Sampled alarm check for the current dilated tick
    pub fn due_alarms(&mut self, tod: TimeOfDay, stamp: CycleStamp) -> Vec<AppEvent> {
        self.alarms.due(tod, stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> WallInstant {
        WallInstant::from_millis(ms)
    }

    #[test]
    fn test_set_n_clamps() {
        let mut state = AppState::default();
        assert_eq!(state.set_n(30).get(), 30);
        assert_eq!(state.set_n(7).get(), 12);
        assert_eq!(state.set_n(99).get(), 48);
    }

    #[test]
    fn test_apply_preset() {
        let mut state = AppState::default();
        let id = state.preset_save_current("now");
        state.set_n(36);
        assert_eq!(state.apply_preset(id).unwrap().get(), 24);
        assert!(state.apply_preset(PresetId::new(999)).is_err());
    }

    #[test]
    fn test_default_alarm_seeded() {
        let state = AppState::default();
        assert_eq!(state.alarms().len(), 1);
        let alarm = state.alarms().iter().next().unwrap();
        assert_eq!((alarm.hour, alarm.minute), (7, 0));
        assert!(alarm.enabled);
    }

    #[test]
    fn test_stopwatch_buttons() {
        let mut state = AppState::default();

        // Secondary button does nothing in the zero state
        assert_eq!(state.stopwatch_lap_or_reset(at(0)), SecondaryAction::Noop);

        assert_eq!(state.stopwatch_toggle(at(0)), StopwatchPhase::Running);
        assert_eq!(state.stopwatch_lap_or_reset(at(5000)), SecondaryAction::Lapped);
        assert_eq!(state.stopwatch_toggle(at(8000)), StopwatchPhase::Stopped);
        assert_eq!(state.stopwatch_lap_or_reset(at(9000)), SecondaryAction::Reset);
        assert!(!state.stopwatch().has_history());
    }

    #[test]
    fn test_n_change_applies_to_running_stopwatch() {
        let mut state = AppState::default();
        state.stopwatch_toggle(at(0));
        state.set_n(12);
        assert_eq!(
            state.stopwatch().total_dilated(at(5000), state.n()).as_millis(),
            10_000
        );
    }
}
