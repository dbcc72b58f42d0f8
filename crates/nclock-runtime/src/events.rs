//! Command and event surface between the UI and the controller

use nclock_core::{AlarmId, AppEvent, Language, PresetId};
use nclock_state::{AlarmListView, ClockView, SettingsView, StopwatchView};

/// Mutation requests issued by UI surfaces
#[derive(Clone, Debug)]
pub enum Command {
    /// Raw slider input; clamped at the state boundary
    SetN(i64),
    ApplyPreset(PresetId),
    SavePreset(String),
    DeletePreset(PresetId),
    StopwatchToggle,
    StopwatchLapOrReset,
    AlarmAdd,
    AlarmToggle(AlarmId),
    AlarmSetTime {
        id: AlarmId,
        hour: u8,
        minute: u8,
    },
    AlarmDelete(AlarmId),
    SetShowSeconds(bool),
    SetPresetsEnabled(bool),
    SetLanguage(Language),
}

/// Everything the runtime emits toward its consumers. View variants are
/// full descriptions for the painter; `Alarm` goes to the notification
/// sink.
#[derive(Clone, Debug)]
pub enum UiEvent {
    Clock(ClockView),
    Stopwatch(StopwatchView),
    Alarms(AlarmListView),
    Settings(SettingsView),
    Alarm(AppEvent),
}
