//! View descriptions
//!
//! Pure "state -> view description" projections. The core state machine
//! never renders; the runtime emits these descriptions and a painter
//! collaborator decides how to draw them.

use nclock_core::{AlarmId, PresetId, TimeOfDay, WallInstant};
use nclock_time::{format_stopwatch, format_time_of_day};

use crate::app::AppState;
use crate::i18n::{label, LabelKey};

/// The clock surface: dilated time plus the N slider caption and, when the
/// feature is enabled, the preset roster
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClockView {
    pub time: String,
    pub n: u32,
    pub n_caption: String,
    pub presets: Option<Vec<PresetView>>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PresetView {
    pub id: PresetId,
    pub name: String,
    pub caption: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimaryButton {
    Start,
    Stop,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SecondaryButton {
    Lap,
    Reset,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LapView {
    /// 1-based chronological lap number
    pub number: usize,
    pub display: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StopwatchView {
    pub display: String,
    pub primary: PrimaryButton,
    pub primary_label: String,
    pub secondary: SecondaryButton,
    pub secondary_label: String,
    /// Most-recent-first
    pub laps: Vec<LapView>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AlarmView {
    pub id: AlarmId,
    pub time: String,
    pub enabled: bool,
    pub label: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AlarmListView {
    pub add_label: String,
    pub alarms: Vec<AlarmView>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettingsView {
    pub show_seconds: bool,
    pub show_seconds_label: String,
    pub presets_enabled: bool,
    pub presets_enabled_label: String,
    pub language_name: String,
}

pub fn clock_view(state: &AppState, tod: TimeOfDay) -> ClockView {
    let settings = state.settings();
    let lang = settings.language;
    let presets = settings.presets_enabled.then(|| {
        state
            .presets()
            .iter()
            .map(|p| PresetView {
                id: p.id,
                name: p.name.clone(),
                caption: format!("N = {}", p.n),
            })
            .collect()
    });
    ClockView {
        time: format_time_of_day(tod, settings.show_seconds),
        n: state.n().get(),
        n_caption: format!("N = {} {}", state.n(), label(lang, LabelKey::Hours)),
        presets,
    }
}

pub fn stopwatch_view(state: &AppState, now: WallInstant) -> StopwatchView {
    let lang = state.settings().language;
    let sw = state.stopwatch();

    let (primary, primary_key) = if sw.is_running() {
        (PrimaryButton::Stop, LabelKey::Stop)
    } else {
        (PrimaryButton::Start, LabelKey::Start)
    };
    // Reset only offered when stopped with history, matching the
    // accumulator's reset precondition
    let (secondary, secondary_key) = if !sw.is_running() && sw.has_history() {
        (SecondaryButton::Reset, LabelKey::Reset)
    } else {
        (SecondaryButton::Lap, LabelKey::Lap)
    };

    let total = sw.laps().len();
    let laps = sw
        .laps()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, lap)| LapView {
            number: i + 1,
            display: format!("{} {}: {}", label(lang, LabelKey::Lap), i + 1, format_stopwatch(*lap)),
        })
        .collect::<Vec<_>>();
    debug_assert_eq!(laps.len(), total);

    StopwatchView {
        display: format_stopwatch(sw.total_dilated(now, state.n())),
        primary,
        primary_label: label(lang, primary_key).to_string(),
        secondary,
        secondary_label: label(lang, secondary_key).to_string(),
        laps,
    }
}

pub fn alarm_list_view(state: &AppState) -> AlarmListView {
    AlarmListView {
        add_label: label(state.settings().language, LabelKey::AddAlarm).to_string(),
        alarms: state
            .alarms()
            .iter()
            .map(|a| AlarmView {
                id: a.id,
                time: format!("{:02}:{:02}", a.hour, a.minute),
                enabled: a.enabled,
                label: a.label.clone(),
            })
            .collect(),
    }
}

pub fn settings_view(state: &AppState) -> SettingsView {
    let settings = state.settings();
    let lang = settings.language;
    SettingsView {
        show_seconds: settings.show_seconds,
        show_seconds_label: label(lang, LabelKey::ShowSeconds).to_string(),
        presets_enabled: settings.presets_enabled,
        presets_enabled_label: label(lang, LabelKey::PresetFeature).to_string(),
        language_name: label(lang, LabelKey::LanguageName).to_string(),
    }
}
