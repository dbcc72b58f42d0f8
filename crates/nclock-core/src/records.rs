//! Alarm, preset and settings records

use crate::{AlarmId, NClockError, NClockResult, NValue, PresetId, TimeOfDay};

/// UI language
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    /// Short language tag as persisted
    pub fn tag(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ja" => Some(Language::Ja),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// User-visible settings
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settings {
    /// Show the seconds component on the dilated clock
    pub show_seconds: bool,
    /// Preset roster visible on the clock surface
    pub presets_enabled: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_seconds: true,
            presets_enabled: true,
            language: Language::default(),
        }
    }
}

/// A single alarm, compared against the dilated clock's (hour, minute) at
/// dilated-second zero
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AlarmEntry {
    pub id: AlarmId,
    pub hour: u8,
    pub minute: u8,
    pub enabled: bool,
    pub label: String,
}

impl AlarmEntry {
    pub fn new(id: AlarmId, hour: u8, minute: u8, label: impl Into<String>) -> NClockResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(NClockError::InvalidAlarmTime { hour, minute });
        }
        Ok(AlarmEntry {
            id,
            hour,
            minute,
            enabled: true,
            label: label.into(),
        })
    }

    /// Does this alarm match the given dilated time of day?
    /// Only the first sample of the dilated minute counts.
    #[inline]
    pub fn matches(&self, tod: TimeOfDay) -> bool {
        self.enabled && tod.second == 0 && self.hour == tod.hour && self.minute == tod.minute
    }
}

/// A named N-value preset
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    pub n: NValue,
}

impl Preset {
    pub fn new(id: PresetId, name: impl Into<String>, n: NValue) -> Self {
        Preset {
            id,
            name: name.into(),
            n,
        }
    }
}
