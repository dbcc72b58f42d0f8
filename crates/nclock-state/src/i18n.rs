//! Localized string table
//!
//! Total lookup: every label is defined for both languages.

use nclock_core::Language;

/// Keys for every user-visible label the views emit
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelKey {
    NavClock,
    NavStopwatch,
    NavAlarm,
    NavSettings,
    Hours,
    Start,
    Stop,
    Lap,
    Reset,
    AlarmDefaultLabel,
    AlarmTriggered,
    AddAlarm,
    Delete,
    Save,
    SaveCurrentN,
    ShowSeconds,
    PresetFeature,
    LanguageName,
}

/// Look up a label in the given language
pub fn label(lang: Language, key: LabelKey) -> &'static str {
    use LabelKey::*;
    match lang {
        Language::Ja => match key {
            NavClock => "時計",
            NavStopwatch => "ストップウォッチ",
            NavAlarm => "アラーム",
            NavSettings => "設定",
            Hours => "時間",
            Start => "スタート",
            Stop => "ストップ",
            Lap => "ラップ",
            Reset => "リセット",
            AlarmDefaultLabel => "アラーム",
            AlarmTriggered => "アラームが鳴りました！",
            AddAlarm => "＋ アラームを追加",
            Delete => "削除",
            Save => "保存",
            SaveCurrentN => "現在のN値を保存",
            ShowSeconds => "秒数表示",
            PresetFeature => "N値プリセット機能",
            LanguageName => "日本語",
        },
        Language::En => match key {
            NavClock => "Clock",
            NavStopwatch => "Stopwatch",
            NavAlarm => "Alarm",
            NavSettings => "Settings",
            Hours => "Hours",
            Start => "Start",
            Stop => "Stop",
            Lap => "Lap",
            Reset => "Reset",
            AlarmDefaultLabel => "Alarm",
            AlarmTriggered => "Alarm Triggered!",
            AddAlarm => "+ Add Alarm",
            Delete => "Delete",
            Save => "Save",
            SaveCurrentN => "Save Current N",
            ShowSeconds => "Show Seconds",
            PresetFeature => "N Preset Feature",
            LanguageName => "English",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_total() {
        assert_eq!(label(Language::En, LabelKey::NavClock), "Clock");
        assert_eq!(label(Language::Ja, LabelKey::NavClock), "時計");
        assert_eq!(label(Language::En, LabelKey::Lap), "Lap");
    }
}
