//! Persisted record DTOs
//!
//! Serde stays confined to this crate; core types convert to and from the
//! DTOs here. Loading is lenient in exactly one way: any parse failure
//! replaces the whole value with the built-in defaults (full replace,
//! never a partial merge).

use nclock_core::{Language, NValue, Preset, PresetId, Settings};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::kv::{KvStore, StoreResult};

/// Logical key for the preset roster
pub const PRESETS_KEY: &str = "nclock_presets";

/// Logical key for the preset feature flag
pub const PRESET_FLAG_KEY: &str = "nclock_preset_enabled";

/// Logical key for the remaining settings (seconds visibility, language)
pub const SETTINGS_KEY: &str = "nclock_settings";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PresetRecord {
    pub id: u64,
    pub name: String,
    pub n: i64,
}

impl From<&Preset> for PresetRecord {
    fn from(p: &Preset) -> Self {
        PresetRecord {
            id: p.id.get(),
            name: p.name.clone(),
            n: p.n.get() as i64,
        }
    }
}

impl From<PresetRecord> for Preset {
    fn from(r: PresetRecord) -> Self {
        // An out-of-range stored N saturates to the slider bounds rather
        // than invalidating the whole roster
        Preset::new(PresetId::new(r.id), r.name, NValue::clamped(r.n))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SettingsRecord {
    pub show_seconds: bool,
    pub language: String,
}

/// Load the preset roster; `None` means "absent or malformed, seed the
/// built-in defaults"
pub fn load_presets(store: &dyn KvStore) -> Option<Vec<Preset>> {
    let raw = match store.load(PRESETS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(%err, "preset load failed, using defaults");
            return None;
        }
    };
    match serde_json::from_str::<Vec<PresetRecord>>(&raw) {
        Ok(records) => Some(records.into_iter().map(Preset::from).collect()),
        Err(err) => {
            warn!(%err, "malformed preset data, replacing with defaults");
            None
        }
    }
}

pub fn save_presets<'a>(
    store: &dyn KvStore,
    presets: impl Iterator<Item = &'a Preset>,
) -> StoreResult<()> {
    let records: Vec<PresetRecord> = presets.map(PresetRecord::from).collect();
    store.save(PRESETS_KEY, &serde_json::to_string(&records)?)
}

/// Load settings, folding the separate preset-visibility flag in.
/// Defaults apply per missing/malformed key.
pub fn load_settings(store: &dyn KvStore) -> Settings {
    let mut settings = Settings::default();

    match store.load(SETTINGS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<SettingsRecord>(&raw) {
            Ok(record) => {
                settings.show_seconds = record.show_seconds;
                settings.language =
                    Language::from_tag(&record.language).unwrap_or_default();
            }
            Err(err) => warn!(%err, "malformed settings, using defaults"),
        },
        Ok(None) => {}
        Err(err) => warn!(%err, "settings load failed, using defaults"),
    }

    match store.load(PRESET_FLAG_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
            Ok(flag) => settings.presets_enabled = flag,
            Err(err) => warn!(%err, "malformed preset flag, using default"),
        },
        Ok(None) => {}
        Err(err) => warn!(%err, "preset flag load failed, using default"),
    }

    settings
}

pub fn save_settings(store: &dyn KvStore, settings: Settings) -> StoreResult<()> {
    let record = SettingsRecord {
        show_seconds: settings.show_seconds,
        language: settings.language.tag().to_string(),
    };
    store.save(SETTINGS_KEY, &serde_json::to_string(&record)?)?;
    store.save(
        PRESET_FLAG_KEY,
        &serde_json::to_string(&settings.presets_enabled)?,
    )
}
