//! N-value preset roster

use nclock_core::{NClockError, NClockResult, NValue, Preset, PresetId};

/// Built-in presets seeded when the store has no (or malformed) data
pub fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new(PresetId::new(1), "Standard (24H)", NValue::REFERENCE),
        Preset::new(PresetId::new(2), "Focus (18H)", NValue::clamped(18)),
        Preset::new(PresetId::new(3), "Relaxed (36H)", NValue::clamped(36)),
    ]
}

#[derive(Debug)]
pub struct PresetRoster {
    presets: Vec<Preset>,
    next_id: u64,
}

impl Default for PresetRoster {
    fn default() -> Self {
        PresetRoster::seeded(default_presets())
    }
}

impl PresetRoster {
    /// Build from loaded records; next id continues after the largest
    pub fn seeded(presets: Vec<Preset>) -> Self {
        let next_id = presets.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        PresetRoster { presets, next_id }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn get(&self, id: PresetId) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn add(&mut self, name: impl Into<String>, n: NValue) -> PresetId {
        let id = PresetId::new(self.next_id);
        self.next_id += 1;
        self.presets.push(Preset::new(id, name, n));
        id
    }

    pub fn delete(&mut self, id: PresetId) -> NClockResult<()> {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        if self.presets.len() == before {
            return Err(NClockError::PresetNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let roster = PresetRoster::default();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get(PresetId::new(2)).unwrap().n.get(), 18);
    }

    #[test]
    fn test_id_continues_after_seed() {
        let mut roster = PresetRoster::default();
        let id = roster.add("Night owl", NValue::clamped(30));
        assert_eq!(id.get(), 4);

        roster.delete(id).unwrap();
        assert!(roster.delete(id).is_err());
        // Ids are never reused
        assert_eq!(roster.add("Again", NValue::clamped(30)).get(), 5);
    }

    #[test]
    fn test_seed_from_empty() {
        let mut roster = PresetRoster::seeded(Vec::new());
        assert!(roster.is_empty());
        assert_eq!(roster.add("First", NValue::REFERENCE).get(), 1);
    }
}
