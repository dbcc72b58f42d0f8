//! Alarm roster and trigger latch
//!
//! The roster owns the alarm entries and the once-per-cycle firing latch.
//! The driving loop samples the dilated clock at a fixed real cadence, so a
//! single dilated second may be observed by many samples (at N=48 a dilated
//! second lasts two real seconds); the latch keys firings on
//! (day-cycle, hour, minute) so each boundary fires at most once.

use std::collections::HashMap;

use nclock_core::{
    AlarmEntry, AlarmId, AppEvent, NClockError, NClockResult, TimeOfDay,
};
use tracing::debug;

/// Identifies one dilated day cycle; combines the real-day index with the
/// intra-day cycle count so N < 24 (several dilated days per real day)
/// still fires once per dilated day.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CycleStamp {
    pub real_day: u64,
    pub cycle: u64,
}

#[derive(Debug, Default)]
pub struct AlarmRoster {
    alarms: Vec<AlarmEntry>,
    next_id: u64,
    fired: HashMap<AlarmId, (CycleStamp, u8, u8)>,
}

impl AlarmRoster {
    pub fn new() -> Self {
        AlarmRoster {
            alarms: Vec::new(),
            next_id: 1,
            fired: HashMap::new(),
        }
    }

    /// Seed with the default roster (a single 07:00 alarm)
    pub fn with_default(label: impl Into<String>) -> Self {
        let mut roster = AlarmRoster::new();
        roster.add(7, 0, label).ok();
        roster
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlarmEntry> {
        self.alarms.iter()
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    pub fn get(&self, id: AlarmId) -> Option<&AlarmEntry> {
        self.alarms.iter().find(|a| a.id == id)
    }

    pub fn add(&mut self, hour: u8, minute: u8, label: impl Into<String>) -> NClockResult<AlarmId> {
        let id = AlarmId::new(self.next_id);
        let entry = AlarmEntry::new(id, hour, minute, label)?;
        self.next_id += 1;
        self.alarms.push(entry);
        Ok(id)
    }

    pub fn toggle(&mut self, id: AlarmId) -> NClockResult<bool> {
        let alarm = self.get_mut(id)?;
        alarm.enabled = !alarm.enabled;
        Ok(alarm.enabled)
    }

    pub fn set_time(&mut self, id: AlarmId, hour: u8, minute: u8) -> NClockResult<()> {
        if hour >= 24 || minute >= 60 {
            return Err(NClockError::InvalidAlarmTime { hour, minute });
        }
        let alarm = self.get_mut(id)?;
        alarm.hour = hour;
        alarm.minute = minute;
        // A moved alarm may fire again at its new boundary
        self.fired.remove(&id);
        Ok(())
    }

    pub fn delete(&mut self, id: AlarmId) -> NClockResult<()> {
        let before = self.alarms.len();
        self.alarms.retain(|a| a.id != id);
        if self.alarms.len() == before {
            return Err(NClockError::AlarmNotFound(id));
        }
        self.fired.remove(&id);
        Ok(())
    }

    /// Sampled trigger check: which enabled alarms match this dilated tick
    /// and have not yet fired in this cycle. Latches the matches.
    pub fn due(&mut self, tod: TimeOfDay, stamp: CycleStamp) -> Vec<AppEvent> {
        if !tod.is_minute_boundary() {
            return Vec::new();
        }
        let mut events = Vec::new();
        for alarm in &self.alarms {
            if !alarm.matches(tod) {
                continue;
            }
            let key = (stamp, alarm.hour, alarm.minute);
            if self.fired.get(&alarm.id) == Some(&key) {
                continue;
            }
            self.fired.insert(alarm.id, key);
            debug!(alarm = %alarm.id, %tod, "alarm due");
            events.push(AppEvent::AlarmFired {
                id: alarm.id,
                hour: alarm.hour,
                minute: alarm.minute,
                label: alarm.label.clone(),
            });
        }
        events
    }

    fn get_mut(&mut self, id: AlarmId) -> NClockResult<&mut AlarmEntry> {
        self.alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(NClockError::AlarmNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY0: CycleStamp = CycleStamp {
        real_day: 0,
        cycle: 0,
    };

    fn fired_ids(events: &[AppEvent]) -> Vec<AlarmId> {
        events
            .iter()
            .map(|e| match e {
                AppEvent::AlarmFired { id, .. } => *id,
            })
            .collect()
    }

    #[test]
    fn test_roster_crud() {
        let mut roster = AlarmRoster::new();
        let a = roster.add(7, 0, "wake").unwrap();
        let b = roster.add(22, 30, "sleep").unwrap();
        assert_eq!(roster.len(), 2);
        assert_ne!(a, b);

        roster.set_time(a, 8, 15).unwrap();
        assert_eq!(roster.get(a).unwrap().hour, 8);
        assert!(roster.set_time(a, 24, 0).is_err());

        assert!(!roster.toggle(b).unwrap());
        assert!(!roster.get(b).unwrap().enabled);

        roster.delete(a).unwrap();
        assert!(roster.get(a).is_none());
        assert!(roster.delete(a).is_err());
    }

    #[test]
    fn test_due_fires_once_per_cycle() {
        let mut roster = AlarmRoster::new();
        let id = roster.add(7, 0, "wake").unwrap();

        let tod = TimeOfDay::new(7, 0, 0);
        assert_eq!(fired_ids(&roster.due(tod, DAY0)), vec![id]);
        // Repeated samples inside the same dilated second stay latched
        assert!(roster.due(tod, DAY0).is_empty());

        // Next cycle fires again
        let day1 = CycleStamp {
            real_day: 1,
            cycle: 0,
        };
        assert_eq!(fired_ids(&roster.due(tod, day1)), vec![id]);

        // Second intra-day dilated cycle (N < 24) counts as a new cycle
        let cycle1 = CycleStamp {
            real_day: 1,
            cycle: 1,
        };
        assert_eq!(fired_ids(&roster.due(tod, cycle1)), vec![id]);
    }

    #[test]
    fn test_due_respects_enabled_and_second() {
        let mut roster = AlarmRoster::new();
        let id = roster.add(7, 0, "wake").unwrap();

        assert!(roster.due(TimeOfDay::new(7, 0, 1), DAY0).is_empty());
        assert!(roster.due(TimeOfDay::new(6, 59, 0), DAY0).is_empty());

        roster.toggle(id).unwrap();
        assert!(roster.due(TimeOfDay::new(7, 0, 0), DAY0).is_empty());
    }

    #[test]
    fn test_deleted_alarm_never_fires() {
        let mut roster = AlarmRoster::new();
        let id = roster.add(7, 0, "wake").unwrap();
        roster.delete(id).unwrap();
        assert!(roster.due(TimeOfDay::new(7, 0, 0), DAY0).is_empty());
    }

    #[test]
    fn test_retimed_alarm_can_fire_again() {
        let mut roster = AlarmRoster::new();
        let id = roster.add(7, 0, "wake").unwrap();
        assert_eq!(roster.due(TimeOfDay::new(7, 0, 0), DAY0).len(), 1);

        roster.set_time(id, 7, 1).unwrap();
        assert_eq!(roster.due(TimeOfDay::new(7, 1, 0), DAY0).len(), 1);
    }
}
