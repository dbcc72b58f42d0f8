//! Identity types for N-Clock records
//!
//! Identifiers are plain 64-bit counters assigned monotonically by the
//! roster that owns the record; they are never reused within a process.

use std::fmt;

/// Alarm identity - unique within the alarm roster
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlarmId(pub u64);

impl AlarmId {
    #[inline]
    pub fn new(id: u64) -> Self {
        AlarmId(id)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alarm({})", self.0)
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preset identity - unique within the preset roster
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PresetId(pub u64);

impl PresetId {
    #[inline]
    pub fn new(id: u64) -> Self {
        PresetId(id)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Preset({})", self.0)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
