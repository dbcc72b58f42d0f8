//! Error types for N-Clock

use thiserror::Error;

use crate::{AlarmId, PresetId};

/// Core N-Clock errors
#[derive(Error, Debug)]
pub enum NClockError {
    #[error("N out of range [12, 48]: {0}")]
    InvalidN(i64),

    #[error("Invalid alarm time: {hour:02}:{minute:02}")]
    InvalidAlarmTime { hour: u8, minute: u8 },

    #[error("Alarm not found: {0}")]
    AlarmNotFound(AlarmId),

    #[error("Preset not found: {0}")]
    PresetNotFound(PresetId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for NClockError {
    fn from(err: std::io::Error) -> Self {
        NClockError::Storage(err.to_string())
    }
}

/// Result type for N-Clock operations
pub type NClockResult<T> = Result<T, NClockError>;
