//! N-Clock Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout N-Clock:
//! - Identifiers (AlarmId, PresetId)
//! - Time primitives (WallInstant, RealDuration, DilatedDuration, TimeOfDay)
//! - The N-value domain type (subjective hours per real day)
//! - Alarm, preset and settings records
//! - Application events and the error type

pub mod error;
pub mod event;
pub mod id;
pub mod nvalue;
pub mod records;
pub mod time;

pub use error::*;
pub use event::*;
pub use id::*;
pub use nvalue::*;
pub use records::*;
pub use time::*;
