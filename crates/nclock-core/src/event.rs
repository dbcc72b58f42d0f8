//! Application events
//!
//! Events are emitted by the runtime toward its consumers (render surface,
//! notification sink) over a channel; the timer loop never blocks on them.

use crate::AlarmId;

/// An event the application surfaces to its notification sink
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AppEvent {
    /// An enabled alarm's (hour, minute) boundary was crossed on the
    /// dilated clock
    AlarmFired {
        id: AlarmId,
        hour: u8,
        minute: u8,
        label: String,
    },
}
