//! N-Clock Runtime - controller and timer loops
//!
//! The controller owns the application state and drives it with a single
//! cooperative select loop:
//! 1. A fixed real-interval clock tick redisplays the dilated clock and
//!    (in sampled mode) checks alarms
//! 2. A finer stopwatch tick redisplays the stopwatch while it runs
//! 3. A precise one-shot alarm sleep, re-planned whenever N or the alarm
//!    roster changes
//! 4. Commands from the UI mutate state through the defined setters and
//!    persist the affected records best-effort
//!
//! Everything the runtime produces leaves through an event channel; it
//! never blocks on a consumer.

pub mod controller;
pub mod events;
pub mod planner;

pub use controller::*;
pub use events::*;
pub use planner::*;
