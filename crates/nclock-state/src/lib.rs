//! N-Clock State Engine - stopwatch, rosters, and the application state
//!
//! This crate implements the stateful side of the application:
//! - The stopwatch accumulator (real-millisecond bookkeeping, dilated
//!   display, lap intervals)
//! - Alarm and preset rosters
//! - `AppState`: the single owned application-state struct with defined
//!   setters (no global mutable state)
//! - Pure state -> view-description projection
//! - The localized string table

pub mod alarms;
pub mod app;
pub mod i18n;
pub mod presets;
pub mod stopwatch;
pub mod view;

pub use alarms::*;
pub use app::*;
pub use i18n::*;
pub use presets::*;
pub use stopwatch::*;
pub use view::*;
