//! N-Clock Time Engine - dilation transform and wall-clock plumbing
//!
//! This crate implements the time-dilation model shared by the clock and
//! stopwatch surfaces:
//! - `dilate`/`undilate`: rescale real durations by 24/N (and back)
//! - `dilated_time_of_day`: decompose a real offset since local midnight
//!   into dilated clock components
//! - `WallClock`: the host clock seam (system and manual implementations)
//! - display formatting for durations and times of day

pub mod dilation;
pub mod format;
pub mod wall;

pub use dilation::*;
pub use format::*;
pub use wall::*;
