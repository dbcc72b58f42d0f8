//! Display formatting
//!
//! Pure functions from durations/times to display strings; independent of
//! any state machine.

use nclock_core::{DilatedDuration, TimeOfDay};

/// Format a dilated duration for the stopwatch display:
/// `HH:MM:SS.CC` at or above one dilated hour, `MM:SS.CC` below,
/// where `CC` is truncated hundredths.
pub fn format_stopwatch(d: DilatedDuration) -> String {
    let ms = d.as_millis();
    let total_secs = ms / 1000;
    let cs = (ms % 1000) / 10;

    if total_secs >= 3600 {
        let h = total_secs / 3600;
        let m = (total_secs % 3600) / 60;
        let s = total_secs % 60;
        format!("{:02}:{:02}:{:02}.{:02}", h, m, s, cs)
    } else {
        let m = total_secs / 60;
        let s = total_secs % 60;
        format!("{:02}:{:02}.{:02}", m, s, cs)
    }
}

/// Format a dilated time of day: `HH:MM:SS`, or `HH:MM` with seconds hidden
pub fn format_time_of_day(tod: TimeOfDay, show_seconds: bool) -> String {
    if show_seconds {
        format!("{:02}:{:02}:{:02}", tod.hour, tod.minute, tod.second)
    } else {
        format!("{:02}:{:02}", tod.hour, tod.minute)
    }
}
