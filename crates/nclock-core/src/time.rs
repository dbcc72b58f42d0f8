//! Time primitives for N-Clock
//!
//! N-Clock distinguishes two kinds of durations:
//! - real durations: wall-clock milliseconds as the host measures them
//! - dilated durations: real durations rescaled by the current N-value
//!
//! All bookkeeping is stored in real milliseconds; dilated values are
//! recomputed from real ones on every read because N may change at any
//! moment. A dilated duration is therefore a display-side quantity and is
//! never persisted.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Wall-clock instant - milliseconds since an arbitrary fixed epoch.
/// Monotone non-decreasing; supplied by a `WallClock` implementation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WallInstant(pub u64);

impl WallInstant {
    pub const ZERO: WallInstant = WallInstant(0);

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        WallInstant(millis)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl Add<RealDuration> for WallInstant {
    type Output = WallInstant;

    #[inline]
    fn add(self, rhs: RealDuration) -> Self::Output {
        WallInstant(self.0.saturating_add(rhs.0))
    }
}

impl Sub<WallInstant> for WallInstant {
    type Output = RealDuration;

    #[inline]
    fn sub(self, rhs: WallInstant) -> Self::Output {
        RealDuration(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for WallInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}ms", self.0)
    }
}

/// Real (undilated) duration in milliseconds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RealDuration(pub u64);

impl RealDuration {
    pub const ZERO: RealDuration = RealDuration(0);

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        RealDuration(millis)
    }

    #[inline]
    pub fn from_secs(secs: u64) -> Self {
        RealDuration(secs * 1000)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn saturating_sub(self, rhs: RealDuration) -> Self {
        RealDuration(self.0.saturating_sub(rhs.0))
    }

    #[inline]
    pub fn to_std(self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0)
    }
}

impl Add for RealDuration {
    type Output = RealDuration;

    #[inline]
    fn add(self, rhs: RealDuration) -> Self::Output {
        RealDuration(self.0 + rhs.0)
    }
}

impl AddAssign for RealDuration {
    #[inline]
    fn add_assign(&mut self, rhs: RealDuration) {
        self.0 += rhs.0;
    }
}

impl fmt::Debug for RealDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Dilated duration in milliseconds - a real duration rescaled by 24/N
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DilatedDuration(pub u64);

impl DilatedDuration {
    pub const ZERO: DilatedDuration = DilatedDuration(0);

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        DilatedDuration(millis)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn saturating_sub(self, rhs: DilatedDuration) -> Self {
        DilatedDuration(self.0.saturating_sub(rhs.0))
    }
}

impl Add for DilatedDuration {
    type Output = DilatedDuration;

    #[inline]
    fn add(self, rhs: DilatedDuration) -> Self::Output {
        DilatedDuration(self.0 + rhs.0)
    }
}

impl Sub for DilatedDuration {
    type Output = DilatedDuration;

    #[inline]
    fn sub(self, rhs: DilatedDuration) -> Self::Output {
        DilatedDuration(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for DilatedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}ms", self.0)
    }
}

/// A dilated time of day, decomposed into clock components.
/// `hour` is always in 0..24, `minute` and `second` in 0..60.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60);
        TimeOfDay {
            hour,
            minute,
            second,
        }
    }

    /// True at the first sampled instant of a dilated minute
    #[inline]
    pub fn is_minute_boundary(self) -> bool {
        self.second == 0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_arithmetic() {
        let a = WallInstant::from_millis(1000);
        let b = WallInstant::from_millis(1500);

        assert_eq!(b - a, RealDuration::from_millis(500));
        // Saturating: instants never produce negative durations
        assert_eq!(a - b, RealDuration::ZERO);
        assert_eq!(a + RealDuration::from_millis(250), WallInstant::from_millis(1250));
    }

    #[test]
    fn test_duration_accumulation() {
        let mut total = RealDuration::ZERO;
        total += RealDuration::from_secs(2);
        total += RealDuration::from_millis(500);
        assert_eq!(total.as_millis(), 2500);
    }

    #[test]
    fn test_time_of_day_display() {
        let tod = TimeOfDay::new(7, 5, 0);
        assert_eq!(tod.to_string(), "07:05:00");
        assert!(tod.is_minute_boundary());
        assert!(!TimeOfDay::new(7, 5, 1).is_minute_boundary());
    }
}
