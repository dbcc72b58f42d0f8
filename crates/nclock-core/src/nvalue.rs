//! The N-value - subjective hours mapped onto one real 24-hour day
//!
//! N = 24 is the identity (the dilated clock runs at real speed). N > 24
//! slows the dilated clock down, N < 24 speeds it up. The UI clamps N to
//! [MIN_N, MAX_N], so the dilation engine may assume a validated value.

use std::fmt;

use crate::{NClockError, NClockResult};

/// Hours in the reference (real) day
pub const REFERENCE_HOURS: u32 = 24;

/// Smallest selectable N
pub const MIN_N: u32 = 12;

/// Largest selectable N
pub const MAX_N: u32 = 48;

/// A validated N-value, guaranteed to lie in [MIN_N, MAX_N]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NValue(u32);

impl NValue {
    /// The identity N-value (real-time clock)
    pub const REFERENCE: NValue = NValue(REFERENCE_HOURS);

    /// Validate an N-value, rejecting anything outside [MIN_N, MAX_N]
    pub fn new(n: i64) -> NClockResult<Self> {
        if (MIN_N as i64..=MAX_N as i64).contains(&n) {
            Ok(NValue(n as u32))
        } else {
            Err(NClockError::InvalidN(n))
        }
    }

    /// Saturate an out-of-range value to the nearest bound (the slider
    /// boundary behavior)
    pub fn clamped(n: i64) -> Self {
        NValue(n.clamp(MIN_N as i64, MAX_N as i64) as u32)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for NValue {
    fn default() -> Self {
        NValue::REFERENCE
    }
}

impl fmt::Debug for NValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N={}", self.0)
    }
}

impl fmt::Display for NValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
