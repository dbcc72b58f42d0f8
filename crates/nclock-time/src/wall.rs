//! Wall clock seam
//!
//! The engine never reads the host clock directly; it is handed a
//! `WallClock`. `SystemClock` is the production implementation;
//! `ManualClock` drives tests deterministically.

use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use nclock_core::{RealDuration, WallInstant};

use crate::dilation::REAL_DAY_MS;

/// Host clock interface
pub trait WallClock: Send + Sync {
    /// Milliseconds since an arbitrary fixed epoch, monotone non-decreasing
    fn now(&self) -> WallInstant;

    /// Real milliseconds elapsed since the local calendar day began.
    /// Wraps at the real local midnight; the dilated day is anchored here.
    fn since_local_midnight(&self) -> RealDuration;
}

/// Production clock: monotonic instants plus the host's local-date boundary
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn now(&self) -> WallInstant {
        WallInstant::from_millis(self.origin.elapsed().as_millis() as u64)
    }

    fn since_local_midnight(&self) -> RealDuration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = now.as_secs() as libc::time_t;

        let mut tm = MaybeUninit::<libc::tm>::zeroed();
        // SAFETY: secs points to a valid time_t and tm to writable storage;
        // localtime_r fills tm and does not retain either pointer.
        let tm = unsafe {
            libc::localtime_r(&secs, tm.as_mut_ptr());
            tm.assume_init()
        };

        let since = (tm.tm_hour as u64 * 3600 + tm.tm_min as u64 * 60 + tm.tm_sec as u64) * 1000
            + u64::from(now.subsec_millis());
        RealDuration::from_millis(since)
    }
}

/// Deterministic test clock advanced by hand
pub struct ManualClock {
    now_ms: AtomicU64,
    midnight_ms: AtomicU64,
}

impl ManualClock {
    /// Start at epoch zero, at the local midnight boundary
    pub fn new() -> Self {
        ManualClock {
            now_ms: AtomicU64::new(0),
            midnight_ms: AtomicU64::new(0),
        }
    }

    /// Start with the given offset into the local day
    pub fn at_time_of_day(since_midnight: RealDuration) -> Self {
        ManualClock {
            now_ms: AtomicU64::new(0),
            midnight_ms: AtomicU64::new(since_midnight.as_millis()),
        }
    }

    pub fn advance(&self, d: RealDuration) {
        self.now_ms.fetch_add(d.as_millis(), Ordering::SeqCst);
        self.midnight_ms.fetch_add(d.as_millis(), Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for ManualClock {
    fn now(&self) -> WallInstant {
        WallInstant::from_millis(self.now_ms.load(Ordering::SeqCst))
    }

    fn since_local_midnight(&self) -> RealDuration {
        RealDuration::from_millis(self.midnight_ms.load(Ordering::SeqCst) % REAL_DAY_MS)
    }
}
