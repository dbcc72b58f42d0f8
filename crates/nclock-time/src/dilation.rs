//! Time dilation transform
//!
//! The dilated clock advances at 24/N of real speed: a real duration `d`
//! corresponds to a dilated duration `d * 24 / N`. All arithmetic is done
//! in integer milliseconds; for the UI-clamped N range the rounding error
//! per conversion is below one millisecond.
//!
//! The dilated day is anchored to the *real* local midnight, not to the
//! dilated clock's own rollover. For N > 24 the dilated clock therefore
//! never reaches its late hours within one real day, and for N < 24 it
//! wraps more than once per real day. This is an intentional property of
//! the model and must be preserved.

use nclock_core::{DilatedDuration, NValue, RealDuration, TimeOfDay, REFERENCE_HOURS};

/// One full dilated 24-hour cycle, in dilated milliseconds
pub const DILATED_DAY_MS: u64 = 24 * 3600 * 1000;

/// One real day, in real milliseconds
pub const REAL_DAY_MS: u64 = 24 * 3600 * 1000;

/// Rescale a real duration into the dilated ("N-world") duration
#[inline]
pub fn dilate(real: RealDuration, n: NValue) -> DilatedDuration {
    DilatedDuration::from_millis(real.as_millis() * REFERENCE_HOURS as u64 / n.get() as u64)
}

/// Inverse transform: the real duration that dilates to `dilated`
#[inline]
pub fn undilate(dilated: DilatedDuration, n: NValue) -> RealDuration {
    RealDuration::from_millis(dilated.as_millis() * n.get() as u64 / REFERENCE_HOURS as u64)
}

/// Length of one full dilated day cycle measured in real milliseconds
#[inline]
pub fn dilated_day_real(n: NValue) -> RealDuration {
    undilate(DilatedDuration::from_millis(DILATED_DAY_MS), n)
}

/// Decompose a real offset since local midnight into dilated clock
/// components. Identity transform at N = 24.
pub fn dilated_time_of_day(since_midnight: RealDuration, n: NValue) -> TimeOfDay {
    let total_secs = dilate(since_midnight, n).as_millis() / 1000;
    TimeOfDay {
        hour: ((total_secs / 3600) % 24) as u8,
        minute: ((total_secs % 3600) / 60) as u8,
        second: (total_secs % 60) as u8,
    }
}

/// How many complete dilated day cycles have elapsed since real midnight.
/// Zero for N >= 24; for N < 24 the dilated clock wraps within the real
/// day and this distinguishes the cycles for once-per-cycle alarm firing.
#[inline]
pub fn dilated_cycle(since_midnight: RealDuration, n: NValue) -> u64 {
    dilate(since_midnight, n).as_millis() / DILATED_DAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn n(v: i64) -> NValue {
        NValue::new(v).unwrap()
    }

    #[test]
    fn test_identity_at_reference_n() {
        // Mandatory regression check: N=24 is the identity transform
        for ms in [0u64, 999, 1000, 3_600_000, 45_296_000, 86_399_999] {
            let real = RealDuration::from_millis(ms);
            assert_eq!(dilate(real, NValue::REFERENCE).as_millis(), ms);

            let tod = dilated_time_of_day(real, NValue::REFERENCE);
            let secs = ms / 1000;
            assert_eq!(tod.hour as u64, (secs / 3600) % 24);
            assert_eq!(tod.minute as u64, (secs % 3600) / 60);
            assert_eq!(tod.second as u64, secs % 60);
        }
    }

    #[test]
    fn test_dilation_factors() {
        // N=12 doubles the clock speed, N=48 halves it
        let real = RealDuration::from_secs(5);
        assert_eq!(dilate(real, n(12)).as_millis(), 10_000);
        assert_eq!(dilate(real, n(48)).as_millis(), 2_500);
    }

    #[test]
    fn test_undilate_inverse() {
        let d = DilatedDuration::from_millis(25_200_000); // 07:00 dilated
        assert_eq!(undilate(d, n(24)).as_millis(), 25_200_000);
        assert_eq!(undilate(d, n(12)).as_millis(), 12_600_000);
        assert_eq!(undilate(d, n(48)).as_millis(), 50_400_000);
    }

    #[test]
    fn test_day_anchored_to_real_midnight() {
        // At N=48 the dilated clock covers only 12 dilated hours per real
        // day; just before real midnight it still reads 11:59.
        let just_before_midnight = RealDuration::from_millis(REAL_DAY_MS - 1000);
        let tod = dilated_time_of_day(just_before_midnight, n(48));
        assert_eq!((tod.hour, tod.minute), (11, 59));

        // At N=12 the dilated day completes twice; half the real day in,
        // the dilated clock has already wrapped back to midnight.
        let half_day = RealDuration::from_millis(REAL_DAY_MS / 2);
        let tod = dilated_time_of_day(half_day, n(12));
        assert_eq!((tod.hour, tod.minute, tod.second), (0, 0, 0));
        assert_eq!(dilated_cycle(half_day, n(12)), 1);
        assert_eq!(dilated_cycle(RealDuration::from_millis(REAL_DAY_MS / 2 - 1), n(12)), 0);
    }

    #[test]
    fn test_dilated_day_real_length() {
        assert_eq!(dilated_day_real(n(24)).as_millis(), REAL_DAY_MS);
        assert_eq!(dilated_day_real(n(12)).as_millis(), REAL_DAY_MS / 2);
        assert_eq!(dilated_day_real(n(48)).as_millis(), REAL_DAY_MS * 2);
    }

    proptest! {
        #[test]
        fn prop_dilate_linear(a in 0u64..500_000_000, b in 0u64..500_000_000, nv in 12i64..=48) {
            let nv = n(nv);
            let whole = dilate(RealDuration::from_millis(a + b), nv).as_millis();
            let parts = dilate(RealDuration::from_millis(a), nv).as_millis()
                + dilate(RealDuration::from_millis(b), nv).as_millis();
            // Integer truncation loses at most 1ms per operand
            prop_assert!(whole >= parts && whole - parts <= 1);
        }

        #[test]
        fn prop_dilate_monotone(a in 0u64..500_000_000, d in 0u64..1_000_000, nv in 12i64..=48) {
            let nv = n(nv);
            prop_assert!(
                dilate(RealDuration::from_millis(a + d), nv)
                    >= dilate(RealDuration::from_millis(a), nv)
            );
        }

        #[test]
        fn prop_time_of_day_components_in_range(ms in 0u64..=REAL_DAY_MS, nv in 12i64..=48) {
            let tod = dilated_time_of_day(RealDuration::from_millis(ms), n(nv));
            prop_assert!(tod.hour < 24);
            prop_assert!(tod.minute < 60);
            prop_assert!(tod.second < 60);
        }

        #[test]
        fn prop_undilate_roundtrip(ms in 0u64..500_000_000, nv in 12i64..=48) {
            let nv = n(nv);
            let there = dilate(RealDuration::from_millis(ms), nv);
            let back = undilate(there, nv).as_millis();
            // One truncation each way
            prop_assert!(back <= ms && ms - back <= (nv.get() as u64 / 24) + 2);
        }
    }
}
