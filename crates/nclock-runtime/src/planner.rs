//! Precise alarm planning
//!
//! Instead of hoping a polled sample lands on the dilated-second boundary,
//! the planner inverts the dilation transform: for every enabled alarm it
//! computes the real offsets within the current real day at which the
//! alarm's (hour, minute) boundary is crossed, and the controller sleeps a
//! one-shot timer until the earliest one. Offsets use ceiling division so
//! the wakeup lands at or just after the boundary, never before; the
//! sampled check at the wakeup instant therefore observes second zero.
//!
//! The dilated day is anchored to real midnight, so for N > 24 boundaries
//! in the late dilated hours fall past real midnight and are unreachable
//! on every day; they are excluded outright. For N < 24 the dilated day
//! repeats within the real day and each repetition gets its own offset.

use nclock_core::{AlarmId, NValue, RealDuration};
use nclock_state::AlarmRoster;
use nclock_time::{DILATED_DAY_MS, REAL_DAY_MS};

/// The next planned wakeup
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PlannedFiring {
    /// Real time to sleep from `since_midnight` until the boundary
    pub delay: RealDuration,
    /// Alarms whose boundary is crossed at that instant
    pub alarms: Vec<AlarmId>,
}

/// First real millisecond at which the dilated clock has reached `dilated`
#[inline]
fn ceil_undilate(dilated_ms: u64, n: NValue) -> u64 {
    (dilated_ms * n.get() as u64 + 23) / 24
}

/// All real offsets within one real day at which `alarm`'s boundary is
/// crossed, in ascending order
fn day_offsets(hour: u8, minute: u8, n: NValue) -> impl Iterator<Item = u64> {
    let target = (hour as u64 * 3600 + minute as u64 * 60) * 1000;
    (0u64..)
        .map(move |cycle| ceil_undilate(target + cycle * DILATED_DAY_MS, n))
        .take_while(|off| *off < REAL_DAY_MS)
}

/// Compute the next firing after `since_midnight` (strictly after, so a
/// wakeup exactly on a boundary re-plans to the following one).
/// `None` when no enabled alarm has any reachable boundary.
pub fn next_firing(
    roster: &AlarmRoster,
    n: NValue,
    since_midnight: RealDuration,
) -> Option<PlannedFiring> {
    let now = since_midnight.as_millis();

    let mut today: Option<(u64, Vec<AlarmId>)> = None;
    let mut tomorrow: Option<(u64, Vec<AlarmId>)> = None;

    for alarm in roster.iter().filter(|a| a.enabled) {
        let mut first = None;
        let mut next_today = None;
        for off in day_offsets(alarm.hour, alarm.minute, n) {
            if first.is_none() {
                first = Some(off);
            }
            if off > now {
                next_today = Some(off);
                break;
            }
        }
        match (next_today, first) {
            (Some(off), _) => merge(&mut today, off, alarm.id),
            (None, Some(off)) => merge(&mut tomorrow, off, alarm.id),
            // No offset inside the real day at all: unreachable alarm
            (None, None) => {}
        }
    }

    if let Some((off, alarms)) = today {
        return Some(PlannedFiring {
            delay: RealDuration::from_millis(off - now),
            alarms,
        });
    }
    tomorrow.map(|(off, alarms)| PlannedFiring {
        delay: RealDuration::from_millis((REAL_DAY_MS - now) + off),
        alarms,
    })
}

/// Keep the earliest offset, collecting every alarm that shares it
fn merge(slot: &mut Option<(u64, Vec<AlarmId>)>, off: u64, id: AlarmId) {
    match slot {
        Some((best, ids)) if off == *best => ids.push(id),
        Some((best, _)) if off < *best => *slot = Some((off, vec![id])),
        None => *slot = Some((off, vec![id])),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: i64) -> NValue {
        NValue::new(v).unwrap()
    }

    fn roster_with(hour: u8, minute: u8) -> (AlarmRoster, AlarmId) {
        let mut roster = AlarmRoster::new();
        let id = roster.add(hour, minute, "a").unwrap();
        (roster, id)
    }

    #[test]
    fn test_identity_n_plain_offset() {
        // At N=24 a 07:00 alarm fires at real 07:00
        let (roster, id) = roster_with(7, 0);
        let plan = next_firing(&roster, n(24), RealDuration::ZERO).unwrap();
        assert_eq!(plan.delay.as_millis(), 7 * 3600 * 1000);
        assert_eq!(plan.alarms, vec![id]);
    }

    #[test]
    fn test_fast_clock_fires_each_cycle() {
        // At N=12 the dilated day runs twice per real day: 07:00 dilated
        // is reached at real 03:30 and again at real 15:30
        let (roster, _) = roster_with(7, 0);

        let first = next_firing(&roster, n(12), RealDuration::ZERO).unwrap();
        assert_eq!(first.delay.as_millis(), 7 * 3600 * 1000 / 2);

        let after_first = first.delay;
        let second = next_firing(&roster, n(12), after_first).unwrap();
        // Second crossing is one dilated day (12 real hours) later
        assert_eq!(second.delay.as_millis(), 12 * 3600 * 1000);
    }

    #[test]
    fn test_slow_clock_skips_unreachable_hours() {
        // At N=48 the dilated clock only reaches 11:59 before real
        // midnight; a 12:00 alarm is unreachable on every day
        let (roster, _) = roster_with(12, 0);
        assert!(next_firing(&roster, n(48), RealDuration::ZERO).is_none());

        // 11:00 dilated is still reachable, at real 22:00
        let (roster, _) = roster_with(11, 0);
        let plan = next_firing(&roster, n(48), RealDuration::ZERO).unwrap();
        assert_eq!(plan.delay.as_millis(), 22 * 3600 * 1000);
    }

    #[test]
    fn test_wraps_to_tomorrow() {
        // Past today's boundary, the plan wraps to tomorrow's occurrence
        let (roster, _) = roster_with(7, 0);
        let late = RealDuration::from_millis(23 * 3600 * 1000);
        let plan = next_firing(&roster, n(24), late).unwrap();
        assert_eq!(plan.delay.as_millis(), (1 + 7) * 3600 * 1000);
    }

    #[test]
    fn test_strictly_after_now() {
        // Woken exactly on the boundary, the next plan is the following
        // occurrence, not the same instant again
        let (roster, _) = roster_with(7, 0);
        let at_boundary = RealDuration::from_millis(7 * 3600 * 1000);
        let plan = next_firing(&roster, n(24), at_boundary).unwrap();
        assert_eq!(plan.delay.as_millis(), 24 * 3600 * 1000);
    }

    #[test]
    fn test_disabled_alarms_excluded() {
        let (mut roster, id) = roster_with(7, 0);
        roster.toggle(id).unwrap();
        assert!(next_firing(&roster, n(24), RealDuration::ZERO).is_none());
    }

    #[test]
    fn test_simultaneous_boundaries_grouped() {
        let mut roster = AlarmRoster::new();
        let a = roster.add(7, 0, "a").unwrap();
        let b = roster.add(7, 0, "b").unwrap();
        let plan = next_firing(&roster, n(24), RealDuration::ZERO).unwrap();
        assert_eq!(plan.alarms, vec![a, b]);
    }

    proptest::proptest! {
        #[test]
        fn prop_plan_lands_exactly_on_boundary(
            h in 0u8..24,
            m in 0u8..60,
            nv in 12i64..=48,
            now in 0u64..86_400_000u64,
        ) {
            let mut roster = AlarmRoster::new();
            roster.add(h, m, "x").unwrap();

            if let Some(plan) = next_firing(&roster, n(nv), RealDuration::from_millis(now)) {
                proptest::prop_assert!(plan.delay.as_millis() > 0);
                // Wherever the wakeup lands (today or tomorrow), the
                // dilated clock there reads exactly (h, m, 0)
                let fire_at = (now + plan.delay.as_millis()) % REAL_DAY_MS;
                let tod = nclock_time::dilated_time_of_day(
                    RealDuration::from_millis(fire_at),
                    n(nv),
                );
                proptest::prop_assert_eq!((tod.hour, tod.minute, tod.second), (h, m, 0));
            }
        }
    }

    #[test]
    fn test_ceil_never_early() {
        // The wakeup instant's dilated clock must already read the target
        // second, for every N
        for nv in 12..=48 {
            let nv = n(nv);
            let (roster, _) = roster_with(7, 0);
            let plan = next_firing(&roster, nv, RealDuration::ZERO).unwrap();
            let tod = nclock_time::dilated_time_of_day(plan.delay, nv);
            assert_eq!((tod.hour, tod.minute, tod.second), (7, 0, 0), "N={}", nv);
        }
    }
}
