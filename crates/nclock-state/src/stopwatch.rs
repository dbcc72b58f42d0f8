//! Stopwatch accumulator
//!
//! Elapsed time is accumulated in *real* milliseconds across run segments;
//! dilation is applied only when a total or lap is read. N can therefore
//! change mid-run and the rescale applies retroactively to the entire
//! elapsed real duration, never rewriting past accumulation.
//!
//! All operations take `now` explicitly; the accumulator never reads a
//! clock itself. Operations invoked outside their valid state are defined
//! no-ops.

use nclock_core::{DilatedDuration, NValue, RealDuration, WallInstant};
use nclock_time::dilate;

const MAX_LAPS: usize = 99;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StopwatchPhase {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Default)]
pub struct Stopwatch {
    phase: StopwatchPhase,
    accumulated: RealDuration,
    running_since: Option<WallInstant>,
    laps: Vec<DilatedDuration>,
    last_lap_total: DilatedDuration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Stopwatch::default()
    }

    #[inline]
    pub fn phase(&self) -> StopwatchPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == StopwatchPhase::Running
    }

    /// True once any time has been accumulated or a segment is active;
    /// distinguishes stopped-with-history from the zero state.
    pub fn has_history(&self) -> bool {
        self.is_running() || self.accumulated > RealDuration::ZERO
    }

    /// Lap intervals in chronological recording order
    #[inline]
    pub fn laps(&self) -> &[DilatedDuration] {
        &self.laps
    }

    /// Begin a run segment. Ignored while already running.
    pub fn start(&mut self, now: WallInstant) {
        if self.is_running() {
            return;
        }
        self.running_since = Some(now);
        self.phase = StopwatchPhase::Running;
    }

    /// Close the active segment, retaining the accumulated time.
    /// Ignored while stopped.
    pub fn stop(&mut self, now: WallInstant) {
        let Some(since) = self.running_since.take() else {
            return;
        };
        self.accumulated += now - since;
        self.phase = StopwatchPhase::Stopped;
    }

    /// Total elapsed real time: completed segments plus the active one
    pub fn total_real(&self, now: WallInstant) -> RealDuration {
        match self.running_since {
            Some(since) => self.accumulated + (now - since),
            None => self.accumulated,
        }
    }

    /// Total elapsed time on the dilated clock, recomputed from the full
    /// real accumulation so a live N change rescales retroactively
    pub fn total_dilated(&self, now: WallInstant, n: NValue) -> DilatedDuration {
        dilate(self.total_real(now), n)
    }

    /// Record a lap: appends the dilated *interval* since the previous lap.
    /// Returns the interval, or None while stopped or at the lap cap.
    pub fn lap(&mut self, now: WallInstant, n: NValue) -> Option<DilatedDuration> {
        if !self.is_running() || self.laps.len() >= MAX_LAPS {
            return None;
        }
        let total = self.total_dilated(now, n);
        let interval = total - self.last_lap_total;
        self.laps.push(interval);
        self.last_lap_total = total;
        Some(interval)
    }

    /// Clear accumulation and laps. Valid only when stopped with history;
    /// returns whether anything was cleared.
    pub fn reset(&mut self) -> bool {
        if self.is_running() || !self.has_history() {
            return false;
        }
        self.accumulated = RealDuration::ZERO;
        self.laps.clear();
        self.last_lap_total = DilatedDuration::ZERO;
        true
    }
}
