/*!
 * Process Types
 * The simulated process record and its per-run bookkeeping
 */

use crate::core::types::{Pid, Priority, Tick};
use serde::{Deserialize, Serialize};

/// One schedulable unit and the metrics accumulated for it during a run
///
/// The static inputs (`pid`, `arrival_time`, `burst_time`, `priority`) never change
/// once a run starts. Everything else is reset before each run by [`Process::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    /// Lower value wins; only the Priority policy looks at it
    pub priority: Priority,

    pub remaining_time: Tick,
    pub executed_time: Tick,

    pub start_time: Tick,
    pub completion_time: Tick,
    pub turnaround_time: Tick,
    pub waiting_time: Tick,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Tick, burst_time: Tick, priority: Priority) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            executed_time: 0,
            start_time: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Clear derived and output fields so the record can start a fresh run
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.executed_time = 0;
        self.start_time = 0;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
    }

    /// Whether the process has arrived by `now`
    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival_time <= now
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Run the process for up to `budget` ticks starting at `now`.
    ///
    /// Records `start_time` on the very first dispatch and returns the number of
    /// ticks actually consumed (never more than what is left).
    pub fn execute(&mut self, now: Tick, budget: Tick) -> Tick {
        if self.executed_time == 0 {
            self.start_time = now;
        }

        let ran = budget.min(self.remaining_time);
        self.remaining_time -= ran;
        self.executed_time += ran;
        ran
    }

    /// Write the output metrics once the last tick of the burst has run
    pub fn finalize(&mut self, completion_time: Tick) {
        debug_assert!(self.is_complete());
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Time between arrival and first dispatch, 0 before the first dispatch
    #[inline]
    pub fn response_time(&self) -> Tick {
        self.start_time.saturating_sub(self.arrival_time)
    }
}

/// Fresh, reset copies of the caller's records for one policy run
pub(crate) fn fresh_copies(processes: &[Process]) -> Vec<Process> {
    processes
        .iter()
        .cloned()
        .map(|mut p| {
            p.reset();
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_has_full_remaining_time() {
        let p = Process::new(1, 2, 5, 3);
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.executed_time, 0);
        assert!(!p.is_complete());
    }

    #[test]
    fn test_start_time_recorded_once() {
        let mut p = Process::new(1, 0, 5, 0);
        assert_eq!(p.execute(2, 3), 3);
        assert_eq!(p.start_time, 2);

        assert_eq!(p.execute(9, 3), 2);
        assert_eq!(p.start_time, 2);
        assert!(p.is_complete());
    }

    #[test]
    fn test_finalize_metrics() {
        let mut p = Process::new(4, 3, 6, 3);
        p.execute(16, 6);
        p.finalize(22);
        assert_eq!(p.turnaround_time, 19);
        assert_eq!(p.waiting_time, 13);
        assert_eq!(p.response_time(), 13);
    }

    #[test]
    fn test_response_time_before_dispatch() {
        let p = Process::new(1, 5, 3, 0);
        assert_eq!(p.response_time(), 0);
    }

    #[test]
    fn test_reset_restores_burst() {
        let mut p = Process::new(1, 0, 4, 0);
        p.execute(0, 4);
        p.finalize(4);
        p.reset();
        assert_eq!(p, Process::new(1, 0, 4, 0));
    }
}
