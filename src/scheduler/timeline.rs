/*!
 * Execution Timeline
 * Dispatch slices recorded during a run, and the run outcome
 */

use super::stats::ScheduleStats;
use super::types::SchedulingPolicy;
use crate::core::types::{Pid, Tick};
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time given to a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Tick,
    pub end: Tick,
}

impl Slice {
    #[inline]
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered list of dispatch slices for a single run
///
/// Back-to-back slices of the same process are merged, so an SRT process that
/// keeps the CPU for several ticks shows up as one slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `pid` held the CPU over `[start, end)`
    pub fn record(&mut self, pid: Pid, start: Tick, end: Tick) {
        debug_assert!(start <= end);
        if start == end {
            return;
        }

        if let Some(last) = self.slices.last_mut() {
            debug_assert!(last.end <= start, "slices must be recorded in clock order");
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }

        self.slices.push(Slice { pid, start, end });
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Clock value when the last slice ended
    pub fn makespan(&self) -> Tick {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total ticks the CPU spent running processes
    pub fn busy_time(&self) -> Tick {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Ticks between 0 and the makespan with nothing running
    pub fn idle_time(&self) -> Tick {
        self.makespan() - self.busy_time()
    }

    /// Number of times the CPU moved from one process to a different one
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count()
    }

    /// Slices belonging to one process
    pub fn slices_for(&self, pid: Pid) -> impl Iterator<Item = &Slice> + '_ {
        self.slices.iter().filter(move |s| s.pid == pid)
    }
}

/// Result of simulating one policy over one process set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub policy: SchedulingPolicy,
    /// Completion order for FCFS/SPN/Priority/HRRN, input order otherwise
    pub processes: Vec<Process>,
    pub timeline: Timeline,
}

impl Outcome {
    pub fn new(policy: SchedulingPolicy, processes: Vec<Process>, timeline: Timeline) -> Self {
        Self {
            policy,
            processes,
            timeline,
        }
    }

    pub fn stats(&self) -> ScheduleStats {
        ScheduleStats::from_outcome(self)
    }

    /// Look up a finished process by id
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}
