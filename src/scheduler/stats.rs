/*!
 * Schedule Statistics
 * Aggregate metrics over a finished run
 */

use super::timeline::Outcome;
use crate::core::types::Tick;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Averages and CPU utilisation for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub processes: usize,
    pub average_waiting: f64,
    pub average_turnaround: f64,
    pub average_response: f64,
    pub makespan: Tick,
    pub busy_time: Tick,
    pub idle_time: Tick,
    pub context_switches: usize,
    /// Completed processes per tick of makespan
    pub throughput: f64,
}

impl ScheduleStats {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let count = outcome.processes.len();
        if count == 0 {
            return Self::default();
        }

        // Summed as f64: per-process values fit in Tick but their total may not
        let mean = |metric: fn(&Process) -> Tick| {
            outcome.processes.iter().map(|p| metric(p) as f64).sum::<f64>() / count as f64
        };

        let timeline = &outcome.timeline;
        let makespan = timeline.makespan();

        Self {
            processes: count,
            average_waiting: mean(|p| p.waiting_time),
            average_turnaround: mean(|p| p.turnaround_time),
            average_response: mean(Process::response_time),
            makespan,
            busy_time: timeline.busy_time(),
            idle_time: timeline.idle_time(),
            context_switches: timeline.context_switches(),
            throughput: if makespan == 0 {
                0.0
            } else {
                count as f64 / makespan as f64
            },
        }
    }

    /// Fraction of the makespan the CPU was busy
    pub fn utilization(&self) -> f64 {
        if self.makespan == 0 {
            0.0
        } else {
            self.busy_time as f64 / self.makespan as f64
        }
    }
}
