/*!
 * Shortest Remaining Time
 * Preemptive SPN re-evaluated every tick
 */

use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::SchedulingPolicy;
use crate::core::types::Tick;
use crate::process::Process;
use tracing::{debug, trace};

/// Preemptive shortest-remaining-time scheduler with 1-tick slices
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl Scheduler for ShortestRemainingTime {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Srt
    }

    /// Results stay in input slot order
    fn run(&self, mut processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process> {
        let total = processes.len();
        let mut finished = 0;
        let mut now: Tick = 0;
        let mut idle = false;

        while finished < total {
            // min_by_key keeps the first minimum, so ties go to the lowest slot
            let candidate = processes
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_complete() && p.has_arrived(now))
                .min_by_key(|(_, p)| p.remaining_time)
                .map(|(idx, _)| idx);

            let Some(idx) = candidate else {
                if !idle {
                    trace!(from = now, "cpu idle");
                    idle = true;
                }
                now += 1;
                continue;
            };
            idle = false;

            let process = &mut processes[idx];
            trace!(pid = process.pid, at = now, remaining = process.remaining_time, "tick");
            process.execute(now, 1);
            timeline.record(process.pid, now, now + 1);
            now += 1;

            if process.is_complete() {
                process.finalize(now);
                finished += 1;
                debug!(
                    pid = process.pid,
                    completion = process.completion_time,
                    waiting = process.waiting_time,
                    "process completed"
                );
            }
        }

        processes
    }
}
