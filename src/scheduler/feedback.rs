/*!
 * Multilevel Feedback Queue
 * Geometric quanta per level with demotion on quantum expiry
 */

use super::ready::ArrivalGate;
use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::{FeedbackConfig, SchedulingPolicy};
use crate::core::types::Tick;
use crate::process::Process;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Multilevel feedback queue scheduler
///
/// New arrivals enter level 0. A process that uses up its level's quantum without
/// finishing drops one level; the last level re-queues in place. With a single
/// level this behaves exactly like Round Robin.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackScheduler {
    config: FeedbackConfig,
}

impl FeedbackScheduler {
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> FeedbackConfig {
        self.config
    }
}

impl Scheduler for FeedbackScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Feedback(self.config)
    }

    /// Queues hold input slots; results stay in slot order
    fn run(&self, mut processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process> {
        let total = processes.len();
        let levels = self.config.levels() as usize;
        let lowest = levels - 1;

        let mut gate = ArrivalGate::new(total);
        let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); levels];
        let mut finished = 0;
        let mut now: Tick = 0;
        let mut idle = false;

        while finished < total {
            gate.admit(&processes, now, &mut queues[0]);

            let next = queues
                .iter_mut()
                .enumerate()
                .find_map(|(level, queue)| queue.pop_front().map(|idx| (level, idx)));

            let Some((level, idx)) = next else {
                if !idle {
                    trace!(from = now, "cpu idle");
                    idle = true;
                }
                now += 1;
                continue;
            };
            idle = false;

            let process = &mut processes[idx];
            trace!(
                pid = process.pid,
                at = now,
                queue_level = level,
                remaining = process.remaining_time,
                "dispatch"
            );
            let ran = process.execute(now, self.config.quantum(level));
            timeline.record(process.pid, now, now + ran);
            now += ran;

            gate.admit(&processes, now, &mut queues[0]);

            let process = &mut processes[idx];
            if process.is_complete() {
                process.finalize(now);
                finished += 1;
                debug!(
                    pid = process.pid,
                    completion = process.completion_time,
                    waiting = process.waiting_time,
                    queue_level = level,
                    "process completed"
                );
            } else {
                let target = (level + 1).min(lowest);
                if target != level {
                    trace!(pid = process.pid, from = level, to = target, "demoted");
                }
                queues[target].push_back(idx);
            }
        }

        processes
    }
}
