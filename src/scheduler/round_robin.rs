/*!
 * Round Robin
 * Fixed quantum per dispatch over a cyclic FIFO ready queue
 */

use super::ready::ArrivalGate;
use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::{Quantum, SchedulingPolicy};
use crate::core::types::Tick;
use crate::process::Process;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Round Robin scheduler
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin(self.quantum)
    }

    /// The ready queue holds input slots; results stay in slot order
    fn run(&self, mut processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process> {
        let total = processes.len();
        let mut gate = ArrivalGate::new(total);
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(total);
        let mut finished = 0;
        let mut now: Tick = 0;
        let mut idle = false;

        while finished < total {
            gate.admit(&processes, now, &mut ready);

            let Some(idx) = ready.pop_front() else {
                if !idle {
                    trace!(from = now, "cpu idle");
                    idle = true;
                }
                now += 1;
                continue;
            };
            idle = false;

            let process = &mut processes[idx];
            trace!(pid = process.pid, at = now, remaining = process.remaining_time, "dispatch");
            let ran = process.execute(now, self.quantum.get());
            timeline.record(process.pid, now, now + ran);
            now += ran;

            // Arrivals during the slice queue up ahead of the preempted process
            gate.admit(&processes, now, &mut ready);

            let process = &mut processes[idx];
            if process.is_complete() {
                process.finalize(now);
                finished += 1;
                debug!(
                    pid = process.pid,
                    completion = process.completion_time,
                    waiting = process.waiting_time,
                    "process completed"
                );
            } else {
                ready.push_back(idx);
            }
        }

        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rr(q: Tick) -> RoundRobin {
        RoundRobin::new(Quantum::new(q).unwrap())
    }

    #[test]
    fn test_new_arrival_queues_before_preempted_process() {
        // P1 runs 0-2; P2 arrives at 1 and must run before P1's second slice
        let mut timeline = Timeline::new();
        rr(2).run(
            vec![Process::new(1, 0, 4, 0), Process::new(2, 1, 2, 0)],
            &mut timeline,
        );

        let pids: Vec<u32> = timeline.slices().iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![1, 2, 1]);
    }

    #[test]
    fn test_single_process_is_not_split() {
        let mut timeline = Timeline::new();
        let done = rr(1).run(vec![Process::new(1, 0, 5, 0)], &mut timeline);
        assert_eq!(done[0].completion_time, 5);
        assert_eq!(timeline.slices().len(), 1);
    }

    #[test]
    fn test_quantum_larger_than_burst() {
        let mut timeline = Timeline::new();
        let done = rr(10).run(
            vec![Process::new(1, 0, 3, 0), Process::new(2, 0, 4, 0)],
            &mut timeline,
        );
        assert_eq!(done[0].completion_time, 3);
        assert_eq!(done[1].completion_time, 7);
        assert_eq!(done[1].waiting_time, 3);
    }
}
