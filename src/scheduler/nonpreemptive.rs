/*!
 * Non-preemptive Policies
 * FCFS, SPN, Priority and HRRN: pick one ready process and run it to completion
 */

use super::selection::{HighestResponseRatio, LowestPriorityValue, ShortestBurst};
use super::timeline::Timeline;
use super::traits::{Scheduler, SelectionRule};
use super::types::SchedulingPolicy;
use crate::core::types::Tick;
use crate::process::Process;
use tracing::{debug, trace};

/// First come, first served
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

/// Shortest process next
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestProcessNext;

/// Lowest priority value first
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityFirst;

/// Highest response ratio next
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestResponseRatioNext;

impl Scheduler for Fcfs {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    fn run(&self, mut processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process> {
        // Stable: equal arrivals keep input order
        processes.sort_by_key(|p| p.arrival_time);

        let mut now: Tick = 0;
        for p in processes.iter_mut() {
            if p.arrival_time > now {
                trace!(from = now, to = p.arrival_time, "cpu idle");
                now = p.arrival_time;
            }
            now = dispatch(p, now, timeline);
        }

        processes
    }
}

impl Scheduler for ShortestProcessNext {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Spn
    }

    fn run(&self, processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process> {
        run_to_completion(&ShortestBurst, processes, timeline)
    }
}

impl Scheduler for PriorityFirst {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Priority
    }

    fn run(&self, processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process> {
        run_to_completion(&LowestPriorityValue, processes, timeline)
    }
}

impl Scheduler for HighestResponseRatioNext {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Hrrn
    }

    fn run(&self, processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process> {
        run_to_completion(&HighestResponseRatio, processes, timeline)
    }
}

/// Shared dispatch loop for selector policies.
///
/// Among arrived, unfinished processes the one ranked first by `rule` runs to
/// completion; equal ranks go to the earliest input slot. With nothing arrived the
/// clock jumps to the next arrival. Results come back in completion order.
pub(super) fn run_to_completion<R: SelectionRule>(
    rule: &R,
    mut pending: Vec<Process>,
    timeline: &mut Timeline,
) -> Vec<Process> {
    let mut completed = Vec::with_capacity(pending.len());
    let mut now: Tick = 0;

    while !pending.is_empty() {
        let selected = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(now))
            .min_by(|(_, a), (_, b)| rule.compare(a, b, now))
            .map(|(idx, _)| idx);

        let Some(idx) = selected else {
            // Idle until the next arrival
            if let Some(next) = pending.iter().map(|p| p.arrival_time).min() {
                trace!(from = now, to = next, "cpu idle");
                now = next;
            }
            continue;
        };

        let mut process = pending.remove(idx);
        now = dispatch(&mut process, now, timeline);
        completed.push(process);
    }

    completed
}

/// Run `process` for its whole burst starting at `now`; returns the new clock
fn dispatch(process: &mut Process, now: Tick, timeline: &mut Timeline) -> Tick {
    trace!(pid = process.pid, at = now, burst = process.burst_time, "dispatch");

    let ran = process.execute(now, process.burst_time);
    let end = now + ran;
    timeline.record(process.pid, now, end);
    process.finalize(end);

    debug!(
        pid = process.pid,
        completion = process.completion_time,
        waiting = process.waiting_time,
        turnaround = process.turnaround_time,
        "process completed"
    );
    end
}
