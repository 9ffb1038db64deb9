/*!
 * Scheduler Traits
 * Interface definitions shared by every scheduling policy
 */

use super::timeline::{Outcome, Timeline};
use super::types::SchedulingPolicy;
use crate::core::types::{SchedResult, Tick};
use crate::monitoring::generate_run_id;
use crate::process::types::fresh_copies;
use crate::process::{validate_processes, Process};
use std::cmp::Ordering;
use tracing::{info, info_span};

/// A scheduling policy that can simulate a process set to completion
pub trait Scheduler {
    /// Policy this scheduler implements
    fn policy(&self) -> SchedulingPolicy;

    /// Run the policy over already-validated, freshly reset records.
    ///
    /// Must finalize every process and record each dispatch slice in `timeline`.
    fn run(&self, processes: Vec<Process>, timeline: &mut Timeline) -> Vec<Process>;

    /// Validate the input, then simulate over an independent copy of it
    fn simulate(&self, processes: &[Process]) -> SchedResult<Outcome> {
        validate_processes(processes)?;

        let policy = self.policy();
        let span = info_span!(
            "simulate",
            run_id = %generate_run_id(),
            policy = %policy,
            processes = processes.len()
        );
        let _entered = span.enter();

        let mut timeline = Timeline::new();
        let finished = self.run(fresh_copies(processes), &mut timeline);
        let outcome = Outcome::new(policy, finished, timeline);

        let stats = outcome.stats();
        info!(
            makespan = stats.makespan,
            idle = stats.idle_time,
            context_switches = stats.context_switches,
            avg_waiting = stats.average_waiting,
            avg_turnaround = stats.average_turnaround,
            "simulation complete"
        );

        Ok(outcome)
    }
}

/// Selection rule for the non-preemptive dispatch loop
///
/// `compare` orders two ready processes at clock `now`; `Ordering::Less` means
/// `a` should be dispatched before `b`. Equal candidates fall back to input order.
pub trait SelectionRule {
    fn compare(&self, a: &Process, b: &Process, now: Tick) -> Ordering;
}
