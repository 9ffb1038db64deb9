/*!
 * Scheduler Module
 * CPU scheduling policies over a static, in-memory process set
 */

mod feedback;
mod nonpreemptive;
mod ready;
mod round_robin;
pub mod selection;
mod srt;
pub mod stats;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use feedback::FeedbackScheduler;
pub use nonpreemptive::{Fcfs, HighestResponseRatioNext, PriorityFirst, ShortestProcessNext};
pub use round_robin::RoundRobin;
pub use selection::response_ratio;
pub use srt::ShortestRemainingTime;
pub use stats::ScheduleStats;
pub use timeline::{Outcome, Slice, Timeline};
pub use traits::{Scheduler, SelectionRule};
pub use types::{FeedbackConfig, Quantum, SchedulingPolicy, SimulationConfig};

use crate::core::types::{SchedResult, Tick};
use crate::process::Process;

/// Simulate `policy` over an independent copy of `processes`
pub fn simulate(policy: &SchedulingPolicy, processes: &[Process]) -> SchedResult<Outcome> {
    policy.scheduler().simulate(processes)
}

/// First come, first served; results in completion order
pub fn fcfs(processes: &[Process]) -> SchedResult<Vec<Process>> {
    Fcfs.simulate(processes).map(Outcome::into_processes)
}

/// Shortest process next; results in completion order
pub fn spn(processes: &[Process]) -> SchedResult<Vec<Process>> {
    ShortestProcessNext
        .simulate(processes)
        .map(Outcome::into_processes)
}

/// Non-preemptive priority; results in completion order
pub fn priority(processes: &[Process]) -> SchedResult<Vec<Process>> {
    PriorityFirst.simulate(processes).map(Outcome::into_processes)
}

/// Highest response ratio next; results in completion order
pub fn hrrn(processes: &[Process]) -> SchedResult<Vec<Process>> {
    HighestResponseRatioNext
        .simulate(processes)
        .map(Outcome::into_processes)
}

/// Shortest remaining time; results in input order
pub fn srt(processes: &[Process]) -> SchedResult<Vec<Process>> {
    ShortestRemainingTime
        .simulate(processes)
        .map(Outcome::into_processes)
}

/// Round Robin with `quantum` ticks per dispatch; results in input order
pub fn round_robin(processes: &[Process], quantum: Tick) -> SchedResult<Vec<Process>> {
    RoundRobin::new(Quantum::new(quantum)?)
        .simulate(processes)
        .map(Outcome::into_processes)
}

/// Multilevel feedback queue; results in input order
pub fn feedback(processes: &[Process], levels: u32, quantum_base: Tick) -> SchedResult<Vec<Process>> {
    FeedbackScheduler::new(FeedbackConfig::new(levels, quantum_base)?)
        .simulate(processes)
        .map(Outcome::into_processes)
}
