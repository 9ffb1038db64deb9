/*!
 * CPU Scheduling Simulator Library
 * Classical scheduling disciplines over an in-memory process set
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{SchedulerError, SerializableError};
pub use crate::core::types::{Pid, Priority, SchedResult, Tick};
pub use monitoring::init_tracing;
pub use process::Process;
pub use scheduler::{
    simulate, FeedbackConfig, Outcome, Quantum, ScheduleStats, Scheduler, SchedulingPolicy,
    SimulationConfig, Timeline,
};
