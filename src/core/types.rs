/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Discrete simulated clock value (one unit per tick)
pub type Tick = u64;

/// Priority level (lower value = more important)
pub type Priority = i32;

/// Common result type for scheduling operations
pub type SchedResult<T> = Result<T, super::errors::SchedulerError>;
