/*!
 * Simulation Limits and Defaults
 *
 * Centralized location for default parameters and hard bounds.
 */

use super::types::Tick;

// =============================================================================
// ROUND ROBIN
// =============================================================================

/// Default Round Robin quantum (3 ticks)
/// Matches the reference workload run
pub const DEFAULT_QUANTUM: Tick = 3;

// =============================================================================
// FEEDBACK QUEUE
// =============================================================================

/// Default number of feedback levels for the "FB-2i" configuration
pub const DEFAULT_FEEDBACK_LEVELS: u32 = 3;

/// Default base quantum for feedback levels (level 0 gets this many ticks)
pub const DEFAULT_QUANTUM_BASE: Tick = 1;

/// Upper bound on feedback levels
/// The per-level quantum is `base << level`, so the shift must stay inside `Tick`
pub const MAX_FEEDBACK_LEVELS: u32 = Tick::BITS;

// =============================================================================
// OBSERVABILITY
// =============================================================================

/// Environment variable that switches tracing output to JSON
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

/// Environment variable that switches the runner report to JSON
pub const REPORT_JSON_ENV: &str = "SCHED_REPORT_JSON";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
