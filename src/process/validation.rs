/*!
 * Process Input Validation
 * Reject malformed process sets before a simulation starts
 */

use super::types::Process;
use crate::core::errors::SchedulerError;
use crate::core::types::{SchedResult, Tick};
use std::collections::HashSet;

/// Validate a caller-supplied process list
///
/// Every burst time must be positive and every pid unique. An empty list is valid.
/// The latest arrival plus the total burst bounds every clock value of a run, so
/// it must fit in `Tick`.
pub fn validate_processes(processes: &[Process]) -> SchedResult<()> {
    let mut seen = HashSet::with_capacity(processes.len());
    let mut latest_arrival: Tick = 0;
    let mut total_burst: Tick = 0;

    for p in processes {
        if p.burst_time == 0 {
            return Err(SchedulerError::InvalidProcess {
                pid: p.pid,
                reason: "burst time must be positive".to_string(),
            });
        }

        if !seen.insert(p.pid) {
            return Err(SchedulerError::DuplicatePid(p.pid));
        }

        latest_arrival = latest_arrival.max(p.arrival_time);
        total_burst = total_burst
            .checked_add(p.burst_time)
            .ok_or_else(|| horizon_overflow(p.arrival_time, p.burst_time))?;
    }

    latest_arrival
        .checked_add(total_burst)
        .ok_or_else(|| horizon_overflow(latest_arrival, total_burst))?;

    Ok(())
}

fn horizon_overflow(arrival: Tick, burst: Tick) -> SchedulerError {
    SchedulerError::invalid_parameter(format!(
        "schedule horizon overflows the clock (arrival {} + burst {})",
        arrival, burst
    ))
}
