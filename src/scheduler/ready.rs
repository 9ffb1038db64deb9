/*!
 * Arrival Gate
 * Admits arrived processes into ready queues exactly once, in slot order
 */

use crate::core::types::Tick;
use crate::process::Process;
use std::collections::VecDeque;

/// Tracks which input slots have already been placed on a ready queue
#[derive(Debug, Clone)]
pub(super) struct ArrivalGate {
    admitted: Vec<bool>,
}

impl ArrivalGate {
    pub fn new(len: usize) -> Self {
        Self {
            admitted: vec![false; len],
        }
    }

    /// Push every not-yet-admitted slot whose arrival is `<= now` onto `queue`
    pub fn admit(&mut self, processes: &[Process], now: Tick, queue: &mut VecDeque<usize>) {
        for (idx, process) in processes.iter().enumerate() {
            if !self.admitted[idx] && process.has_arrived(now) {
                self.admitted[idx] = true;
                queue.push_back(idx);
            }
        }
    }
}
