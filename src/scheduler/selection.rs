/*!
 * Selection Rules
 * Pure comparison functions used by the non-preemptive policies
 */

use super::traits::SelectionRule;
use crate::core::types::Tick;
use crate::process::Process;
use std::cmp::Ordering;

/// SPN: shorter burst first, then earlier arrival
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn compare(&self, a: &Process, b: &Process, _now: Tick) -> Ordering {
        a.burst_time
            .cmp(&b.burst_time)
            .then_with(|| a.arrival_time.cmp(&b.arrival_time))
    }
}

/// Priority: lower priority value first, then earlier arrival
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestPriorityValue;

impl SelectionRule for LowestPriorityValue {
    fn compare(&self, a: &Process, b: &Process, _now: Tick) -> Ordering {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.arrival_time.cmp(&b.arrival_time))
    }
}

/// HRRN: higher response ratio first, then earlier arrival
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestResponseRatio;

impl SelectionRule for HighestResponseRatio {
    fn compare(&self, a: &Process, b: &Process, now: Tick) -> Ordering {
        // (wa + sa) / sa > (wb + sb) / sb  <=>  (wa + sa) * sb > (wb + sb) * sa
        let lhs = (now - a.arrival_time + a.burst_time) as u128 * b.burst_time as u128;
        let rhs = (now - b.arrival_time + b.burst_time) as u128 * a.burst_time as u128;
        rhs.cmp(&lhs)
            .then_with(|| a.arrival_time.cmp(&b.arrival_time))
    }
}

/// Response ratio `(waiting + burst) / burst` of an arrived process at `now`
pub fn response_ratio(process: &Process, now: Tick) -> f64 {
    let waiting = now.saturating_sub(process.arrival_time);
    (waiting + process.burst_time) as f64 / process.burst_time as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst_prefers_shorter_then_earlier() {
        let long = Process::new(1, 0, 8, 0);
        let short = Process::new(2, 2, 3, 0);
        let short_later = Process::new(3, 4, 3, 0);

        assert_eq!(ShortestBurst.compare(&short, &long, 5), Ordering::Less);
        assert_eq!(ShortestBurst.compare(&short, &short_later, 5), Ordering::Less);
    }

    #[test]
    fn test_lowest_priority_value_wins() {
        let urgent = Process::new(1, 3, 9, 1);
        let relaxed = Process::new(2, 0, 1, 4);
        assert_eq!(LowestPriorityValue.compare(&urgent, &relaxed, 3), Ordering::Less);
        assert_eq!(LowestPriorityValue.compare(&relaxed, &urgent, 3), Ordering::Greater);
    }

    #[test]
    fn test_response_ratio_grows_while_waiting() {
        let p = Process::new(1, 2, 4, 0);
        assert_eq!(response_ratio(&p, 2), 1.0);
        assert_eq!(response_ratio(&p, 6), 2.0);
        assert!(response_ratio(&p, 7) > response_ratio(&p, 6));
    }

    #[test]
    fn test_highest_response_ratio_ordering() {
        // At t=9: a waited 9 with burst 3 -> 4.0, b waited 1 with burst 1 -> 2.0
        let a = Process::new(1, 0, 3, 0);
        let b = Process::new(2, 8, 1, 0);
        assert_eq!(HighestResponseRatio.compare(&a, &b, 9), Ordering::Less);

        // Equal ratios fall back to arrival
        let c = Process::new(3, 0, 2, 0);
        let d = Process::new(4, 1, 1, 0);
        assert_eq!(response_ratio(&c, 2), response_ratio(&d, 2));
        assert_eq!(HighestResponseRatio.compare(&c, &d, 2), Ordering::Less);
    }
}
