/*!
 * Scheduling Property Tests
 * Invariants that must hold for every policy on arbitrary workloads
 */

use cpu_sched_sim::scheduler::{response_ratio, FeedbackConfig, Quantum, SchedulingPolicy};
use cpu_sched_sim::{simulate, Outcome, Process};
use proptest::prelude::*;
use std::collections::HashSet;

fn workload_strategy() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u64..30, 1u64..12, -3i32..6), 0..10).prop_map(|rows| {
        rows
            .into_iter()
            .enumerate()
            .map(|(slot, (arrival, burst, priority))| {
                Process::new(slot as u32 + 1, arrival, burst, priority)
            })
            .collect()
    })
}

fn all_policies(quantum: u64, levels: u32) -> Vec<SchedulingPolicy> {
    vec![
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::Spn,
        SchedulingPolicy::Priority,
        SchedulingPolicy::Hrrn,
        SchedulingPolicy::Srt,
        SchedulingPolicy::RoundRobin(Quantum::new(quantum).unwrap()),
        SchedulingPolicy::Feedback(FeedbackConfig::new(levels, quantum).unwrap()),
    ]
}

fn check_outcome(input: &[Process], outcome: &Outcome) -> Result<(), TestCaseError> {
    let policy = outcome.policy;
    prop_assert_eq!(outcome.processes.len(), input.len());

    let pids: HashSet<u32> = outcome.processes.iter().map(|p| p.pid).collect();
    prop_assert_eq!(pids.len(), input.len());

    for p in &outcome.processes {
        prop_assert!(p.is_complete());
        prop_assert_eq!(p.executed_time, p.burst_time);
        prop_assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
        prop_assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
        prop_assert!(p.start_time >= p.arrival_time);
        prop_assert!(p.turnaround_time >= p.burst_time);

        // Dispatch slices agree with the record
        let slices: Vec<_> = outcome.timeline.slices_for(p.pid).collect();
        prop_assert!(!slices.is_empty());
        prop_assert_eq!(slices[0].start, p.start_time);
        prop_assert_eq!(slices[slices.len() - 1].end, p.completion_time);
        prop_assert_eq!(slices.iter().map(|s| s.len()).sum::<u64>(), p.burst_time);

        if !policy.is_preemptive() {
            prop_assert_eq!(slices.len(), 1);
            prop_assert_eq!(p.completion_time, p.start_time + p.burst_time);
        }
    }

    let total_burst: u64 = input.iter().map(|p| p.burst_time).sum();
    let timeline = &outcome.timeline;
    prop_assert_eq!(timeline.busy_time(), total_burst);
    prop_assert_eq!(timeline.makespan() - timeline.idle_time(), total_burst);

    if policy.is_preemptive() {
        let input_pids: Vec<u32> = input.iter().map(|p| p.pid).collect();
        let output_pids: Vec<u32> = outcome.processes.iter().map(|p| p.pid).collect();
        prop_assert_eq!(input_pids, output_pids);
    } else {
        let completions: Vec<u64> = outcome.processes.iter().map(|p| p.completion_time).collect();
        prop_assert!(completions.windows(2).all(|w| w[0] < w[1]));
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_metrics_consistent_for_every_policy(
        procs in workload_strategy(),
        quantum in 1u64..5,
        levels in 1u32..5,
    ) {
        for policy in all_policies(quantum, levels) {
            let outcome = simulate(&policy, &procs).unwrap();
            check_outcome(&procs, &outcome)?;
        }
    }

    #[test]
    fn prop_every_policy_is_work_conserving(
        procs in workload_strategy(),
        quantum in 1u64..5,
    ) {
        let makespans: HashSet<u64> = all_policies(quantum, 3)
            .iter()
            .map(|policy| simulate(policy, &procs).unwrap().timeline.makespan())
            .collect();
        prop_assert!(makespans.len() <= 1);
    }

    #[test]
    fn prop_single_level_feedback_equals_round_robin(
        procs in workload_strategy(),
        quantum in 1u64..6,
    ) {
        let q = Quantum::new(quantum).unwrap();
        let rr = simulate(&SchedulingPolicy::RoundRobin(q), &procs).unwrap();
        let fb = simulate(
            &SchedulingPolicy::Feedback(FeedbackConfig::single_level(q)),
            &procs,
        )
        .unwrap();

        prop_assert_eq!(rr.processes, fb.processes);
        prop_assert_eq!(rr.timeline, fb.timeline);
    }

    #[test]
    fn prop_response_ratio_strictly_increases_while_waiting(
        arrival in 0u64..50,
        burst in 1u64..20,
        waited in 0u64..100,
    ) {
        let p = Process::new(1, arrival, burst, 0);
        let now = arrival + waited;
        prop_assert!(response_ratio(&p, now + 1) > response_ratio(&p, now));
    }

    #[test]
    fn prop_runs_are_independent(procs in workload_strategy()) {
        let first = simulate(&SchedulingPolicy::Srt, &procs).unwrap();
        let _ = simulate(&SchedulingPolicy::Hrrn, &procs).unwrap();
        let again = simulate(&SchedulingPolicy::Srt, &procs).unwrap();
        prop_assert_eq!(first, again);
    }
}
