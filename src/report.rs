/*!
 * Reporting
 * Console tables and JSON reports for finished runs
 */

use crate::process::Process;
use crate::scheduler::{Outcome, ScheduleStats, SchedulingPolicy, Slice};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Serializable summary of one policy run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub policy: SchedulingPolicy,
    pub title: String,
    pub processes: Vec<Process>,
    pub timeline: Vec<Slice>,
    pub stats: ScheduleStats,
}

impl From<&Outcome> for RunReport {
    fn from(outcome: &Outcome) -> Self {
        Self {
            policy: outcome.policy,
            title: outcome.policy.label(),
            processes: outcome.processes.clone(),
            timeline: outcome.timeline.slices().to_vec(),
            stats: outcome.stats(),
        }
    }
}

/// Render a run as a fixed-width table followed by averages and a Gantt line
pub fn render_table(outcome: &Outcome) -> String {
    let mut out = String::new();
    let stats = outcome.stats();

    // Writing to a String cannot fail
    let _ = writeln!(out, "\n=== {} Scheduling ===", outcome.policy.label());
    let _ = writeln!(
        out,
        "{:<5} {:>8} {:>6} {:>9} {:>6} {:>11} {:>8} {:>11}",
        "PID", "Arrival", "Burst", "Priority", "Start", "Completion", "Waiting", "Turnaround"
    );
    for p in &outcome.processes {
        let _ = writeln!(
            out,
            "{:<5} {:>8} {:>6} {:>9} {:>6} {:>11} {:>8} {:>11}",
            format!("P{}", p.pid),
            p.arrival_time,
            p.burst_time,
            p.priority,
            p.start_time,
            p.completion_time,
            p.waiting_time,
            p.turnaround_time
        );
    }

    let _ = writeln!(out, "Average Waiting Time: {:.2}", stats.average_waiting);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", stats.average_turnaround);
    let _ = writeln!(
        out,
        "Makespan: {}  Idle: {}  Context switches: {}  Utilization: {:.1}%",
        stats.makespan,
        stats.idle_time,
        stats.context_switches,
        stats.utilization() * 100.0
    );
    let _ = writeln!(out, "Gantt: {}", render_gantt(outcome.timeline.slices()));
    out
}

/// `|0 P1 3|3 P2 5|` style rendering of dispatch slices
pub fn render_gantt(slices: &[Slice]) -> String {
    if slices.is_empty() {
        return "(empty)".to_string();
    }

    slices
        .iter()
        .map(|s| format!("|{} P{} {}", s.start, s.pid, s.end))
        .collect::<String>()
        + "|"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{simulate, Timeline};

    #[test]
    fn test_table_lists_every_process() {
        let procs = vec![Process::new(1, 0, 2, 0), Process::new(2, 1, 1, 0)];
        let outcome = simulate(&SchedulingPolicy::Fcfs, &procs).unwrap();
        let table = render_table(&outcome);

        assert!(table.contains("=== FCFS Scheduling ==="));
        assert!(table.contains("P1"));
        assert!(table.contains("P2"));
        assert!(table.contains("Average Waiting Time: 0.50"));
    }

    #[test]
    fn test_table_title_is_policy_label() {
        let policy: SchedulingPolicy = "rr:3".parse().unwrap();
        let outcome = simulate(&policy, &[Process::new(1, 0, 2, 0)]).unwrap();
        let table = render_table(&outcome);
        assert!(table.starts_with("\n=== Round Robin (quantum = 3) Scheduling ===\n"));
    }

    #[test]
    fn test_gantt_rendering() {
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 3);
        timeline.record(2, 4, 5);
        assert_eq!(render_gantt(timeline.slices()), "|0 P1 3|4 P2 5|");
        assert_eq!(render_gantt(&[]), "(empty)");
    }

    #[test]
    fn test_report_serializes_policy_name() {
        let outcome = simulate(&SchedulingPolicy::Srt, &[Process::new(1, 0, 1, 0)]).unwrap();
        let json = serde_json::to_value(RunReport::from(&outcome)).unwrap();
        assert_eq!(json["policy"], "srt");
        assert_eq!(json["stats"]["makespan"], 1);
    }
}
