/*!
 * CPU Scheduling Simulator - Runner
 *
 * Runs every configured policy over the reference workload and prints:
 * - A per-process metrics table for each policy
 * - Averages, idle time and a Gantt line
 * - Or a JSON array of reports when SCHED_REPORT_JSON is set
 */

use cpu_sched_sim::core::limits::REPORT_JSON_ENV;
use cpu_sched_sim::report::{render_table, RunReport};
use cpu_sched_sim::{init_tracing, simulate, Process, SimulationConfig};
use miette::IntoDiagnostic;
use tracing::info;

/// Reference workload: (id, arrival, burst, priority)
fn reference_workload() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5, 2),
        Process::new(2, 1, 3, 1),
        Process::new(3, 2, 8, 4),
        Process::new(4, 3, 6, 3),
    ]
}

fn main() -> miette::Result<()> {
    init_tracing();

    let config = SimulationConfig::default();
    let processes = reference_workload();
    let as_json = std::env::var(REPORT_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    info!(
        processes = processes.len(),
        quantum = config.quantum.get(),
        feedback_runs = config.feedback.len(),
        "Starting scheduling comparison"
    );

    let mut reports = Vec::new();
    for policy in config.policies() {
        let outcome = simulate(&policy, &processes)?;

        if as_json {
            reports.push(RunReport::from(&outcome));
        } else {
            print!("{}", render_table(&outcome));
        }
    }

    if as_json {
        let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", json);
    }

    Ok(())
}
