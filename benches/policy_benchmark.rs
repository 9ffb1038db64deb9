/*!
 * Scheduling Policy Benchmarks
 *
 * Compare simulation cost of each policy on generated workloads
 */

use cpu_sched_sim::scheduler::{FeedbackConfig, Quantum};
use cpu_sched_sim::{simulate, Process, SchedulingPolicy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic workload: staggered arrivals with a spread of burst lengths
fn workload(size: u32) -> Vec<Process> {
    (0..size)
        .map(|i| {
            let arrival = (i as u64 * 7) % (size as u64 * 2);
            let burst = 1 + (i as u64 * 13) % 17;
            let priority = (i % 5) as i32;
            Process::new(i + 1, arrival, burst, priority)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let policies = [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::Spn,
        SchedulingPolicy::Priority,
        SchedulingPolicy::Hrrn,
        SchedulingPolicy::Srt,
        SchedulingPolicy::RoundRobin(Quantum::default()),
        SchedulingPolicy::Feedback(FeedbackConfig::default()),
    ];

    for size in [16u32, 128] {
        let mut group = c.benchmark_group(format!("simulate_{}", size));
        let procs = workload(size);

        for policy in &policies {
            group.bench_with_input(
                BenchmarkId::from_parameter(policy.name()),
                &procs,
                |b, procs| {
                    b.iter(|| simulate(black_box(policy), black_box(procs)));
                },
            );
        }

        group.finish();
    }
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
