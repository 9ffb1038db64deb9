/*!
 * Monitoring
 * Structured tracing setup for simulation runs
 */

mod tracer;

pub use tracer::{generate_run_id, init_tracing};
