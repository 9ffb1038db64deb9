/*!
 * Process Module
 * Process record and input validation
 */

pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::Process;
pub use validation::validate_processes;
