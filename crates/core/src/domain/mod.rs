// Domain Layer - Pure value types

pub mod execution;

// Re-exports
pub use execution::{ExecutionResult, LAUNCH_FAILURE_EXIT_CODE};
