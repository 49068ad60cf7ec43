// gitexec Infrastructure - System Adapters
// Implements: CommandRunner

pub mod process_runner;

pub use process_runner::ProcessCommandRunner;
