// Command Runner Port
// Abstraction for invoking the external version-control binary

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ExecutionResult;

/// Reasons a process could not be started
///
/// Never returned to callers of [`CommandRunner::execute`]; it is collapsed
/// into an [`ExecutionResult`] carrying the launch sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("working directory does not exist or is not a directory: {}", path.display())]
    WorkingDirectory { path: PathBuf },

    #[error("binary not found: {binary}")]
    BinaryNotFound { binary: String },

    #[error("permission denied launching {binary}")]
    PermissionDenied { binary: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<LaunchError> for ExecutionResult {
    fn from(err: LaunchError) -> Self {
        ExecutionResult::launch_failed(err.to_string())
    }
}

/// Command Runner trait
///
/// Implementations:
/// - ProcessCommandRunner (infra-system): spawns the external binary
/// - MockCommandRunner: scripted results for tests
pub trait CommandRunner: Send + Sync {
    /// Run the external binary with `args` inside `working_dir`
    ///
    /// Blocks until the process exits and both output streams are drained.
    /// Launch failures come back as a result with `ok == false` and the
    /// sentinel exit code, never as a panic.
    fn execute(&self, working_dir: &Path, args: &[&str]) -> ExecutionResult;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// One recorded call to [`MockCommandRunner::execute`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub working_dir: PathBuf,
        pub args: Vec<String>,
    }

    /// Mock Command Runner for testing
    ///
    /// Returns queued results in order; once the queue is empty every call
    /// gets the fallback result.
    pub struct MockCommandRunner {
        queued: Mutex<VecDeque<ExecutionResult>>,
        fallback: ExecutionResult,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockCommandRunner {
        pub fn new(fallback: ExecutionResult) -> Self {
            Self {
                queued: Mutex::new(VecDeque::new()),
                fallback,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn new_success() -> Self {
            Self::new(ExecutionResult::completed(0, "mock output", ""))
        }

        pub fn new_fail(exit_code: i32, stderr: impl Into<String>) -> Self {
            Self::new(ExecutionResult::completed(exit_code, "", stderr))
        }

        pub fn new_launch_failure(message: impl Into<String>) -> Self {
            Self::new(ExecutionResult::launch_failed(message))
        }

        /// Queue a result for the next unanswered call
        pub fn push_result(&self, result: ExecutionResult) {
            self.queued.lock().unwrap().push_back(result);
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl CommandRunner for MockCommandRunner {
        fn execute(&self, working_dir: &Path, args: &[&str]) -> ExecutionResult {
            self.calls.lock().unwrap().push(RecordedCall {
                working_dir: working_dir.to_path_buf(),
                args: args.iter().map(|s| s.to_string()).collect(),
            });

            self.queued
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::MockCommandRunner;
    use super::*;
    use crate::domain::LAUNCH_FAILURE_EXIT_CODE;

    #[test]
    fn test_launch_error_collapses_into_sentinel_result() {
        let err = LaunchError::WorkingDirectory {
            path: PathBuf::from("/invalid/path"),
        };

        let result: ExecutionResult = err.into();

        assert!(!result.ok());
        assert_eq!(result.exit_code(), LAUNCH_FAILURE_EXIT_CODE);
        assert!(result.stderr().contains("/invalid/path"));
    }

    #[test]
    fn test_binary_not_found_message_names_binary() {
        let err = LaunchError::BinaryNotFound {
            binary: "git-nope".to_string(),
        };

        assert_eq!(err.to_string(), "binary not found: git-nope");
    }

    #[test]
    fn test_mock_returns_queued_then_fallback() {
        let runner = MockCommandRunner::new_success();
        runner.push_result(ExecutionResult::completed(1, "", "first"));

        let first = runner.execute(Path::new("/repo"), &["status"]);
        let second = runner.execute(Path::new("/repo"), &["status"]);

        assert_eq!(first.stderr(), "first");
        assert!(second.ok());
        assert_eq!(runner.call_count(), 2);
        assert_eq!(runner.calls()[0].args, vec!["status".to_string()]);
    }
}
