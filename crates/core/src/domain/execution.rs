// Execution Domain Model

use serde::{Deserialize, Serialize};

/// Exit code reported when the external process could not be launched at all.
///
/// Whether a process ran is tracked separately (`launched`), so a tool that
/// really exits with `-1` (e.g. `0xFFFFFFFF` on Windows) is never mistaken for
/// a launch failure.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

/// Outcome of one external command invocation.
///
/// Built once, right after the process finishes (or fails to start), and never
/// mutated afterwards. `ok` is true iff the process launched and exited with 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExecutionResult")]
pub struct ExecutionResult {
    ok: bool,
    exit_code: i32,
    stdout: String,
    stderr: String,
    launched: bool,
}

/// Wire shape checked before it becomes an [`ExecutionResult`]
#[derive(Deserialize)]
struct RawExecutionResult {
    ok: bool,
    exit_code: i32,
    stdout: String,
    stderr: String,
    launched: bool,
}

impl TryFrom<RawExecutionResult> for ExecutionResult {
    type Error = String;

    fn try_from(raw: RawExecutionResult) -> Result<Self, Self::Error> {
        let result = if raw.launched {
            ExecutionResult::completed(raw.exit_code, raw.stdout, raw.stderr)
        } else {
            if raw.exit_code != LAUNCH_FAILURE_EXIT_CODE || !raw.stdout.is_empty() {
                return Err(format!(
                    "unlaunched result must have exit_code {} and empty stdout",
                    LAUNCH_FAILURE_EXIT_CODE
                ));
            }
            ExecutionResult::launch_failed(raw.stderr)
        };

        if result.ok != raw.ok {
            return Err(format!(
                "ok={} is inconsistent with exit_code={}",
                raw.ok, raw.exit_code
            ));
        }
        Ok(result)
    }
}

impl ExecutionResult {
    /// Result for a process that ran to completion
    pub fn completed(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            ok: exit_code == 0,
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            launched: true,
        }
    }

    /// Result for a process that never started
    ///
    /// `message` lands in `stderr` so callers can surface it the same way as
    /// diagnostics from the external tool.
    pub fn launch_failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
            stdout: String::new(),
            stderr: message.into(),
            launched: false,
        }
    }

    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// True if the process never ran
    pub fn is_launch_failure(&self) -> bool {
        !self.launched
    }

    /// Consume the result, yielding `(stdout, stderr)`
    pub fn into_output(self) -> (String, String) {
        (self.stdout, self.stderr)
    }
}
