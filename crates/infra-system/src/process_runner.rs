// Process command runner
// reason: std::process for blocking, fully-buffered invocations
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Output, Stdio};
use std::time::Instant;
use tracing::{debug, info, warn};

use gitexec_core::config::RunnerConfig;
use gitexec_core::domain::ExecutionResult;
use gitexec_core::port::{CommandRunner, LaunchError};

/// Runs the configured binary as a child process
///
/// Stateless apart from its configuration, so one instance can be shared
/// across threads; each call gets its own child and its own buffers.
#[derive(Debug, Clone)]
pub struct ProcessCommandRunner {
    config: RunnerConfig,
}

impl ProcessCommandRunner {
    /// Create a runner
    ///
    /// # Example
    /// ```ignore
    /// let runner = ProcessCommandRunner::new(RunnerConfig::default());
    /// let result = runner.execute(Path::new("/tmp/repo"), &["status", "--short"]);
    /// ```
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Map a spawn failure onto a launch error
    fn classify_spawn_error(&self, working_dir: &Path, err: io::Error) -> LaunchError {
        match err.kind() {
            // The directory may have vanished after the up-front check
            io::ErrorKind::NotFound if !working_dir.is_dir() => LaunchError::WorkingDirectory {
                path: working_dir.to_path_buf(),
            },
            io::ErrorKind::NotFound => LaunchError::BinaryNotFound {
                binary: self.config.binary.clone(),
            },
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied {
                binary: self.config.binary.clone(),
            },
            _ => LaunchError::Io(err.to_string()),
        }
    }

    /// Spawn child process and wait for output
    fn spawn_and_wait(&self, working_dir: &Path, args: &[&str]) -> Result<Output, LaunchError> {
        // Checked up front: a missing cwd and a missing binary both surface as NotFound
        if !working_dir.is_dir() {
            return Err(LaunchError::WorkingDirectory {
                path: working_dir.to_path_buf(),
            });
        }

        Command::new(&self.config.binary)
            .args(args)
            .envs(self.config.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.classify_spawn_error(working_dir, e))
    }

    /// Build execution result from process output
    fn build_result(output: Output) -> ExecutionResult {
        ExecutionResult::completed(
            exit_code_of(output.status),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        )
    }
}

/// Raw exit code, or `128 + signal` when the child was killed by a signal
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    // No code and no signal: report a generic failure, never the launch sentinel
    1
}

impl CommandRunner for ProcessCommandRunner {
    fn execute(&self, working_dir: &Path, args: &[&str]) -> ExecutionResult {
        let start = Instant::now();

        debug!(
            binary = %self.config.binary,
            args = ?args,
            working_dir = %working_dir.display(),
            "Starting command execution"
        );

        let result = match self.spawn_and_wait(working_dir, args) {
            Ok(output) => Self::build_result(output),
            Err(e) => {
                warn!(
                    binary = %self.config.binary,
                    working_dir = %working_dir.display(),
                    error = %e,
                    "Command could not be launched"
                );
                return e.into();
            }
        };

        info!(
            binary = %self.config.binary,
            args = ?args,
            exit_code = result.exit_code(),
            ok = result.ok(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Command execution completed"
        );

        result
    }
}
