// Git Workspace - command helpers bound to one working directory

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::domain::ExecutionResult;
use crate::port::CommandRunner;

/// A working directory plus the runner used to invoke git inside it
///
/// Every helper is a fixed argument vector passed straight to
/// [`CommandRunner::execute`]; results come back untouched.
#[derive(Clone)]
pub struct GitWorkspace {
    runner: Arc<dyn CommandRunner>,
    path: PathBuf,
}

impl GitWorkspace {
    pub fn new(runner: Arc<dyn CommandRunner>, path: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run arbitrary arguments in this workspace
    pub fn run(&self, args: &[&str]) -> ExecutionResult {
        self.runner.execute(&self.path, args)
    }

    pub fn init(&self) -> ExecutionResult {
        self.run(&["init"])
    }

    /// Stage every change, including deletions (`add -A`)
    pub fn add_all(&self) -> ExecutionResult {
        self.run(&["add", "-A"])
    }

    /// Stage specific paths
    pub fn add(&self, paths: &[&str]) -> ExecutionResult {
        let mut args = Vec::with_capacity(paths.len() + 2);
        args.push("add");
        args.push("--");
        args.extend_from_slice(paths);
        self.run(&args)
    }

    pub fn commit(&self, message: &str) -> ExecutionResult {
        self.run(&["commit", "-m", message])
    }

    pub fn status(&self) -> ExecutionResult {
        self.run(&["status"])
    }

    pub fn status_short(&self) -> ExecutionResult {
        self.run(&["status", "--short"])
    }

    pub fn log_oneline(&self) -> ExecutionResult {
        self.run(&["log", "--oneline"])
    }

    pub fn diff(&self) -> ExecutionResult {
        self.run(&["diff"])
    }

    pub fn branch(&self) -> ExecutionResult {
        self.run(&["branch"])
    }

    /// Set a repository-local config value
    pub fn set_config(&self, key: &str, value: &str) -> ExecutionResult {
        self.run(&["config", key, value])
    }

    /// Configure the author identity needed for commits
    ///
    /// Stops at the first failing `config` call and returns its result.
    pub fn configure_identity(&self, name: &str, email: &str) -> ExecutionResult {
        let result = self.set_config("user.name", name);
        if !result.ok() {
            debug!(
                path = %self.path.display(),
                exit_code = result.exit_code(),
                "Setting user.name failed, skipping user.email"
            );
            return result;
        }
        self.set_config("user.email", email)
    }
}
