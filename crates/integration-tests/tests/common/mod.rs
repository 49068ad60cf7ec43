//! Shared fixtures for tests that drive a real `git` binary

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use gitexec_core::application::GitWorkspace;
use gitexec_core::config::RunnerConfig;
use gitexec_infra_system::ProcessCommandRunner;
use tempfile::TempDir;

/// Runner isolated from the user's global and system git config
pub fn isolated_runner() -> ProcessCommandRunner {
    let null_config = if cfg!(windows) { "NUL" } else { "/dev/null" };
    ProcessCommandRunner::new(
        RunnerConfig::default()
            .with_env("GIT_CONFIG_GLOBAL", null_config)
            .with_env("GIT_CONFIG_NOSYSTEM", "1")
            .with_env("LC_ALL", "C"),
    )
}

/// Empty temp directory plus a workspace bound to it
pub fn fresh_workspace() -> (TempDir, GitWorkspace) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let workspace = GitWorkspace::new(Arc::new(isolated_runner()), dir.path());
    (dir, workspace)
}

/// Initialized repository with an author identity configured
pub fn initialized_repo() -> (TempDir, GitWorkspace) {
    let (dir, workspace) = fresh_workspace();
    assert!(workspace.init().ok(), "git init failed");
    let identity = workspace.configure_identity("Test User", "test@example.com");
    assert!(identity.ok(), "git config failed: {}", identity.stderr());
    (dir, workspace)
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write test file");
}
