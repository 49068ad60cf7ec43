// Runner Configuration

use crate::error::{AppError, Result};

pub const DEFAULT_BINARY: &str = "git";

/// Environment variable overriding the binary name
pub const BINARY_ENV_VAR: &str = "GITEXEC_GIT_BINARY";

/// Configuration for a command runner
///
/// Holds only immutable settings; no state is shared between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Executable to launch (resolved through `PATH` when not absolute)
    pub binary: String,
    /// Extra environment variables set on every child, on top of the inherited environment
    pub env: Vec<(String, String)>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            // Never let git block on a credential prompt
            env: vec![("GIT_TERMINAL_PROMPT".to_string(), "0".to_string())],
        }
    }
}

impl RunnerConfig {
    /// Load configuration from the process environment
    ///
    /// # Environment Variables
    ///
    /// - `GITEXEC_GIT_BINARY`: binary to launch (default: `git`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(binary) = lookup(BINARY_ENV_VAR) {
            let binary = binary.trim();
            if !binary.is_empty() {
                config.binary = binary.to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set (or replace) one child environment variable
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.env.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.env.push((key, value)),
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.binary.trim().is_empty() {
            return Err(AppError::Config("binary name cannot be empty".to_string()));
        }
        Ok(())
    }
}
