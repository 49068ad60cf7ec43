// gitexec Core - Domain Types & Ports
// NO infrastructure dependencies: process spawning lives in infra-system

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::RunnerConfig;
pub use domain::{ExecutionResult, LAUNCH_FAILURE_EXIT_CODE};
pub use error::{AppError, Result};
pub use port::{CommandRunner, LaunchError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
