// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Command execution itself never fails with this type; failures of the
/// external process are reported through `ExecutionResult`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
