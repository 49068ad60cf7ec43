// Application Layer - Use cases built on the ports

pub mod workspace;

// Re-exports
pub use workspace::GitWorkspace;
