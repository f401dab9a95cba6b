//! Core types shared across the strategy engine.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Engine lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle of a single engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Running,
    Terminated,
}

impl EngineStatus {
    /// The only transition is `Running -> Terminated`; terminal state is sticky.
    pub fn terminate(self) -> Self {
        EngineStatus::Terminated
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineStatus::Running => write!(f, "RUNNING"),
            EngineStatus::Terminated => write!(f, "TERMINATED"),
        }
    }
}

// ---------------------------------------------------------------------------
// Environment file outcome
// ---------------------------------------------------------------------------

/// What happened when the `.env` file was consulted.
#[derive(Debug)]
pub enum EnvFileStatus {
    /// File found and every pair merged (existing keys kept).
    Loaded(PathBuf),
    /// No file on the search path. Nothing changed.
    Missing,
    /// File exists but could not be read or parsed.
    Unreadable(EngineError),
}

impl fmt::Display for EnvFileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvFileStatus::Loaded(path) => write!(f, "loaded {}", path.display()),
            EnvFileStatus::Missing => write!(f, "missing"),
            EnvFileStatus::Unreadable(e) => write!(f, "unreadable: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for the strategy engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment file error ({path}): {message}")]
    EnvFile { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
