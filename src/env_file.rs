//! `.env` loading with load-if-present semantics.
//!
//! Pairs from the file are merged into the process environment, but a key
//! that is already set keeps its value. A missing file is a no-op and a
//! malformed one is reported, never fatal. Lines before the first malformed
//! line stay applied.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::types::{EngineError, EnvFileStatus};

/// Conventional file name searched for by [`load`].
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Search the working directory and its parents for `.env` and merge it.
pub fn load() -> EnvFileStatus {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            return EnvFileStatus::Unreadable(EngineError::EnvFile {
                path: DEFAULT_ENV_FILE.to_string(),
                message: format!("cannot resolve working directory: {e}"),
            })
        }
    };

    match find_env_file(&cwd) {
        Some(path) => load_from(&path),
        None => EnvFileStatus::Missing,
    }
}

/// Merge one explicit env file.
pub fn load_from(path: &Path) -> EnvFileStatus {
    match dotenv::from_path(path) {
        Ok(()) => EnvFileStatus::Loaded(path.to_path_buf()),
        Err(e) if e.not_found() => EnvFileStatus::Missing,
        Err(e) => EnvFileStatus::Unreadable(EngineError::EnvFile {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Nearest `.env` at or above `start`.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}

/// Log the outcome of a load. Call once a subscriber is installed.
pub fn report(status: &EnvFileStatus) {
    match status {
        EnvFileStatus::Loaded(path) => debug!(path = %path.display(), "Environment file loaded"),
        EnvFileStatus::Missing => debug!("No environment file found, skipping"),
        EnvFileStatus::Unreadable(e) => warn!(error = %e, "Ignoring unreadable environment file"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
