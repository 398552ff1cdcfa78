//! Error types for the library collaborators.
//!
//! Only [`InstallError`] ever reaches the user (on the install error
//! screen). Catalog and store errors are logged and replaced by defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the external setup process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    #[error("Setup script not found: {0}")]
    ScriptNotFound(PathBuf),

    #[error("Failed to start setup script: {0}")]
    Spawn(String),

    #[error("Failed to read setup output: {0}")]
    Stream(String),

    #[error("Setup script exited with code {0}")]
    ExitCode(i32),

    #[error("Setup process ended unexpectedly")]
    Disconnected,
}

/// Failures loading user catalog files.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failures persisting the favorites/alias store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store has no backing file")]
    NoBackingFile,
}
