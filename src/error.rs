//! Scaffolding error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or emitting templates
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("Failed to read template override {path}")]
    ReadOverride {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
