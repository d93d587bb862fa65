//! Error types for font discovery.

use std::{path::PathBuf, result};

/// Errors raised while scanning for font files.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("invalid input path: {0}")]
    InvalidPath(PathBuf),

    #[error("failed to scan {path}: {reason}")]
    Scan { path: PathBuf, reason: String },
}

pub type Result<T> = result::Result<T, FinderError>;
