//! Error types for name table reporting.

use std::{io, result};

/// Errors that can occur while building a name table report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("font has no readable name table")]
    MissingTable,

    #[error("failed to load font: {0}")]
    FontLoad(String),

    #[error("failed to write report: {0}")]
    Sink(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
