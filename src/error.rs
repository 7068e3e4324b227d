//! Error types for block counting runs.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockCountError {
    /// The input sequence could not be opened or read.
    #[error("cannot read input '{}': {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The result file could not be created, written or flushed.
    /// Whatever reached the file before the failure stays there.
    #[error("cannot write output '{}': {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BlockCountError>;
