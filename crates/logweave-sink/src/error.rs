use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("output directory already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("failed to encode record: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;
