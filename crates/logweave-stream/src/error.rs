use std::io;
use std::path::PathBuf;

use thiserror::Error;

use logweave_types::TypeError;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("input log not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{label}:{line}: read failed: {source}")]
    Read {
        label: String,
        line: u64,
        source: io::Error,
    },

    #[error("{label}:{line}: invalid JSON record: {reason}")]
    Decode {
        label: String,
        line: u64,
        reason: String,
    },

    #[error("{label}:{line}: {cause}")]
    Timestamp {
        label: String,
        line: u64,
        #[source]
        cause: TypeError,
    },
}

pub type StreamResult<T> = Result<T, StreamError>;
