//! Streaming JSONL output for Logweave.
//!
//! The [`SinkWriter`] owns the output directory for the duration of one
//! run: the directory must not exist beforehand (no-clobber), it is
//! created once, and it receives exactly one file, [`MERGED_FILENAME`].
//! Records are written as they arrive — the merged stream is never
//! materialized in memory.

pub mod error;
pub mod writer;

pub use error::{SinkError, SinkResult};
pub use writer::{MergedLog, SinkWriter, MERGED_FILENAME};
