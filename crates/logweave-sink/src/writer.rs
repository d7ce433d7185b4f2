use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use logweave_types::LogRecord;

use crate::error::{SinkError, SinkResult};

/// Name of the merged output file inside the output directory.
pub const MERGED_FILENAME: &str = "merged_log.jsonl";

/// Summary of a completed merge write.
#[derive(Clone, Debug)]
pub struct MergedLog {
    /// Path of the merged log file.
    pub path: PathBuf,
    /// Records written.
    pub records: u64,
}

/// Streaming JSONL writer with a no-clobber output directory contract.
///
/// The output directory must not exist when the writer is created; it is
/// created (with missing parents) and receives exactly one file,
/// [`MERGED_FILENAME`]. Each record is appended as one UTF-8 JSON line.
///
/// If the writer is dropped without [`finish`](SinkWriter::finish),
/// whatever was already flushed stays on disk — there is no rollback of
/// a failed run's partial output.
#[derive(Debug)]
pub struct SinkWriter {
    path: PathBuf,
    file: BufWriter<File>,
    records: u64,
}

impl SinkWriter {
    /// Create the output directory and open the merged log for writing.
    ///
    /// Fails with [`SinkError::TargetExists`] before touching the
    /// filesystem if the directory is already present.
    pub fn create(output_dir: &Path) -> SinkResult<Self> {
        if output_dir.exists() {
            return Err(SinkError::TargetExists(output_dir.to_path_buf()));
        }
        fs::create_dir_all(output_dir)?;

        let path = output_dir.join(MERGED_FILENAME);
        let file = File::create(&path)?;
        debug!(path = %path.display(), "created merged log");

        Ok(Self {
            path,
            file: BufWriter::new(file),
            records: 0,
        })
    }

    /// Append one record as a UTF-8 JSON line.
    pub fn append(&mut self, record: &LogRecord) -> SinkResult<()> {
        let line =
            serde_json::to_string(record).map_err(|e| SinkError::Encode(e.to_string()))?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    /// Records appended so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Path of the merged log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close the writer, returning a summary.
    pub fn finish(mut self) -> SinkResult<MergedLog> {
        self.file.flush()?;
        debug!(records = self.records, path = %self.path.display(), "merged log complete");
        Ok(MergedLog {
            path: self.path,
            records: self.records,
        })
    }
}
