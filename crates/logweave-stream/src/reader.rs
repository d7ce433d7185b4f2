use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::debug;

use logweave_types::LogRecord;

use crate::error::{StreamError, StreamResult};
use crate::traits::RecordSource;

/// Line-by-line JSONL file reader.
///
/// Holds the file open for the duration of consumption; the handle is
/// released when the reader is dropped. Blank lines are skipped; every
/// other line must decode as exactly one JSON object, otherwise the
/// reader fails with the source name and line number.
#[derive(Debug)]
pub struct JsonlReader {
    label: String,
    lines: Lines<BufReader<File>>,
    line: u64,
}

impl JsonlReader {
    /// Open an input log for sequential reading.
    pub fn open(path: &Path) -> StreamResult<Self> {
        if !path.is_file() {
            return Err(StreamError::InputNotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened input log");

        Ok(Self {
            label: path.display().to_string(),
            lines: BufReader::new(file).lines(),
            line: 0,
        })
    }
}

impl RecordSource for JsonlReader {
    fn next_record(&mut self) -> StreamResult<Option<LogRecord>> {
        loop {
            let read = match self.lines.next() {
                Some(read) => read,
                None => return Ok(None),
            };
            self.line += 1;

            let text = read.map_err(|source| StreamError::Read {
                label: self.label.clone(),
                line: self.line,
                source,
            })?;
            if text.trim().is_empty() {
                continue;
            }

            return match serde_json::from_str(&text) {
                Ok(record) => Ok(Some(record)),
                Err(e) => Err(StreamError::Decode {
                    label: self.label.clone(),
                    line: self.line,
                    reason: e.to_string(),
                }),
            };
        }
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn line(&self) -> u64 {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_log(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_records_with_line_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            dir.path(),
            "a.jsonl",
            concat!(
                "{\"timestamp\":\"2024-01-01 10:00:00\",\"m\":\"one\"}\n",
                "{\"timestamp\":\"2024-01-01 11:00:00\",\"m\":\"two\"}\n",
            ),
        );
        let mut reader = JsonlReader::open(&path).unwrap();

        let first = reader.next_record().unwrap().unwrap();
        assert_eq!(first.get("m"), Some(&json!("one")));
        assert_eq!(reader.line(), 1);

        let second = reader.next_record().unwrap().unwrap();
        assert_eq!(second.get("m"), Some(&json!("two")));
        assert_eq!(reader.line(), 2);

        assert!(reader.next_record().unwrap().is_none());
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            dir.path(),
            "gaps.jsonl",
            concat!(
                "{\"timestamp\":\"2024-01-01 10:00:00\",\"m\":\"one\"}\n",
                "\n",
                "   \n",
                "{\"timestamp\":\"2024-01-01 11:00:00\",\"m\":\"two\"}\n",
            ),
        );
        let mut reader = JsonlReader::open(&path).unwrap();

        assert!(reader.next_record().unwrap().is_some());
        let second = reader.next_record().unwrap().unwrap();
        assert_eq!(second.get("m"), Some(&json!("two")));
        // Blank lines still count toward the position.
        assert_eq!(reader.line(), 4);
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn decode_error_names_source_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            dir.path(),
            "bad.jsonl",
            concat!(
                "{\"timestamp\":\"2024-01-01 10:00:00\",\"m\":\"fine\"}\n",
                "this is not json\n",
            ),
        );
        let mut reader = JsonlReader::open(&path).unwrap();
        assert!(reader.next_record().unwrap().is_some());

        let err = reader.next_record().unwrap_err();
        match err {
            StreamError::Decode { label, line, .. } => {
                assert_eq!(label, path.display().to_string());
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_object_line_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(dir.path(), "array.jsonl", "[1, 2, 3]\n");
        let mut reader = JsonlReader::open(&path).unwrap();
        assert!(matches!(
            reader.next_record().unwrap_err(),
            StreamError::Decode { line: 1, .. }
        ));
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.jsonl");
        assert!(matches!(
            JsonlReader::open(&path).unwrap_err(),
            StreamError::InputNotFound(p) if p == path
        ));
    }

    #[test]
    fn directory_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            JsonlReader::open(dir.path()).unwrap_err(),
            StreamError::InputNotFound(_)
        ));
    }

    #[test]
    fn empty_file_is_exhausted_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(dir.path(), "empty.jsonl", "");
        let mut reader = JsonlReader::open(&path).unwrap();
        assert!(reader.next_record().unwrap().is_none());
        assert_eq!(reader.line(), 0);
    }
}
