use std::collections::VecDeque;

use logweave_types::LogRecord;

use crate::error::StreamResult;
use crate::traits::RecordSource;

/// In-memory record source.
///
/// Intended for tests and embedding: yields a fixed sequence of records
/// in order, with positions counted from 1 as if each record were one
/// line of a file.
#[derive(Debug)]
pub struct MemorySource {
    label: String,
    records: VecDeque<LogRecord>,
    yielded: u64,
}

impl MemorySource {
    /// Create a source that yields `records` in order.
    pub fn new(label: impl Into<String>, records: Vec<LogRecord>) -> Self {
        Self {
            label: label.into(),
            records: records.into(),
            yielded: 0,
        }
    }

    /// Records not yet pulled.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl RecordSource for MemorySource {
    fn next_record(&mut self) -> StreamResult<Option<LogRecord>> {
        match self.records.pop_front() {
            Some(record) => {
                self.yielded += 1;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn line(&self) -> u64 {
        self.yielded
    }
}
