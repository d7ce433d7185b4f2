use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The field every log record must carry for chronological ordering.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// One decoded log entry: an opaque JSON object.
///
/// The pipeline never interprets any field other than [`TIMESTAMP_KEY`].
/// All key/value pairs survive re-encoding; key order is not guaranteed
/// to be preserved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// Wrap an already-built JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for LogRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
