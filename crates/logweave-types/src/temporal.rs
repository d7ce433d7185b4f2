use std::fmt;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::TypeError;
use crate::record::{LogRecord, TIMESTAMP_KEY};

/// The fixed timestamp pattern: `YYYY-MM-DD HH:MM:SS`.
///
/// No timezone, no sub-second precision. Trailing input is rejected.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A comparable moment in time parsed from a record's timestamp field.
///
/// Ordering is natural chronological order; equal instants are ties.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogInstant(NaiveDateTime);

impl LogInstant {
    /// Parse an instant from timestamp text.
    pub fn parse(text: &str) -> Result<Self, TypeError> {
        NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| TypeError::TimestampFormat {
                value: text.to_string(),
            })
    }

    /// Extract the instant of a record.
    ///
    /// Pure function of the record: fails if the `timestamp` field is
    /// absent, not a string, or does not match [`TIMESTAMP_FORMAT`].
    pub fn of(record: &LogRecord) -> Result<Self, TypeError> {
        let value = record
            .get(TIMESTAMP_KEY)
            .ok_or(TypeError::MissingTimestamp)?;
        let text = value
            .as_str()
            .ok_or_else(|| TypeError::TimestampNotText(json_type_name(value)))?;
        Self::parse(text)
    }
}

impl fmt::Debug for LogInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogInstant({})", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl fmt::Display for LogInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
