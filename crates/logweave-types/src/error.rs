use thiserror::Error;

/// Errors produced when extracting ordering information from a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("record has no \"timestamp\" field")]
    MissingTimestamp,

    #[error("\"timestamp\" field is not a string (found {0})")]
    TimestampNotText(&'static str),

    #[error("timestamp {value:?} does not match \"YYYY-MM-DD HH:MM:SS\"")]
    TimestampFormat { value: String },
}
