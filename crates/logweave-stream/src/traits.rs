use logweave_types::LogRecord;

use crate::error::StreamResult;

/// A lazy, forward-only, finite sequence of decoded log records.
///
/// Each pull is tri-state: `Ok(Some(record))` is a value, `Ok(None)` is
/// exhaustion, and `Err` is a real failure — exhaustion and error are
/// never collapsed into one signal. Exhaustion is terminal; there is no
/// reset and no seeking back.
pub trait RecordSource {
    /// Pull the next record.
    fn next_record(&mut self) -> StreamResult<Option<LogRecord>>;

    /// Name used to attribute errors to this source.
    fn label(&self) -> &str;

    /// 1-based position of the most recently yielded record.
    fn line(&self) -> u64;
}
