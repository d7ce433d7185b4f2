use logweave_types::{LogInstant, LogRecord};

use crate::error::{StreamError, StreamResult};
use crate::traits::RecordSource;

/// One peek position of the merge.
enum Slot {
    /// Holds the next record from this side.
    Ready(LogRecord),
    /// Consumed by the previous pull; refilled before the next comparison.
    Empty,
    /// The source returned `None`; terminal.
    Exhausted,
}

impl Slot {
    fn from_pull(pulled: Option<LogRecord>) -> Self {
        match pulled {
            Some(record) => Slot::Ready(record),
            None => Slot::Exhausted,
        }
    }

    /// Take the record out, leaving the slot empty.
    fn take(&mut self) -> Option<LogRecord> {
        match std::mem::replace(self, Slot::Empty) {
            Slot::Ready(record) => Some(record),
            Slot::Exhausted => {
                *self = Slot::Exhausted;
                None
            }
            Slot::Empty => None,
        }
    }
}

/// Two-way streaming merge over a pair of record sources.
///
/// A classic two-pointer merge: one peek slot per side, refilled on
/// demand, so memory is bounded by two records regardless of input size.
/// Records are emitted in non-decreasing timestamp order with strict
/// left-source priority on ties.
///
/// A consumed slot is refilled at the start of the *next* pull, not when
/// its record is emitted — an emitted record always reaches the caller
/// before a failure on the following record surfaces. Timestamps are
/// parsed only while both sides are live; once one source is exhausted
/// the remainder of the other is passed through untouched. Any source or
/// extraction failure aborts the merge — there is no recovery and no
/// reordering across a refill boundary.
pub struct MergeStream<L, R> {
    left: L,
    right: R,
    left_slot: Slot,
    right_slot: Slot,
}

impl<L: RecordSource, R: RecordSource> MergeStream<L, R> {
    /// Prime both peek slots and return the merged stream.
    ///
    /// A source that is already exhausted leaves its slot terminal; a
    /// source that fails on the first pull aborts construction.
    pub fn new(mut left: L, mut right: R) -> StreamResult<Self> {
        let left_slot = Slot::from_pull(left.next_record()?);
        let right_slot = Slot::from_pull(right.next_record()?);
        Ok(Self {
            left,
            right,
            left_slot,
            right_slot,
        })
    }

    /// Pull the next record in merged order.
    ///
    /// `Ok(None)` means both sources are exhausted.
    pub fn next_merged(&mut self) -> StreamResult<Option<LogRecord>> {
        self.refill()?;

        let emit_left = match (&self.left_slot, &self.right_slot) {
            (Slot::Ready(a), Slot::Ready(b)) => {
                instant_at(&self.left, a)? <= instant_at(&self.right, b)?
            }
            (Slot::Ready(_), _) => true,
            (_, Slot::Ready(_)) => false,
            _ => return Ok(None),
        };

        if emit_left {
            Ok(self.left_slot.take())
        } else {
            Ok(self.right_slot.take())
        }
    }

    /// Refill whichever slots the previous pull consumed.
    fn refill(&mut self) -> StreamResult<()> {
        if matches!(self.left_slot, Slot::Empty) {
            self.left_slot = Slot::from_pull(self.left.next_record()?);
        }
        if matches!(self.right_slot, Slot::Empty) {
            self.right_slot = Slot::from_pull(self.right.next_record()?);
        }
        Ok(())
    }
}

impl<L: RecordSource, R: RecordSource> Iterator for MergeStream<L, R> {
    type Item = StreamResult<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_merged().transpose()
    }
}

/// Extract a record's instant, attributing failures to its source.
fn instant_at<S: RecordSource>(source: &S, record: &LogRecord) -> StreamResult<LogInstant> {
    LogInstant::of(record).map_err(|cause| StreamError::Timestamp {
        label: source.label().to_string(),
        line: source.line(),
        cause,
    })
}
