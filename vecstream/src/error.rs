//! Errors signaled by vector and stream operations.

use thiserror::Error;

/// Errors returned by [`Vector`](crate::Vector) and [`Stream`](crate::Stream) operations.
///
/// Only out-of-range and empty-input conditions are signaled. Operations with a documented
/// default (`pop`, `get_or_default`, `find_first`) or a permissive contract (`delete`,
/// `delete_all`) never produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An index did not address an element, or an insertion point past the end.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },
    /// A half-open range `[from, to)` was inverted or extended past the end.
    #[error("range {from}..{to} out of bounds for length {len}")]
    RangeOutOfBounds {
        /// Inclusive start of the range.
        from: usize,
        /// Exclusive end of the range.
        to: usize,
        /// The length at the time of the call.
        len: usize,
    },
    /// A count of elements to skip or keep exceeded the length.
    #[error("count {count} exceeds length {len}")]
    CountOutOfRange {
        /// The requested count.
        count: usize,
        /// The length at the time of the call.
        len: usize,
    },
    /// An operation that needs at least one element was applied to an empty sequence.
    #[error("{operation} on an empty sequence")]
    EmptySequence {
        /// The name of the operation.
        operation: &'static str,
    },
}

/// A `Result` whose error is [`CollectionError`].
pub type Result<T> = std::result::Result<T, CollectionError>;
