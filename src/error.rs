use std::fmt;

/// A specialized `Result` type for list and cursor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`List`](crate::List) and its cursors.
///
/// Every fallible operation checks its preconditions before touching the
/// linked structure, so a returned error always means the list is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// An index was outside the inclusive range `[0..max]` accepted by the
    /// operation. `max` is `-1` when no index is valid (e.g. reading from an
    /// empty list).
    IndexOutOfRange { index: usize, max: isize },
    /// A cursor was asked to step past either end of the list.
    NoSuchElement,
    /// `set` or `remove` was called on a cursor that has not returned an
    /// element since its creation, its last seek, or its last mutation.
    InvalidCursorState,
}

impl Error {
    /// An out-of-range error for operations addressing an element, where the
    /// valid bound is `[0..len-1]`.
    pub(crate) fn element_index(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange {
            index,
            max: len as isize - 1,
        }
    }

    /// An out-of-range error for operations addressing a position between
    /// elements, where the valid bound is `[0..len]`.
    pub(crate) fn position(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange {
            index,
            max: len as isize,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, max } => write!(
                f,
                "the index ({}) is outside the allowed range: [0..{}]",
                index, max
            ),
            Error::NoSuchElement => f.write_str("the cursor has no element in that direction"),
            Error::InvalidCursorState => f.write_str(
                "the cursor has not returned an element since its last seek or mutation",
            ),
        }
    }
}

impl std::error::Error for Error {}
