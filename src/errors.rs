//! Error constants shared by the buffer types in this crate.

use core::fmt;

/// The error type for the buffer operations in this crate.
///
/// Only two kinds are ever returned by [`Lz77`](crate::Lz77): [`Error::Empty`]
/// from the read side and [`Error::Full`] from the write side.  Both are
/// recoverable; the caller retries after draining or refilling the buffer.
/// [`Error::BadDistance`] is returned by
/// [`SlidingWindow::lookup_byte`](crate::SlidingWindow::lookup_byte) when the
/// requested distance does not lie within the window.
///
/// Everything else (commit lengths out of range, configurations outside the
/// documented bounds, broken index invariants) is a programmer error and
/// panics with a diagnostic naming the violated precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A read operation found the buffer empty.
    Empty,
    /// A write operation found the buffer unable to accept any more bytes.
    Full,
    /// A lookup distance lies outside of the sliding window.
    BadDistance,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Error::Empty => "buffer is empty",
            Error::Full => "buffer is full",
            Error::BadDistance => "given distance lies outside of sliding window",
        };
        f.write_str(text)
    }
}

impl std::error::Error for Error {}
