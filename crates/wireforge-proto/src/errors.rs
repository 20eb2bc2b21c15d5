//! Codec error types.
//!
//! Every bounds or length violation is detected before data is produced or
//! consumed, and surfaces as one of these variants. Cursor and buffer state
//! are left untouched by a failed operation.

use thiserror::Error;

/// Convenience alias for codec results.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors produced by the packet codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WireError {
    /// A read would extend past the end of the payload.
    ///
    /// The read cursor is unchanged; the caller can recover or drop the
    /// packet.
    #[error("reading outside packet (offset: {offset}, need: {need}, packet size: {len})")]
    OutOfBounds {
        /// Offset the read started from.
        offset: usize,
        /// Bytes the field required.
        need: usize,
        /// Total payload size.
        len: usize,
    },

    /// A string's encoded length does not fit its length-prefix field.
    ///
    /// The write is rejected before any bytes are committed; truncation
    /// would silently corrupt the field stream for the peer.
    #[error("{what} too long ({len} > {max})")]
    LengthExceeded {
        /// Which string shape overflowed.
        what: &'static str,
        /// Actual encoded length.
        len: usize,
        /// Maximum the prefix can represent.
        max: usize,
    },

    /// A received wire frame is too short to carry the command header.
    #[error("wire frame too short for command header ({len} bytes)")]
    TruncatedFrame {
        /// Length of the received frame.
        len: usize,
    },
}
