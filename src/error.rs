//! Error types for boundum operations.

use thiserror::Error;

/// Errors that can occur while marshaling geometric values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The component buffer has fewer remaining slots than the value needs.
    #[error("component buffer underflow: {required} slots required, {remaining} remaining")]
    BufferUnderflow {
        /// Number of components the value reads or writes.
        required: usize,
        /// Slots left between the cursor and the end of the buffer.
        remaining: usize,
    },

    /// A buffer cursor was moved past the end of its storage.
    #[error("buffer position {position} is past capacity {capacity}")]
    PositionOutOfBounds {
        /// Requested cursor position.
        position: usize,
        /// Total number of slots in the buffer.
        capacity: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeomError>;
