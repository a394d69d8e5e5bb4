//! Error types for mutable vectors.
//!
//! Organized by subsystem: construction ([`MutableError`]) and the
//! capability surface ([`AccessError`]).

use thiserror::Error;

use crate::kind::VectorType;

/// Errors raised while wrapping a host vector as mutable.
///
/// No partial wrapper exists when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MutableError {
    /// The vector's type is neither integer nor double.
    #[error("mutable vectors for {kind} not supported yet")]
    UnsupportedKind {
        /// The offending type.
        kind: VectorType,
    },
    /// A typed construction path was handed a vector of the other numeric kind.
    #[error("expected {expected} vector, found {found}")]
    KindMismatch {
        /// Type the caller asked for.
        expected: VectorType,
        /// Type of the vector supplied.
        found: VectorType,
    },
}

/// Errors from the capability surface (element, region and data access).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Element index at or past the end of the vector.
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current length.
        len: usize,
    },
    /// Region start past the end of the vector.
    #[error("region start {start} out of range for vector of length {len}")]
    RegionOutOfRange {
        /// Requested start.
        start: usize,
        /// Current length.
        len: usize,
    },
    /// The storage is exclusively borrowed by a live writer.
    #[error("vector storage is exclusively borrowed for writing")]
    Borrowed,
    /// Typed access of the wrong element kind.
    #[error("expected {expected} vector, found {found}")]
    KindMismatch {
        /// Type the caller asked for.
        expected: VectorType,
        /// Type of the vector.
        found: VectorType,
    },
}
