//! Benchmark profiles for mutvec.
//!
//! - [`reference_vector`]: 10K-element double vector, sole holder
//! - [`shared_reference_vector`]: the same, with a second holder kept alive
//! - [`reference_mutable`]: the reference vector wrapped as mutable

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mutvec::{make_mutable, MutableVector};
use mutvec_core::{MutableError, Vector};

/// Element count of the reference profile.
pub const REFERENCE_LEN: usize = 10_000;

/// Double vector of [`REFERENCE_LEN`] elements with a single holder.
pub fn reference_vector() -> Vector {
    Vector::real((0..REFERENCE_LEN).map(|i| i as f64).collect::<Vec<_>>())
}

/// The reference vector plus a second holder, so wrapping must copy.
///
/// Returns `(input, keepalive)`; pass `input` to `make_mutable` and hold
/// `keepalive` until the measurement ends.
pub fn shared_reference_vector() -> (Vector, Vector) {
    let input = reference_vector();
    let keepalive = input.clone();
    (input, keepalive)
}

/// The reference vector wrapped as a mutable vector.
pub fn reference_mutable() -> Result<MutableVector, MutableError> {
    make_mutable(reference_vector())
}
