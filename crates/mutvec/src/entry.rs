//! Host-callable entry points over the process-wide registry.

use mutvec_core::{MutableError, Vector, VectorAccess};

use crate::registry::ClassRegistry;
use crate::vector::MutableVector;

/// Wrap `data` as a mutable vector of the matching class.
///
/// See [`ClassRegistry::make_mutable`].
///
/// # Errors
///
/// [`MutableError::UnsupportedKind`] unless `data` is an integer or double
/// vector.
pub fn make_mutable(data: Vector) -> Result<MutableVector, MutableError> {
    ClassRegistry::global().make_mutable(data)
}

/// Whether `x` is a mutable vector of its own kind's class.
pub fn is_mutable<V: VectorAccess + ?Sized>(x: &V) -> bool {
    ClassRegistry::global().is_mutable(x)
}
