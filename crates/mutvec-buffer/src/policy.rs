//! Storage duplication policy.
//!
//! Decides, once per construction, whether an incoming host vector can be
//! adopted as mutable storage or must be copied first. The input is taken
//! by value: a caller that wants to keep observing the original keeps a
//! clone, which makes the input shared and forces the copy branch.

use mutvec_core::{Element, MutableError, Vector, VectorType};
use tracing::debug;

/// How a [`PreparedStorage`] obtained its elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// The input had a single holder; its storage was taken over as is.
    Adopted,
    /// The input was shared; the elements are an independent deep copy.
    Copied,
}

/// Elements that no holder other than the new owner can observe.
#[derive(Debug)]
pub struct PreparedStorage<T> {
    data: Vec<T>,
    provenance: Provenance,
}

impl<T> PreparedStorage<T> {
    /// Whether the elements were adopted or copied.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Release the elements to the new owner.
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

fn mismatch<T: Element>(found: VectorType) -> MutableError {
    match found.numeric_kind() {
        Some(_) => MutableError::KindMismatch {
            expected: T::KIND.vector_type(),
            found,
        },
        None => MutableError::UnsupportedKind { kind: found },
    }
}

/// Obtain storage for `input` that is safe to mutate in place.
///
/// If `input` is the only holder of its storage, the storage is adopted
/// without copying. Otherwise an independent deep copy is made and the
/// other holders keep the original untouched. `input` is released on every
/// path, including the error paths.
///
/// # Errors
///
/// [`MutableError::UnsupportedKind`] if `input` is not a numeric vector,
/// [`MutableError::KindMismatch`] if it holds the other numeric kind.
pub fn prepare_storage<T: Element>(input: Vector) -> Result<PreparedStorage<T>, MutableError> {
    let found = input.vector_type();
    if found.numeric_kind() != Some(T::KIND) {
        return Err(mismatch::<T>(found));
    }

    let (data, provenance) = match input.into_storage() {
        Ok(storage) => {
            let data = T::take(storage).map_err(|s| mismatch::<T>(s.vector_type()))?;
            (data, Provenance::Adopted)
        }
        Err(shared) => {
            let data = shared
                .as_slice::<T>()
                .map(<[T]>::to_vec)
                .ok_or_else(|| mismatch::<T>(found))?;
            (data, Provenance::Copied)
        }
    };

    let kind = T::KIND;
    debug!(
        kind = %kind,
        len = data.len(),
        provenance = ?provenance,
        "prepared mutable storage"
    );
    Ok(PreparedStorage { data, provenance })
}
