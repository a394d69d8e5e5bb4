//! Capability traits shared by plain and mutable vectors.
//!
//! Generic host code reads vectors through these traits only, which is
//! what makes a mutable vector indistinguishable from a plain one apart
//! from its [`ClassTag`].

use std::fmt;

use crate::data::DataRef;
use crate::error::AccessError;
use crate::id::ClassTag;
use crate::inspect::InspectConfig;
use crate::kind::{Element, VectorType};

/// Kind-independent access to any host array value.
pub trait VectorAccess {
    /// Dynamic type tag.
    fn vector_type(&self) -> VectorType;

    /// Current number of elements.
    ///
    /// Fails only if the storage is exclusively borrowed by a writer.
    fn length(&self) -> Result<usize, AccessError>;

    /// Identity tag of the vector's class. `None` for plain vectors.
    fn class_tag(&self) -> Option<ClassTag> {
        None
    }

    /// Write a human-readable description for debugging.
    fn inspect(&self, out: &mut dyn fmt::Write, config: &InspectConfig) -> fmt::Result;
}

/// Typed element access for vectors holding `T`.
///
/// Every method checks that the vector actually holds `T` and fails with
/// [`AccessError::KindMismatch`] otherwise.
pub trait NumericAccess<T: Element>: VectorAccess {
    /// Read the element at `index`.
    fn elt(&self, index: usize) -> Result<T, AccessError>;

    /// Copy up to `count` elements from `start` into `buf`.
    ///
    /// Returns the number of elements copied; never reads past the end.
    fn get_region(&self, start: usize, count: usize, buf: &mut [T]) -> Result<usize, AccessError>;

    /// A read-only view of the elements, or `None` if one cannot be lent
    /// without further work.
    fn dataptr_or_null(&self) -> Option<DataRef<'_, T>>;
}
