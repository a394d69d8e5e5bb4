//! The mutable vector wrapper.
//!
//! [`Mutable<T>`] pairs one [`MutableBuffer`] with the class it was created
//! under; every capability call goes through that class's bindings.
//! [`MutableVector`] is the kind-tagged form that flows through host code.

use std::fmt;
use std::sync::Arc;

use mutvec_buffer::{DataMut, MutableBuffer};
use mutvec_core::{
    AccessError, ClassTag, DataRef, Element, InspectConfig, NumericAccess, NumericKind, Vector,
    VectorAccess, VectorType,
};

use crate::class::{MutableClass, MutableElement};

/// A mutable vector of element type `T`.
///
/// Clones share both the class and the storage, so every holder of a
/// clone observes writes made through any other.
pub struct Mutable<T> {
    class: Arc<MutableClass<T>>,
    buffer: MutableBuffer<T>,
}

impl<T: Element> Mutable<T> {
    pub(crate) fn new(class: Arc<MutableClass<T>>, buffer: MutableBuffer<T>) -> Self {
        Self { class, buffer }
    }

    /// The class this vector dispatches through.
    pub fn class(&self) -> &MutableClass<T> {
        &self.class
    }

    /// Current number of elements.
    pub fn len(&self) -> Result<usize, AccessError> {
        (self.class.methods().length)(&self.buffer)
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> Result<bool, AccessError> {
        Ok(self.len()? == 0)
    }

    /// Read the element at `index`.
    pub fn elt(&self, index: usize) -> Result<T, AccessError> {
        (self.class.methods().elt)(&self.buffer, index)
    }

    /// Copy up to `count` elements from `start` into `buf`.
    pub fn get_region(&self, start: usize, count: usize, buf: &mut [T]) -> Result<usize, AccessError> {
        (self.class.methods().get_region)(&self.buffer, start, count, buf)
    }

    /// Read-only view of the current elements.
    pub fn dataptr(&self) -> Result<DataRef<'_, T>, AccessError> {
        (self.class.methods().dataptr)(&self.buffer)
    }

    /// Exclusive writable view of the elements, released on drop.
    pub fn dataptr_mut(&self) -> Result<DataMut<'_, T>, AccessError> {
        (self.class.methods().dataptr_mut)(&self.buffer)
    }

    /// Read-only view, or `None` while a writer holds the storage.
    pub fn dataptr_or_null(&self) -> Option<DataRef<'_, T>> {
        (self.class.methods().dataptr_or_null)(&self.buffer)
    }

    /// Overwrite the element at `index` through the writable view.
    pub fn set_elt(&self, index: usize, value: T) -> Result<(), AccessError> {
        let mut data = self.dataptr_mut()?;
        let len = data.len();
        let slot = data
            .get_mut(index)
            .ok_or(AccessError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Number of wrapper handles sharing the storage.
    pub fn holders(&self) -> usize {
        self.buffer.holders()
    }

    /// Copy the current contents into a fresh plain host vector.
    pub fn duplicate(&self) -> Result<Vector, AccessError> {
        self.buffer.to_vector()
    }
}

impl<T> Clone for Mutable<T> {
    fn clone(&self) -> Self {
        Self {
            class: Arc::clone(&self.class),
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: Element> fmt::Debug for Mutable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutable")
            .field("class", &self.class.name())
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl<T: Element> VectorAccess for Mutable<T> {
    fn vector_type(&self) -> VectorType {
        T::KIND.vector_type()
    }

    fn length(&self) -> Result<usize, AccessError> {
        self.len()
    }

    fn class_tag(&self) -> Option<ClassTag> {
        Some(self.class.tag())
    }

    fn inspect(&self, out: &mut dyn fmt::Write, config: &InspectConfig) -> fmt::Result {
        (self.class.methods().inspect)(&self.buffer, out, config)
    }
}

impl<T: Element> NumericAccess<T> for Mutable<T> {
    fn elt(&self, index: usize) -> Result<T, AccessError> {
        Mutable::elt(self, index)
    }

    fn get_region(&self, start: usize, count: usize, buf: &mut [T]) -> Result<usize, AccessError> {
        Mutable::get_region(self, start, count, buf)
    }

    fn dataptr_or_null(&self) -> Option<DataRef<'_, T>> {
        Mutable::dataptr_or_null(self)
    }
}

/// A mutable vector of either supported kind.
///
/// The kind is fixed at construction: the variant never changes, and each
/// variant only reaches the class of its own kind.
#[derive(Clone, Debug)]
pub enum MutableVector {
    /// Integer elements.
    Integer(Mutable<i32>),
    /// Floating-point elements.
    Real(Mutable<f64>),
}

impl MutableVector {
    /// Element kind.
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::Integer(_) => NumericKind::Integer,
            Self::Real(_) => NumericKind::Real,
        }
    }

    /// Name of the class this vector was created under.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Integer(v) => v.class().name(),
            Self::Real(v) => v.class().name(),
        }
    }

    /// The integer view, if this is an integer vector.
    pub fn as_integer(&self) -> Option<&Mutable<i32>> {
        self.typed()
    }

    /// The floating-point view, if this is a floating-point vector.
    pub fn as_real(&self) -> Option<&Mutable<f64>> {
        self.typed()
    }

    /// The typed view for `T`, if this vector holds `T`.
    pub fn typed<T: MutableElement>(&self) -> Option<&Mutable<T>> {
        T::unwrap(self)
    }

    /// Current number of elements.
    pub fn len(&self) -> Result<usize, AccessError> {
        match self {
            Self::Integer(v) => v.len(),
            Self::Real(v) => v.len(),
        }
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> Result<bool, AccessError> {
        Ok(self.len()? == 0)
    }

    /// Number of wrapper handles sharing the storage.
    pub fn holders(&self) -> usize {
        match self {
            Self::Integer(v) => v.holders(),
            Self::Real(v) => v.holders(),
        }
    }

    /// Copy the current contents into a fresh plain host vector.
    ///
    /// The copy is exclusively held, so wrapping it again adopts it.
    pub fn duplicate(&self) -> Result<Vector, AccessError> {
        match self {
            Self::Integer(v) => v.duplicate(),
            Self::Real(v) => v.duplicate(),
        }
    }

    fn expect_kind<T: MutableElement>(&self) -> Result<&Mutable<T>, AccessError> {
        self.typed::<T>().ok_or(AccessError::KindMismatch {
            expected: T::KIND.vector_type(),
            found: self.kind().vector_type(),
        })
    }
}

impl VectorAccess for MutableVector {
    fn vector_type(&self) -> VectorType {
        self.kind().vector_type()
    }

    fn length(&self) -> Result<usize, AccessError> {
        self.len()
    }

    fn class_tag(&self) -> Option<ClassTag> {
        match self {
            Self::Integer(v) => v.class_tag(),
            Self::Real(v) => v.class_tag(),
        }
    }

    fn inspect(&self, out: &mut dyn fmt::Write, config: &InspectConfig) -> fmt::Result {
        match self {
            Self::Integer(v) => v.inspect(out, config),
            Self::Real(v) => v.inspect(out, config),
        }
    }
}

impl<T: MutableElement> NumericAccess<T> for MutableVector {
    fn elt(&self, index: usize) -> Result<T, AccessError> {
        self.expect_kind::<T>()?.elt(index)
    }

    fn get_region(&self, start: usize, count: usize, buf: &mut [T]) -> Result<usize, AccessError> {
        self.expect_kind::<T>()?.get_region(start, count, buf)
    }

    fn dataptr_or_null(&self) -> Option<DataRef<'_, T>> {
        self.typed::<T>()?.dataptr_or_null()
    }
}

impl fmt::Display for MutableVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inspect(f, &InspectConfig::default())
    }
}
