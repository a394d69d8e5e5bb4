//! Host array values with copy-on-write sharing.
//!
//! A [`Vector`] is the plain, immutable-by-convention array value that
//! flows through the host. Cloning it copies a handle, never the data, so
//! a cloned vector counts as referenced by another holder. Writers go
//! through [`Vector::make_mut`], which duplicates shared storage before
//! mutating it.

use std::fmt;
use std::sync::Arc;

use crate::data::{self, DataRef};
use crate::error::AccessError;
use crate::inspect::{self, InspectConfig};
use crate::kind::{Element, VectorType};
use crate::traits::{NumericAccess, VectorAccess};

/// Flat element storage of a host vector, one variant per [`VectorType`].
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    /// Boolean values.
    Logical(Vec<bool>),
    /// 32-bit signed integers.
    Integer(Vec<i32>),
    /// 64-bit floating-point values.
    Real(Vec<f64>),
    /// Complex numbers as `(re, im)` pairs.
    Complex(Vec<(f64, f64)>),
    /// Strings.
    Character(Vec<String>),
    /// Raw bytes.
    Raw(Vec<u8>),
}

impl Storage {
    /// The type tag of this storage.
    pub fn vector_type(&self) -> VectorType {
        match self {
            Self::Logical(_) => VectorType::Logical,
            Self::Integer(_) => VectorType::Integer,
            Self::Real(_) => VectorType::Real,
            Self::Complex(_) => VectorType::Complex,
            Self::Character(_) => VectorType::Character,
            Self::Raw(_) => VectorType::Raw,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Logical(v) => v.len(),
            Self::Integer(v) => v.len(),
            Self::Real(v) => v.len(),
            Self::Complex(v) => v.len(),
            Self::Character(v) => v.len(),
            Self::Raw(v) => v.len(),
        }
    }

    /// Whether the storage holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write a one-line description of this storage node.
    pub fn inspect(&self, out: &mut dyn fmt::Write, config: &InspectConfig) -> fmt::Result {
        let ty = self.vector_type();
        let len = self.len();
        match self {
            Self::Logical(v) => inspect::write_node(
                out,
                config,
                ty,
                len,
                v.iter().map(|&b| if b { "TRUE" } else { "FALSE" }),
            ),
            Self::Integer(v) => inspect::write_node(out, config, ty, len, v),
            Self::Real(v) => inspect::write_node(out, config, ty, len, v),
            Self::Complex(v) => inspect::write_node(
                out,
                config,
                ty,
                len,
                v.iter().map(|(re, im)| format!("{re}{im:+}i")),
            ),
            Self::Character(v) => {
                inspect::write_node(out, config, ty, len, v.iter().map(|s| format!("{s:?}")))
            }
            Self::Raw(v) => {
                inspect::write_node(out, config, ty, len, v.iter().map(|b| format!("{b:02x}")))
            }
        }
    }
}

/// An immutable-by-convention host array value.
///
/// The storage sits behind an `Arc`. Every clone is another holder; while
/// more than one holder exists the vector [`is_shared`](Vector::is_shared)
/// and no holder may observe a mutation made by another.
#[derive(Clone, Debug)]
pub struct Vector {
    data: Arc<Storage>,
}

impl Vector {
    /// Create a vector that exclusively owns `storage`.
    pub fn new(storage: Storage) -> Self {
        Self {
            data: Arc::new(storage),
        }
    }

    /// Create an integer vector.
    pub fn integer(data: impl Into<Vec<i32>>) -> Self {
        Self::new(Storage::Integer(data.into()))
    }

    /// Create a floating-point vector.
    pub fn real(data: impl Into<Vec<f64>>) -> Self {
        Self::new(Storage::Real(data.into()))
    }

    /// Create a logical vector.
    pub fn logical(data: impl Into<Vec<bool>>) -> Self {
        Self::new(Storage::Logical(data.into()))
    }

    /// Create a complex vector from `(re, im)` pairs.
    pub fn complex(data: impl Into<Vec<(f64, f64)>>) -> Self {
        Self::new(Storage::Complex(data.into()))
    }

    /// Create a character vector.
    pub fn character<I, S>(data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Storage::Character(data.into_iter().map(Into::into).collect()))
    }

    /// Create a raw byte vector.
    pub fn raw(data: impl Into<Vec<u8>>) -> Self {
        Self::new(Storage::Raw(data.into()))
    }

    /// Dynamic type tag of this vector.
    pub fn vector_type(&self) -> VectorType {
        self.data.vector_type()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the untyped storage.
    pub fn storage(&self) -> &Storage {
        &self.data
    }

    /// Borrow the elements if this vector holds `T`.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::slice(&self.data)
    }

    /// Whether another holder may observe this vector's storage.
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.data) > 1
    }

    /// Number of holders of this vector's storage.
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// An independent copy with identical contents and type.
    pub fn deep_copy(&self) -> Self {
        Self::new(Storage::clone(&self.data))
    }

    /// Take exclusive ownership of the storage.
    ///
    /// Succeeds only when this is the sole holder; otherwise the vector is
    /// handed back untouched.
    pub fn into_storage(self) -> Result<Storage, Self> {
        Arc::try_unwrap(self.data).map_err(|data| Self { data })
    }

    /// Copy-on-write access to the storage.
    ///
    /// Duplicates the storage first if another holder exists, so other
    /// holders never observe the write.
    pub fn make_mut(&mut self) -> &mut Storage {
        Arc::make_mut(&mut self.data)
    }

    /// Copy-on-write access to the elements if this vector holds `T`.
    pub fn as_mut_slice<T: Element>(&mut self) -> Option<&mut [T]> {
        if T::slice(&self.data).is_none() {
            return None;
        }
        T::slice_mut(self.make_mut())
    }

    fn typed<T: Element>(&self) -> Result<&[T], AccessError> {
        T::slice(&self.data).ok_or(AccessError::KindMismatch {
            expected: T::KIND.vector_type(),
            found: self.vector_type(),
        })
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<Storage> for Vector {
    fn from(storage: Storage) -> Self {
        Self::new(storage)
    }
}

impl From<Vec<i32>> for Vector {
    fn from(data: Vec<i32>) -> Self {
        Self::integer(data)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::real(data)
    }
}

impl VectorAccess for Vector {
    fn vector_type(&self) -> VectorType {
        self.data.vector_type()
    }

    fn length(&self) -> Result<usize, AccessError> {
        Ok(self.data.len())
    }

    fn inspect(&self, out: &mut dyn fmt::Write, config: &InspectConfig) -> fmt::Result {
        self.data.inspect(out, config)
    }
}

impl<T: Element> NumericAccess<T> for Vector {
    fn elt(&self, index: usize) -> Result<T, AccessError> {
        data::element_at(self.typed::<T>()?, index)
    }

    fn get_region(&self, start: usize, count: usize, buf: &mut [T]) -> Result<usize, AccessError> {
        data::copy_region(self.typed::<T>()?, start, count, buf)
    }

    fn dataptr_or_null(&self) -> Option<DataRef<'_, T>> {
        T::slice(&self.data).map(DataRef::Slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_marks_both_holders_shared() {
        let a = Vector::integer(vec![1, 2, 3]);
        assert!(!a.is_shared());
        let b = a.clone();
        assert!(a.is_shared());
        assert!(b.is_shared());
        assert_eq!(a.holders(), 2);
        drop(b);
        assert!(!a.is_shared());
    }

    #[test]
    fn deep_copy_is_independent() {
        let a = Vector::real(vec![1.0, 2.0]);
        let mut b = a.deep_copy();
        assert!(!a.is_shared());
        assert!(!b.is_shared());
        b.as_mut_slice::<f64>().unwrap()[0] = 9.0;
        assert_eq!(a.as_slice::<f64>().unwrap(), &[1.0, 2.0]);
        assert_eq!(b.as_slice::<f64>().unwrap(), &[9.0, 2.0]);
    }

    #[test]
    fn into_storage_requires_sole_holder() {
        let a = Vector::integer(vec![4, 5]);
        let keep = a.clone();
        let a = a.into_storage().unwrap_err();
        drop(keep);
        assert_eq!(a.into_storage().unwrap(), Storage::Integer(vec![4, 5]));
    }

    #[test]
    fn make_mut_preserves_other_holders() {
        let original = Vector::integer(vec![1, 2, 3]);
        let mut writer = original.clone();
        writer.as_mut_slice::<i32>().unwrap()[0] = 100;
        assert_eq!(original.as_slice::<i32>().unwrap(), &[1, 2, 3]);
        assert_eq!(writer.as_slice::<i32>().unwrap(), &[100, 2, 3]);
    }

    #[test]
    fn as_mut_slice_of_wrong_kind_does_not_copy() {
        let original = Vector::integer(vec![1]);
        let mut other = original.clone();
        assert!(other.as_mut_slice::<f64>().is_none());
        assert!(original.is_shared());
    }

    #[test]
    fn numeric_access_checks_kind_and_bounds() {
        let v = Vector::integer(vec![10, 20, 30]);
        assert_eq!(NumericAccess::<i32>::elt(&v, 1), Ok(20));
        assert_eq!(
            NumericAccess::<i32>::elt(&v, 3),
            Err(AccessError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            NumericAccess::<f64>::elt(&v, 0),
            Err(AccessError::KindMismatch {
                expected: VectorType::Real,
                found: VectorType::Integer,
            })
        );
        assert!(NumericAccess::<f64>::dataptr_or_null(&v).is_none());
    }

    #[test]
    fn character_constructor_collects_strings() {
        let v = Vector::character(["a", "b"]);
        assert_eq!(v.vector_type(), VectorType::Character);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn inspect_plain_vector() {
        let v = Vector::integer(vec![1, 2, 3]);
        let mut out = String::new();
        v.inspect(&mut out, &InspectConfig::default()).unwrap();
        assert_eq!(out, "integer [len=3] 1, 2, 3\n");
    }

    #[test]
    fn inspect_formats_non_numeric_elements() {
        let config = InspectConfig::default();
        let mut out = String::new();
        Vector::logical(vec![true, false])
            .inspect(&mut out, &config)
            .unwrap();
        Vector::character(["x"]).inspect(&mut out, &config).unwrap();
        Vector::raw(vec![0xab]).inspect(&mut out, &config).unwrap();
        Vector::complex(vec![(1.0, -2.0)])
            .inspect(&mut out, &config)
            .unwrap();
        assert_eq!(
            out,
            "logical [len=2] TRUE, FALSE\n\
             character [len=1] \"x\"\n\
             raw [len=1] ab\n\
             complex [len=1] 1-2i\n"
        );
    }
}
