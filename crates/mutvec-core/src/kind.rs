//! Vector type tags and the numeric [`Element`] trait.

use std::fmt;

use crate::vector::Storage;

/// Dynamic type tag of a host vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorType {
    /// Boolean values.
    Logical,
    /// 32-bit signed integers.
    Integer,
    /// 64-bit floating-point values.
    Real,
    /// Complex numbers as `(re, im)` pairs.
    Complex,
    /// Strings.
    Character,
    /// Raw bytes.
    Raw,
}

impl VectorType {
    /// Host type name, as printed in diagnostics and error messages.
    ///
    /// Floating-point vectors are named `"double"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Logical => "logical",
            Self::Integer => "integer",
            Self::Real => "double",
            Self::Complex => "complex",
            Self::Character => "character",
            Self::Raw => "raw",
        }
    }

    /// The numeric kind for types that can back a mutable vector.
    ///
    /// Returns `None` for every other type.
    pub fn numeric_kind(self) -> Option<NumericKind> {
        match self {
            Self::Integer => Some(NumericKind::Integer),
            Self::Real => Some(NumericKind::Real),
            _ => None,
        }
    }
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element kinds that can back a mutable vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericKind {
    /// `i32` elements.
    Integer,
    /// `f64` elements.
    Real,
}

impl NumericKind {
    /// Every supported kind, in registration order.
    pub const ALL: [NumericKind; 2] = [NumericKind::Integer, NumericKind::Real];

    /// The host vector type carrying this kind.
    pub fn vector_type(self) -> VectorType {
        match self {
            Self::Integer => VectorType::Integer,
            Self::Real => VectorType::Real,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vector_type().name())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f64 {}
}

/// A numeric element type that can back a mutable vector.
///
/// Sealed: implemented for `i32` ([`NumericKind::Integer`]) and `f64`
/// ([`NumericKind::Real`]) only. The conversions let generic code move
/// between typed element vectors and untyped [`Storage`] without matching
/// on the storage variant.
pub trait Element:
    sealed::Sealed + Copy + Default + PartialEq + fmt::Debug + fmt::Display + 'static
{
    /// The kind this element type represents.
    const KIND: NumericKind;

    /// Borrow the elements of `storage` if it holds this element type.
    fn slice(storage: &Storage) -> Option<&[Self]>;

    /// Mutably borrow the elements of `storage` if it holds this element type.
    fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]>;

    /// Take the elements out of `storage`.
    ///
    /// Hands the storage back unchanged if it holds another type.
    fn take(storage: Storage) -> Result<Vec<Self>, Storage>;

    /// Wrap typed elements as host storage.
    fn into_storage(data: Vec<Self>) -> Storage;
}

impl Element for i32 {
    const KIND: NumericKind = NumericKind::Integer;

    fn slice(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::Integer(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]> {
        match storage {
            Storage::Integer(data) => Some(data.as_mut_slice()),
            _ => None,
        }
    }

    fn take(storage: Storage) -> Result<Vec<Self>, Storage> {
        match storage {
            Storage::Integer(data) => Ok(data),
            other => Err(other),
        }
    }

    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::Integer(data)
    }
}

impl Element for f64 {
    const KIND: NumericKind = NumericKind::Real;

    fn slice(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::Real(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    fn slice_mut(storage: &mut Storage) -> Option<&mut [Self]> {
        match storage {
            Storage::Real(data) => Some(data.as_mut_slice()),
            _ => None,
        }
    }

    fn take(storage: Storage) -> Result<Vec<Self>, Storage> {
        match storage {
            Storage::Real(data) => Ok(data),
            other => Err(other),
        }
    }

    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::Real(data)
    }
}
