//! Mutable class descriptor bundles.
//!
//! A [`MutableClass`] is the per-kind table of capability bindings that
//! every wrapper of that kind dispatches through. There is one class per
//! supported kind; [`KindDescriptor`] is the closed set of the two.

use std::fmt;
use std::sync::Arc;

use mutvec_buffer::{DataMut, MutableBuffer};
use mutvec_core::{AccessError, ClassTag, DataRef, Element, InspectConfig, NumericKind};

use crate::vector::{Mutable, MutableVector};

/// Capability bindings of a mutable class.
///
/// Each entry is a plain function over the wrapper's buffer. The default
/// table ([`Methods::mutable`]) reads and writes straight through to the
/// buffer.
pub struct Methods<T> {
    /// Current element count.
    pub length: fn(&MutableBuffer<T>) -> Result<usize, AccessError>,
    /// Element read.
    pub elt: fn(&MutableBuffer<T>, usize) -> Result<T, AccessError>,
    /// Bulk region copy-out: `(start, count, buf)`.
    pub get_region: fn(&MutableBuffer<T>, usize, usize, &mut [T]) -> Result<usize, AccessError>,
    /// Read-only data view.
    pub dataptr: fn(&MutableBuffer<T>) -> Result<DataRef<'_, T>, AccessError>,
    /// Writable data view.
    pub dataptr_mut: fn(&MutableBuffer<T>) -> Result<DataMut<'_, T>, AccessError>,
    /// Read-only data view without forcing.
    pub dataptr_or_null: fn(&MutableBuffer<T>) -> Option<DataRef<'_, T>>,
    /// Diagnostic description.
    pub inspect: fn(&MutableBuffer<T>, &mut dyn fmt::Write, &InspectConfig) -> fmt::Result,
}

impl<T: Element> Methods<T> {
    /// The bindings of a mutable vector class.
    pub fn mutable() -> Self {
        Self {
            length: MutableBuffer::<T>::len,
            elt: MutableBuffer::<T>::elt,
            get_region: MutableBuffer::<T>::get_region,
            dataptr: MutableBuffer::<T>::dataptr,
            dataptr_mut: MutableBuffer::<T>::dataptr_mut,
            dataptr_or_null: MutableBuffer::<T>::dataptr_or_null,
            inspect: mutable_inspect::<T>,
        }
    }
}

/// Header line naming the kind, then the storage one level deeper.
fn mutable_inspect<T: Element>(
    buffer: &MutableBuffer<T>,
    out: &mut dyn fmt::Write,
    config: &InspectConfig,
) -> fmt::Result {
    writeln!(out, "{:pre$}mutable {}", "", T::KIND, pre = config.pre)?;
    if config.can_descend() {
        buffer.inspect(out, &config.descend())?;
    }
    Ok(())
}

/// A registered mutable vector class for element type `T`.
///
/// Immutable after construction and shared by every wrapper of its kind.
/// A class never refers back to its wrappers.
pub struct MutableClass<T> {
    name: &'static str,
    package: &'static str,
    tag: ClassTag,
    methods: Methods<T>,
}

impl<T: Element> MutableClass<T> {
    /// Create a class with the default bindings and a fresh tag.
    pub fn new(name: &'static str, package: &'static str) -> Self {
        Self::with_methods(name, package, Methods::mutable())
    }

    /// Create a class with custom bindings and a fresh tag.
    pub fn with_methods(name: &'static str, package: &'static str, methods: Methods<T>) -> Self {
        Self {
            name,
            package,
            tag: ClassTag::next(),
            methods,
        }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Package the class belongs to.
    pub fn package(&self) -> &'static str {
        self.package
    }

    /// Identity tag carried by every wrapper of this class.
    pub fn tag(&self) -> ClassTag {
        self.tag
    }

    /// Element kind of this class.
    pub fn kind(&self) -> NumericKind {
        T::KIND
    }

    /// The capability bindings.
    pub fn methods(&self) -> &Methods<T> {
        &self.methods
    }
}

impl<T: Element> fmt::Debug for MutableClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableClass")
            .field("name", &self.name)
            .field("package", &self.package)
            .field("tag", &self.tag)
            .field("kind", &T::KIND)
            .finish()
    }
}

/// One registered class per supported kind.
#[derive(Clone, Debug)]
pub enum KindDescriptor {
    /// The integer class.
    Integer(Arc<MutableClass<i32>>),
    /// The floating-point class.
    Real(Arc<MutableClass<f64>>),
}

impl KindDescriptor {
    /// Class name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer(class) => class.name(),
            Self::Real(class) => class.name(),
        }
    }

    /// Package the class belongs to.
    pub fn package(&self) -> &'static str {
        match self {
            Self::Integer(class) => class.package(),
            Self::Real(class) => class.package(),
        }
    }

    /// Identity tag of the class.
    pub fn tag(&self) -> ClassTag {
        match self {
            Self::Integer(class) => class.tag(),
            Self::Real(class) => class.tag(),
        }
    }

    /// Element kind of the class.
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::Integer(_) => NumericKind::Integer,
            Self::Real(_) => NumericKind::Real,
        }
    }
}

/// Element types with a mutable class: the bridge between a generic `T`
/// and the closed [`KindDescriptor`] / [`MutableVector`] variants.
pub trait MutableElement: Element {
    /// Wrap a class of this kind as a descriptor.
    fn descriptor(class: MutableClass<Self>) -> KindDescriptor;

    /// The class inside `descriptor`, if it is of this kind.
    fn class(descriptor: &KindDescriptor) -> Option<&Arc<MutableClass<Self>>>;

    /// Lift a typed wrapper into the kind-tagged wrapper.
    fn wrap(vector: Mutable<Self>) -> MutableVector;

    /// The typed wrapper inside `vector`, if it is of this kind.
    fn unwrap(vector: &MutableVector) -> Option<&Mutable<Self>>;
}

impl MutableElement for i32 {
    fn descriptor(class: MutableClass<Self>) -> KindDescriptor {
        KindDescriptor::Integer(Arc::new(class))
    }

    fn class(descriptor: &KindDescriptor) -> Option<&Arc<MutableClass<Self>>> {
        match descriptor {
            KindDescriptor::Integer(class) => Some(class),
            KindDescriptor::Real(_) => None,
        }
    }

    fn wrap(vector: Mutable<Self>) -> MutableVector {
        MutableVector::Integer(vector)
    }

    fn unwrap(vector: &MutableVector) -> Option<&Mutable<Self>> {
        match vector {
            MutableVector::Integer(v) => Some(v),
            MutableVector::Real(_) => None,
        }
    }
}

impl MutableElement for f64 {
    fn descriptor(class: MutableClass<Self>) -> KindDescriptor {
        KindDescriptor::Real(Arc::new(class))
    }

    fn class(descriptor: &KindDescriptor) -> Option<&Arc<MutableClass<Self>>> {
        match descriptor {
            KindDescriptor::Real(class) => Some(class),
            KindDescriptor::Integer(_) => None,
        }
    }

    fn wrap(vector: Mutable<Self>) -> MutableVector {
        MutableVector::Real(vector)
    }

    fn unwrap(vector: &MutableVector) -> Option<&Mutable<Self>> {
        match vector {
            MutableVector::Real(v) => Some(v),
            MutableVector::Integer(_) => None,
        }
    }
}
