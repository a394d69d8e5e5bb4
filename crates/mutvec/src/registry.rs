//! Class registry and the wrap/check entry points.
//!
//! [`ClassRegistry`] maps class names to their [`KindDescriptor`]. The
//! process-wide registry is built once, on first use, with both supported
//! classes; a private registry can be built from a [`ClassConfig`] for
//! isolated use.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use mutvec_buffer::MutableBuffer;
use mutvec_core::{ClassTag, MutableError, NumericKind, Vector, VectorAccess, VectorType};
use tracing::debug;

use crate::class::{KindDescriptor, MutableClass, MutableElement};
use crate::config::ClassConfig;
use crate::vector::{Mutable, MutableVector};

static GLOBAL: OnceLock<ClassRegistry> = OnceLock::new();

/// Registered mutable classes, keyed by class name.
///
/// Uses `IndexMap` for deterministic registration order: when two classes
/// of the same kind are registered, the first one serves that kind.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: IndexMap<&'static str, KindDescriptor>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the integer and floating-point classes
    /// under the names in `config`.
    pub fn with_config(config: &ClassConfig) -> Self {
        let mut registry = Self::new();
        registry.register_kind(i32::descriptor(MutableClass::new(
            config.integer_class,
            config.package,
        )));
        registry.register_kind(f64::descriptor(MutableClass::new(
            config.real_class,
            config.package,
        )));
        registry
    }

    /// The process-wide registry with the default class names.
    ///
    /// Initialized on first call; never mutated afterwards.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::with_config(&ClassConfig::default()))
    }

    /// Register a class and return its identity tag.
    ///
    /// Registering a name that is already present keeps the existing class
    /// and returns its tag; `descriptor` is dropped.
    pub fn register_kind(&mut self, descriptor: KindDescriptor) -> ClassTag {
        if let Some(existing) = self.classes.get(descriptor.name()) {
            debug!(
                class = existing.name(),
                tag = %existing.tag(),
                "class already registered"
            );
            return existing.tag();
        }
        let tag = descriptor.tag();
        debug!(
            class = descriptor.name(),
            package = descriptor.package(),
            kind = %descriptor.kind(),
            tag = %tag,
            "registered mutable class"
        );
        self.classes.insert(descriptor.name(), descriptor);
        tag
    }

    /// Look up a class by name.
    pub fn get(&self, name: &str) -> Option<&KindDescriptor> {
        self.classes.get(name)
    }

    /// The class serving `kind`: the first registered of that kind.
    pub fn descriptor(&self, kind: NumericKind) -> Option<&KindDescriptor> {
        self.classes.values().find(|d| d.kind() == kind)
    }

    /// The typed class serving element type `T`.
    pub fn class<T: MutableElement>(&self) -> Option<&Arc<MutableClass<T>>> {
        self.descriptor(T::KIND).and_then(T::class)
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class is registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over registered classes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &KindDescriptor> {
        self.classes.values()
    }

    /// Wrap `data` as a mutable vector.
    ///
    /// Takes ownership of `data`. If another holder of the same storage
    /// exists, the storage is copied so that holder never observes writes
    /// made through the returned wrapper; otherwise it is adopted as is.
    ///
    /// # Errors
    ///
    /// [`MutableError::UnsupportedKind`] if `data` is neither integer nor
    /// double, or if no class is registered for its kind.
    pub fn make_mutable(&self, data: Vector) -> Result<MutableVector, MutableError> {
        match data.vector_type() {
            VectorType::Integer => self.wrap::<i32>(data),
            VectorType::Real => self.wrap::<f64>(data),
            kind => {
                debug!(kind = %kind, "rejected mutable vector request");
                Err(MutableError::UnsupportedKind { kind })
            }
        }
    }

    fn wrap<T: MutableElement>(&self, data: Vector) -> Result<MutableVector, MutableError> {
        let class = self.class::<T>().ok_or(MutableError::UnsupportedKind {
            kind: T::KIND.vector_type(),
        })?;
        let buffer = MutableBuffer::from_vector(data)?;
        Ok(T::wrap(Mutable::new(Arc::clone(class), buffer)))
    }

    /// Whether `x` is a mutable vector of this registry's class for its
    /// own kind. `false` for every other type, without error.
    pub fn is_mutable<V: VectorAccess + ?Sized>(&self, x: &V) -> bool {
        match x.vector_type().numeric_kind() {
            Some(kind) => self.inherits(x, kind),
            None => false,
        }
    }

    /// Whether `x` carries the tag of the class registered for `kind`.
    pub fn inherits<V: VectorAccess + ?Sized>(&self, x: &V, kind: NumericKind) -> bool {
        match (x.class_tag(), self.descriptor(kind)) {
            (Some(tag), Some(descriptor)) => descriptor.tag() == tag,
            _ => false,
        }
    }
}
