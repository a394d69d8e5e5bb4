//! Mutable vectors: numeric host arrays that can be written in place.
//!
//! Host [`Vector`](types::Vector) values are copy-on-write and shared
//! freely. [`make_mutable`] turns one into a [`MutableVector`] whose storage
//! is private to the wrapper and its clones, so writes through
//! [`Mutable::dataptr_mut`] never leak into any other holder of the original.
//!
//! # Quick start
//!
//! ```rust
//! use mutvec::prelude::*;
//!
//! let v = make_mutable(Vector::integer(vec![1, 2, 3, 4])).unwrap();
//! let ints = v.as_integer().unwrap();
//! ints.dataptr_mut().unwrap()[2] = 99;
//!
//! assert_eq!(ints.elt(2), Ok(99));
//! assert_eq!(v.len(), Ok(4));
//! assert!(is_mutable(&v));
//! assert!(!is_mutable(&Vector::integer(vec![1])));
//! ```
//!
//! # Modules
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`types`] | `mutvec-core` | Host vectors, kinds, capability traits, errors |
//! | [`buffer`] | `mutvec-buffer` | Duplication policy and mutable storage |
//! | [`class`] | this crate | Per-kind class bundles |
//! | [`registry`] | this crate | Class registry, `make_mutable` / `is_mutable` |
//! | [`config`] | this crate | Class naming configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod class;
pub mod config;
pub mod entry;
pub mod registry;
pub mod vector;

/// Host vector model and capability traits (`mutvec-core`).
pub use mutvec_core as types;

/// Duplication policy and mutable storage buffers (`mutvec-buffer`).
pub use mutvec_buffer as buffer;

// Public re-exports for the primary API surface.
pub use class::{KindDescriptor, Methods, MutableClass, MutableElement};
pub use config::ClassConfig;
pub use entry::{is_mutable, make_mutable};
pub use registry::ClassRegistry;
pub use vector::{Mutable, MutableVector};

/// Common imports for typical use.
///
/// ```rust
/// use mutvec::prelude::*;
/// ```
pub mod prelude {
    // Host values and traits
    pub use mutvec_core::{
        InspectConfig, NumericAccess, NumericKind, Vector, VectorAccess, VectorType,
    };

    // Errors
    pub use mutvec_core::{AccessError, MutableError};

    // Mutable vectors
    pub use crate::entry::{is_mutable, make_mutable};
    pub use crate::registry::ClassRegistry;
    pub use crate::vector::{Mutable, MutableVector};
}
