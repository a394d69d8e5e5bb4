//! Core types and traits for mutable vectors.
//!
//! This is the leaf crate with zero internal dependencies. It models the
//! host array values that mutable vectors plug into: vector type tags,
//! numeric element kinds, copy-on-write [`Vector`] values, the capability
//! traits shared by plain and mutable vectors, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod data;
pub mod error;
pub mod id;
pub mod inspect;
pub mod kind;
pub mod traits;
pub mod vector;

// Public re-exports for the primary API surface.
pub use data::DataRef;
pub use error::{AccessError, MutableError};
pub use id::ClassTag;
pub use inspect::InspectConfig;
pub use kind::{Element, NumericKind, VectorType};
pub use traits::{NumericAccess, VectorAccess};
pub use vector::{Storage, Vector};
