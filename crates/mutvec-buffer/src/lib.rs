//! Mutable storage buffers for host vectors.
//!
//! Turns a plain, copy-on-write host [`Vector`](mutvec_core::Vector) into
//! storage that may be mutated in place without any other holder of the
//! original value noticing.
//!
//! # Architecture
//!
//! ```text
//! Vector (host value, Arc-shared)
//! └── prepare_storage()      sole holder → adopt, shared → deep copy
//!     └── PreparedStorage<T> Vec<T> + Provenance
//!         └── MutableBuffer<T>
//!             ├── Rc<RefCell<Vec<T>>> (one canonical buffer, no caching)
//!             ├── DataRef<T>  read-only borrow guard
//!             └── DataMut<T>  exclusive writable borrow guard
//! ```
//!
//! # Threading
//!
//! Buffers are single-threaded (`!Send`). Clones share the same storage;
//! overlapping borrows are reported as
//! [`AccessError::Borrowed`](mutvec_core::AccessError::Borrowed) instead of
//! panicking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod guard;
pub mod policy;

// Public re-exports for the primary API surface.
pub use buffer::MutableBuffer;
pub use guard::DataMut;
pub use policy::{prepare_storage, PreparedStorage, Provenance};
