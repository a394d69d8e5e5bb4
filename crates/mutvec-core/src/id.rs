//! Class identity tokens.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ClassTag`] allocation.
static CLASS_TAG_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity token of a registered vector class.
///
/// Allocated from a monotonic atomic counter via [`ClassTag::next`]. Two
/// registrations always receive different tags, even under the same name,
/// so a tag identifies exactly one class for the life of the process.
/// Plain host vectors carry no tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassTag(u64);

impl ClassTag {
    /// Allocate a fresh, unique tag. Thread-safe.
    pub fn next() -> Self {
        Self(CLASS_TAG_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
