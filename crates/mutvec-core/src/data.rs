//! Read-only data views and bounds-checked element helpers.
//!
//! [`DataRef`] is what a read-only pointer request hands out. Plain host
//! vectors lend a slice directly; mutable storage lends a runtime borrow
//! guard, so a live writer can never coexist with a reader.

use std::cell::Ref;
use std::fmt;
use std::ops::Deref;

use crate::error::AccessError;

/// A read-only view of a vector's current elements.
pub enum DataRef<'a, T> {
    /// Borrowed directly from immutable storage.
    Slice(&'a [T]),
    /// Borrow guard over mutable storage; released on drop.
    Guard(Ref<'a, [T]>),
}

impl<T> Deref for DataRef<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Self::Slice(slice) => *slice,
            Self::Guard(guard) => &**guard,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DataRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Read the element at `index`, rejecting out-of-range indices.
pub fn element_at<T: Copy>(data: &[T], index: usize) -> Result<T, AccessError> {
    data.get(index).copied().ok_or(AccessError::IndexOutOfRange {
        index,
        len: data.len(),
    })
}

/// Copy up to `count` elements starting at `start` into `buf`.
///
/// Returns the number of elements copied, which is less than `count` when
/// the region runs past the end of `data` or `buf` is shorter. A `start`
/// equal to the length copies nothing; a `start` past it is an error.
pub fn copy_region<T: Copy>(
    data: &[T],
    start: usize,
    count: usize,
    buf: &mut [T],
) -> Result<usize, AccessError> {
    if start > data.len() {
        return Err(AccessError::RegionOutOfRange {
            start,
            len: data.len(),
        });
    }
    let n = count.min(data.len() - start).min(buf.len());
    buf[..n].copy_from_slice(&data[start..start + n]);
    Ok(n)
}
