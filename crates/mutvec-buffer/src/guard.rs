//! Scoped writable access to mutable storage.

use std::cell::RefMut;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Exclusive writable view of a [`MutableBuffer`](crate::MutableBuffer).
///
/// Created by [`MutableBuffer::dataptr_mut`](crate::MutableBuffer::dataptr_mut).
/// Writes land directly in the buffer's storage and are visible to every
/// read issued after the guard is dropped. While the guard lives, all other
/// access to the same storage fails with `AccessError::Borrowed`.
pub struct DataMut<'a, T> {
    guard: RefMut<'a, [T]>,
}

impl<'a, T> DataMut<'a, T> {
    pub(crate) fn new(guard: RefMut<'a, [T]>) -> Self {
        Self { guard }
    }
}

impl<T> Deref for DataMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.guard
    }
}

impl<T> DerefMut for DataMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.guard
    }
}

impl<T: fmt::Debug> fmt::Debug for DataMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
