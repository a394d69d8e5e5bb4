//! The mutable buffer and its capability surface.
//!
//! [`MutableBuffer`] owns exactly one element buffer. Every accessor reads
//! through to that buffer; nothing is cached, so a write made through a
//! [`DataMut`] guard is seen by the next read, including reads issued via
//! another clone of the same buffer.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use mutvec_core::data::{self, DataRef};
use mutvec_core::inspect::{self, InspectConfig};
use mutvec_core::{AccessError, Element, MutableError, Vector};

use crate::guard::DataMut;
use crate::policy::{prepare_storage, PreparedStorage};

/// Mutable element storage of one numeric kind.
///
/// Cloning a `MutableBuffer` shares the storage: all clones observe each
/// other's writes. The buffer length is fixed at construction.
///
/// Borrows are checked at runtime. A live [`DataMut`] excludes every other
/// access; those accesses return [`AccessError::Borrowed`] rather than
/// panic.
pub struct MutableBuffer<T> {
    data: Rc<RefCell<Vec<T>>>,
}

impl<T: Element> MutableBuffer<T> {
    /// Take ownership of prepared storage.
    pub fn new(prepared: PreparedStorage<T>) -> Self {
        Self {
            data: Rc::new(RefCell::new(prepared.into_inner())),
        }
    }

    /// Run the duplication policy on `input` and wrap the result.
    pub fn from_vector(input: Vector) -> Result<Self, MutableError> {
        Ok(Self::new(prepare_storage(input)?))
    }

    fn read(&self) -> Result<Ref<'_, Vec<T>>, AccessError> {
        self.data.try_borrow().map_err(|_| AccessError::Borrowed)
    }

    /// Current number of elements.
    pub fn len(&self) -> Result<usize, AccessError> {
        Ok(self.read()?.len())
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> Result<bool, AccessError> {
        Ok(self.read()?.is_empty())
    }

    /// Read the element at `index`.
    pub fn elt(&self, index: usize) -> Result<T, AccessError> {
        data::element_at(&self.read()?, index)
    }

    /// Copy up to `count` elements from `start` into `buf`.
    ///
    /// Returns the number of elements copied.
    pub fn get_region(&self, start: usize, count: usize, buf: &mut [T]) -> Result<usize, AccessError> {
        data::copy_region(&self.read()?, start, count, buf)
    }

    /// Read-only view of the current elements.
    pub fn dataptr(&self) -> Result<DataRef<'_, T>, AccessError> {
        Ok(DataRef::Guard(Ref::map(self.read()?, Vec::as_slice)))
    }

    /// Exclusive writable view of the elements.
    ///
    /// Released when the returned guard is dropped.
    pub fn dataptr_mut(&self) -> Result<DataMut<'_, T>, AccessError> {
        let guard = self
            .data
            .try_borrow_mut()
            .map_err(|_| AccessError::Borrowed)?;
        Ok(DataMut::new(std::cell::RefMut::map(guard, Vec::as_mut_slice)))
    }

    /// Read-only view, or `None` while a writer holds the storage.
    pub fn dataptr_or_null(&self) -> Option<DataRef<'_, T>> {
        self.dataptr().ok()
    }

    /// Overwrite the element at `index`.
    pub fn set_elt(&self, index: usize, value: T) -> Result<(), AccessError> {
        let mut data = self.dataptr_mut()?;
        let len = data.len();
        let slot = data
            .get_mut(index)
            .ok_or(AccessError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Number of buffer handles sharing this storage.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.data)
    }

    /// Copy the current elements into a fresh plain host vector.
    pub fn to_vector(&self) -> Result<Vector, AccessError> {
        Ok(Vector::new(T::into_storage(self.read()?.clone())))
    }

    /// Write a one-line description of the storage node.
    pub fn inspect(&self, out: &mut dyn fmt::Write, config: &InspectConfig) -> fmt::Result {
        match self.read() {
            Ok(data) => {
                inspect::write_node(out, config, T::KIND.vector_type(), data.len(), data.iter())
            }
            Err(_) => writeln!(out, "{:pre$}<borrowed for writing>", "", pre = config.pre),
        }
    }
}

impl<T> Clone for MutableBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(data) => f.debug_tuple("MutableBuffer").field(&*data).finish(),
            Err(_) => f.write_str("MutableBuffer(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Provenance;

    fn int_buffer(data: Vec<i32>) -> MutableBuffer<i32> {
        MutableBuffer::from_vector(Vector::integer(data)).unwrap()
    }

    #[test]
    fn reads_match_input() {
        let buf = int_buffer(vec![1, 2, 3, 4]);
        assert_eq!(buf.len(), Ok(4));
        assert_eq!(buf.elt(0), Ok(1));
        assert_eq!(buf.elt(3), Ok(4));
        assert_eq!(&*buf.dataptr().unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn out_of_range_element_is_an_error() {
        let buf = int_buffer(vec![1, 2]);
        assert_eq!(
            buf.elt(2),
            Err(AccessError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            buf.set_elt(5, 0),
            Err(AccessError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn writes_are_visible_to_later_reads() {
        let buf = int_buffer(vec![1, 2, 3, 4]);
        {
            let mut data = buf.dataptr_mut().unwrap();
            data[2] = 99;
        }
        assert_eq!(buf.elt(2), Ok(99));
        let mut out = [0; 4];
        assert_eq!(buf.get_region(0, 4, &mut out), Ok(4));
        assert_eq!(out, [1, 2, 99, 4]);
        assert_eq!(buf.len(), Ok(4));
        assert_eq!(&*buf.dataptr().unwrap(), &[1, 2, 99, 4]);
        assert_eq!(&*buf.dataptr_or_null().unwrap(), &[1, 2, 99, 4]);
    }

    #[test]
    fn clones_share_storage() {
        let a = int_buffer(vec![0, 0]);
        let b = a.clone();
        assert_eq!(a.holders(), 2);
        b.set_elt(1, 7).unwrap();
        assert_eq!(a.elt(1), Ok(7));
    }

    #[test]
    fn live_writer_excludes_readers() {
        let buf = MutableBuffer::<f64>::from_vector(Vector::real(vec![1.0])).unwrap();
        let guard = buf.dataptr_mut().unwrap();
        assert_eq!(buf.len(), Err(AccessError::Borrowed));
        assert_eq!(buf.elt(0), Err(AccessError::Borrowed));
        assert!(buf.dataptr_or_null().is_none());
        assert!(matches!(buf.dataptr_mut(), Err(AccessError::Borrowed)));
        drop(guard);
        assert!(buf.dataptr_or_null().is_some());
    }

    #[test]
    fn readers_exclude_writers_but_not_each_other() {
        let buf = int_buffer(vec![1, 2]);
        let first = buf.dataptr().unwrap();
        let second = buf.dataptr().unwrap();
        assert_eq!(first.len(), second.len());
        assert!(matches!(buf.dataptr_mut(), Err(AccessError::Borrowed)));
    }

    #[test]
    fn to_vector_snapshots_current_contents() {
        let buf = int_buffer(vec![1, 2, 3]);
        let snapshot = buf.to_vector().unwrap();
        buf.set_elt(0, 10).unwrap();
        assert_eq!(snapshot.as_slice::<i32>().unwrap(), &[1, 2, 3]);
        assert!(!snapshot.is_shared());
    }

    #[test]
    fn adopted_storage_keeps_contents() {
        let prepared = prepare_storage::<f64>(Vector::real(vec![0.5, 1.5])).unwrap();
        assert_eq!(prepared.provenance(), Provenance::Adopted);
        let buf = MutableBuffer::new(prepared);
        assert_eq!(buf.elt(1), Ok(1.5));
    }

    #[test]
    fn inspect_prints_storage_node() {
        let buf = int_buffer((1..=7).collect());
        let mut out = String::new();
        buf.inspect(&mut out, &InspectConfig::new()).unwrap();
        assert_eq!(out, "integer [len=7] 1, 2, 3, 4, 5, ...\n");
    }

    #[test]
    fn inspect_while_borrowed_does_not_fail() {
        let buf = int_buffer(vec![1]);
        let _guard = buf.dataptr_mut().unwrap();
        let mut out = String::new();
        buf.inspect(&mut out, &InspectConfig::new()).unwrap();
        assert_eq!(out, "<borrowed for writing>\n");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn length_and_values_preserved(data in proptest::collection::vec(any::<i32>(), 0..64)) {
                let buf = int_buffer(data.clone());
                prop_assert_eq!(buf.len(), Ok(data.len()));
                for (i, v) in data.iter().enumerate() {
                    prop_assert_eq!(buf.elt(i), Ok(*v));
                }
            }

            #[test]
            fn region_read_matches_elements(
                data in proptest::collection::vec(-1e6f64..1e6, 1..64),
                start in 0usize..64,
                count in 0usize..64,
            ) {
                let start = start % (data.len() + 1);
                let count = count % (data.len() - start + 1);
                let buf = MutableBuffer::<f64>::from_vector(Vector::real(data.clone())).unwrap();
                let mut out = vec![0.0; count];
                prop_assert_eq!(buf.get_region(start, count, &mut out), Ok(count));
                for (offset, v) in out.iter().enumerate() {
                    prop_assert_eq!(buf.elt(start + offset), Ok(*v));
                }
            }

            #[test]
            fn write_then_read(
                data in proptest::collection::vec(any::<i32>(), 1..64),
                index in 0usize..64,
                value in any::<i32>(),
            ) {
                let index = index % data.len();
                let buf = int_buffer(data);
                buf.dataptr_mut().unwrap()[index] = value;
                prop_assert_eq!(buf.elt(index), Ok(value));
            }
        }
    }
}
