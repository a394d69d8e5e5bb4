//! Integration test: end-to-end wrap, write and check.
//!
//! Walks a host vector through `make_mutable`, writes through the
//! writable view and checks every read path sees the write, while other
//! holders of the original never do.

use mutvec::prelude::*;
use mutvec::types::Storage;
use mutvec_test_utils::{
    collect_elements, inspect_to_string, integer_fixture, real_fixture, shared_pair,
    unsupported_fixtures,
};

// ── Adopt path ───────────────────────────────────────────────────────

#[test]
fn sole_holder_is_adopted_and_written_in_place() {
    let data = Vector::integer(vec![1, 2, 3, 4]);
    let original_ptr = data.as_slice::<i32>().unwrap().as_ptr();

    let w = make_mutable(data).unwrap();
    let ints = w.as_integer().unwrap();
    assert_eq!(ints.dataptr().unwrap().as_ptr(), original_ptr);

    ints.dataptr_mut().unwrap()[2] = 99;

    assert_eq!(ints.elt(2), Ok(99));
    assert_eq!(&*ints.dataptr().unwrap(), &[1, 2, 99, 4]);
    assert_eq!(&*ints.dataptr_or_null().unwrap(), &[1, 2, 99, 4]);
    assert_eq!(w.len(), Ok(4));
    assert!(is_mutable(&w));
    assert_eq!(w.class_name(), "mutable_integer");
    assert_eq!(collect_elements::<i32, _>(&w).unwrap(), vec![1, 2, 99, 4]);
}

#[test]
fn kind_check_against_other_kind_is_false() {
    let w = make_mutable(Vector::integer(vec![1, 2, 3, 4])).unwrap();
    let registry = ClassRegistry::global();
    assert!(registry.inherits(&w, NumericKind::Integer));
    assert!(!registry.inherits(&w, NumericKind::Real));
    assert!(w.as_real().is_none());
}

// ── Copy path ────────────────────────────────────────────────────────

#[test]
fn shared_input_is_copied_and_left_untouched() {
    let (input, other) = shared_pair(Storage::Real(vec![1.0, 2.0, 3.0]));
    let other_ptr = other.as_slice::<f64>().unwrap().as_ptr();

    let w = make_mutable(input).unwrap();
    let reals = w.as_real().unwrap();
    assert_ne!(reals.dataptr().unwrap().as_ptr(), other_ptr);

    reals.set_elt(0, -1.0).unwrap();
    assert_eq!(reals.elt(0), Ok(-1.0));
    assert_eq!(other.as_slice::<f64>().unwrap(), &[1.0, 2.0, 3.0]);
    assert!(!is_mutable(&other));
}

// ── Wrapper sharing ──────────────────────────────────────────────────

#[test]
fn wrapper_clones_share_writes() {
    let w = make_mutable(real_fixture(3)).unwrap();
    let alias = w.clone();
    assert_eq!(w.holders(), 2);

    alias.as_real().unwrap().set_elt(1, 4.5).unwrap();
    assert_eq!(w.as_real().unwrap().elt(1), Ok(4.5));
    assert_eq!(&*w.as_real().unwrap().dataptr().unwrap(), &[0.0, 4.5, 1.0]);
}

#[test]
fn duplicate_rewrap_is_independent() {
    let w = make_mutable(integer_fixture(2)).unwrap();
    let copy = w.duplicate().unwrap();
    assert!(!copy.is_shared());

    let second = make_mutable(copy).unwrap();
    second.as_integer().unwrap().set_elt(0, 70).unwrap();
    assert_eq!(w.as_integer().unwrap().elt(0), Ok(0));
    assert_eq!(second.as_integer().unwrap().elt(0), Ok(70));
}

#[test]
fn live_writer_blocks_other_access() {
    let w = make_mutable(Vector::integer(vec![1, 2])).unwrap();
    let ints = w.as_integer().unwrap();
    let guard = ints.dataptr_mut().unwrap();
    assert_eq!(w.len(), Err(AccessError::Borrowed));
    assert!(ints.dataptr_or_null().is_none());
    drop(guard);
    assert_eq!(w.len(), Ok(2));
    assert!(ints.dataptr_or_null().is_some());
}

// ── Errors ───────────────────────────────────────────────────────────

#[test]
fn unsupported_kinds_produce_no_wrapper() {
    for input in unsupported_fixtures() {
        let kind = input.vector_type();
        let err = make_mutable(input).unwrap_err();
        assert_eq!(err, MutableError::UnsupportedKind { kind });
    }
    let err = make_mutable(Vector::character(["x"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "mutable vectors for character not supported yet"
    );
}

#[test]
fn out_of_range_access_is_an_error() {
    let w = make_mutable(Vector::real(vec![1.0])).unwrap();
    let reals = w.as_real().unwrap();
    assert_eq!(
        reals.elt(1),
        Err(AccessError::IndexOutOfRange { index: 1, len: 1 })
    );
    let mut buf = [0.0; 1];
    assert_eq!(
        reals.get_region(2, 1, &mut buf),
        Err(AccessError::RegionOutOfRange { start: 2, len: 1 })
    );
}

#[test]
fn reading_with_the_wrong_element_type_is_a_mismatch() {
    let w = make_mutable(Vector::integer(vec![1])).unwrap();
    assert_eq!(
        NumericAccess::<f64>::elt(&w, 0),
        Err(AccessError::KindMismatch {
            expected: VectorType::Real,
            found: VectorType::Integer,
        })
    );
}

// ── Inspect ──────────────────────────────────────────────────────────

#[test]
fn display_shows_header_and_storage() {
    let w = make_mutable(Vector::real(vec![1.5, 2.5])).unwrap();
    assert_eq!(w.to_string(), "mutable double\n  double [len=2] 1.5, 2.5\n");
    assert_eq!(inspect_to_string(&w), w.to_string());

    let ints = make_mutable(Vector::integer((1..=8).collect::<Vec<_>>())).unwrap();
    assert_eq!(
        ints.to_string(),
        "mutable integer\n  integer [len=8] 1, 2, 3, 4, 5, ...\n"
    );
}
