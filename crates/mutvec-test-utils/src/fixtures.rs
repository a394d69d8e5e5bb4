//! Deterministic host vector fixtures.
//!
//! - [`integer_fixture`] / [`real_fixture`]: sole-holder numeric vectors.
//! - [`shared_pair`]: two holders of the same storage.
//! - [`unsupported_fixtures`]: one vector of each non-numeric type.

use mutvec_core::{Storage, Vector};

/// Integer vector `0, 1, ..., len - 1`.
pub fn integer_fixture(len: usize) -> Vector {
    Vector::integer((0..len).map(|i| i as i32).collect::<Vec<_>>())
}

/// Double vector `0.0, 0.5, 1.0, ...` of length `len`.
pub fn real_fixture(len: usize) -> Vector {
    Vector::real((0..len).map(|i| i as f64 * 0.5).collect::<Vec<_>>())
}

/// Two handles to the same storage. Wrapping either one must copy.
pub fn shared_pair(storage: Storage) -> (Vector, Vector) {
    let first = Vector::new(storage);
    let second = first.clone();
    (first, second)
}

/// One vector of every type `make_mutable` rejects.
pub fn unsupported_fixtures() -> Vec<Vector> {
    vec![
        Vector::logical(vec![true, false]),
        Vector::complex(vec![(1.0, -1.0)]),
        Vector::character(["a", "b"]),
        Vector::raw(vec![0x00, 0xff]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutvec_core::VectorType;

    #[test]
    fn fixtures_have_requested_length() {
        assert_eq!(integer_fixture(4).as_slice::<i32>().unwrap(), &[0, 1, 2, 3]);
        assert_eq!(real_fixture(3).as_slice::<f64>().unwrap(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn shared_pair_is_shared() {
        let (a, b) = shared_pair(Storage::Integer(vec![1]));
        assert!(a.is_shared());
        assert_eq!(a, b);
    }

    #[test]
    fn unsupported_fixtures_are_not_numeric() {
        for v in unsupported_fixtures() {
            assert!(v.vector_type().numeric_kind().is_none());
        }
        let types: Vec<_> = unsupported_fixtures()
            .iter()
            .map(Vector::vector_type)
            .collect();
        assert_eq!(
            types,
            [
                VectorType::Logical,
                VectorType::Complex,
                VectorType::Character,
                VectorType::Raw
            ]
        );
    }
}
