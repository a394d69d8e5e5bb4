//! Test fixtures and helpers for mutvec development.
//!
//! Provides deterministic host vectors of every type ([`fixtures`]) and
//! small helpers for reading any [`VectorAccess`] implementor back out in
//! assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{integer_fixture, real_fixture, shared_pair, unsupported_fixtures};

use mutvec_core::{AccessError, Element, InspectConfig, NumericAccess, VectorAccess};

/// Render the inspect output of `x` with the default configuration.
pub fn inspect_to_string<V: VectorAccess + ?Sized>(x: &V) -> String {
    inspect_with(x, &InspectConfig::default())
}

/// Render the inspect output of `x` with `config`.
pub fn inspect_with<V: VectorAccess + ?Sized>(x: &V, config: &InspectConfig) -> String {
    let mut out = String::new();
    x.inspect(&mut out, config)
        .expect("writing to a String cannot fail");
    out
}

/// Read every element of `x` one at a time through `elt`.
pub fn collect_elements<T, V>(x: &V) -> Result<Vec<T>, AccessError>
where
    T: Element,
    V: NumericAccess<T> + ?Sized,
{
    (0..x.length()?).map(|i| x.elt(i)).collect()
}

/// Read every element of `x` with a single region copy.
pub fn collect_region<T, V>(x: &V) -> Result<Vec<T>, AccessError>
where
    T: Element,
    V: NumericAccess<T> + ?Sized,
{
    let mut buf = vec![T::default(); x.length()?];
    let n = x.get_region(0, buf.len(), &mut buf)?;
    buf.truncate(n);
    Ok(buf)
}
