//! Diagnostic inspect output.
//!
//! Every node prints one line: indentation, type name, length and a
//! preview of at most [`InspectConfig::pvec`] elements. Wrapper nodes print
//! their own header line first and then inspect their storage one level
//! deeper via [`InspectConfig::descend`].

use std::fmt;

use crate::kind::VectorType;

/// Configuration for inspect output.
///
/// All values are plain data; a node passes a derived copy to its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectConfig {
    /// Indentation of the current node, in spaces.
    pub pre: usize,

    /// Remaining recursion depth. `0` stops before children, negative
    /// values are unlimited.
    pub deep: i32,

    /// Maximum number of elements printed per vector.
    ///
    /// Default: 5.
    pub pvec: usize,
}

impl InspectConfig {
    /// Default element preview length.
    pub const DEFAULT_PVEC: usize = 5;

    /// Default recursion depth (unlimited).
    pub const DEFAULT_DEEP: i32 = -1;

    /// Indentation added per nesting level.
    pub const INDENT: usize = 2;

    /// Create a config with default depth and preview length.
    pub fn new() -> Self {
        Self {
            pre: 0,
            deep: Self::DEFAULT_DEEP,
            pvec: Self::DEFAULT_PVEC,
        }
    }

    /// Whether children of the current node should be printed.
    pub fn can_descend(&self) -> bool {
        self.deep != 0
    }

    /// The config for a child node: indented one level, one less depth.
    pub fn descend(&self) -> Self {
        Self {
            pre: self.pre + Self::INDENT,
            deep: if self.deep > 0 { self.deep - 1 } else { self.deep },
            pvec: self.pvec,
        }
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one vector node: `"<indent><type> [len=<n>] a, b, c, ...\n"`.
///
/// At most `config.pvec` items are taken from `items`; `", ..."` marks a
/// vector longer than what was printed.
pub fn write_node<I>(
    out: &mut dyn fmt::Write,
    config: &InspectConfig,
    vector_type: VectorType,
    len: usize,
    items: I,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(out, "{:pre$}{vector_type} [len={len}]", "", pre = config.pre)?;
    let mut printed = 0usize;
    for item in items.into_iter().take(config.pvec) {
        let sep = if printed == 0 { " " } else { ", " };
        write!(out, "{sep}{item}")?;
        printed += 1;
    }
    if len > printed {
        out.write_str(if printed == 0 { " ..." } else { ", ..." })?;
    }
    out.write_char('\n')
}
