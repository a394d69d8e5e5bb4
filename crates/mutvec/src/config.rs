//! Class registration configuration.

use mutvec_core::NumericKind;

/// Names under which the mutable classes are registered.
///
/// Plain data, immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassConfig {
    /// Package that owns the classes.
    ///
    /// Default: `"mutable"`.
    pub package: &'static str,

    /// Name of the integer class.
    ///
    /// Default: `"mutable_integer"`.
    pub integer_class: &'static str,

    /// Name of the floating-point class.
    ///
    /// Default: `"mutable_real"`.
    pub real_class: &'static str,
}

impl ClassConfig {
    /// Default package name.
    pub const DEFAULT_PACKAGE: &'static str = "mutable";

    /// Default integer class name.
    pub const DEFAULT_INTEGER_CLASS: &'static str = "mutable_integer";

    /// Default floating-point class name.
    pub const DEFAULT_REAL_CLASS: &'static str = "mutable_real";

    /// Create a config with the default names.
    pub fn new() -> Self {
        Self {
            package: Self::DEFAULT_PACKAGE,
            integer_class: Self::DEFAULT_INTEGER_CLASS,
            real_class: Self::DEFAULT_REAL_CLASS,
        }
    }

    /// Class name configured for `kind`.
    pub fn class_name(&self, kind: NumericKind) -> &'static str {
        match kind {
            NumericKind::Integer => self.integer_class,
            NumericKind::Real => self.real_class,
        }
    }
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self::new()
    }
}
