//! Native-array conversion errors.

use ds_types::{RegistryError, TypeError};
use thiserror::Error;

/// A type or descriptor has no counterpart on the other side.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConversionError {
    /// A dimension that is neither a concrete extent nor a type variable.
    #[error("dimension {dim} of {ty} is not compatible with a native array")]
    IncompatibleDimension {
        /// Rendered dimension.
        dim: String,
        /// Rendered type being converted.
        ty: String,
    },

    /// A measure with no native element kind.
    #[error("measure {measure} is not compatible with a native array")]
    IncompatibleMeasure {
        /// Rendered measure.
        measure: String,
    },

    /// A descriptor resolved to something other than the expected kind.
    #[error("native descriptor {descriptor} resolved to {found}, expected {expected}")]
    UnexpectedKind {
        /// Native name of the descriptor.
        descriptor: String,
        /// What the descriptor should map to.
        expected: &'static str,
        /// What it mapped to instead.
        found: String,
    },

    /// Building the resulting type failed.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A native name did not resolve.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
