//! Construction and registry errors.
//!
//! Errors are raised where the invariant is checked and carry the variant,
//! position and offending value needed to act on them. A failed construction
//! yields no node.

use thiserror::Error;

use crate::{Tag, TypeClass};

/// A node's parameters violate one of its structural invariants.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TypeError {
    /// A non-measure in the terminal position of a datashape (or wherever
    /// a measure is required).
    #[error("only a measure can appear in the last position of a {variant}, not {found}")]
    NotAMeasure {
        /// Variant being constructed.
        variant: Tag,
        /// Rendered form of the rejected parameter.
        found: String,
    },

    /// A non-dimension before the terminal position of a datashape.
    #[error("only dimensions can appear before the last position of a datashape, not {found} (position {position})")]
    NotADimension {
        /// Zero-based parameter position.
        position: usize,
        /// Rendered form of the rejected parameter.
        found: String,
    },

    /// Wrong number of parameters.
    #[error("{variant} takes {expected} parameters, got {found}")]
    Arity {
        /// Variant being constructed.
        variant: Tag,
        /// Human-readable arity requirement (`"2 or more"`, `"1"`).
        expected: &'static str,
        /// Number of parameters supplied.
        found: usize,
    },

    /// A parameter has the wrong kind or an invalid value.
    #[error("invalid `{param}` parameter to {variant}: {reason}")]
    InvalidParameter {
        /// Variant being constructed.
        variant: Tag,
        /// Parameter name.
        param: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A fixed dimension below zero.
    #[error("fixed dimensions must be non-negative, got {0}")]
    NegativeDimension(i64),

    /// A type variable whose symbol does not begin with a capital letter.
    #[error("type variable symbol {0:?} does not begin with a capital letter")]
    TypeVarSymbol(String),

    /// The same field name appears twice in a record.
    #[error("duplicate field {0:?} in record")]
    DuplicateField(String),

    /// A string encoding outside the canonical alias table.
    #[error("unsupported string encoding {0:?}")]
    UnsupportedEncoding(String),

    /// `subarray` asked for more leading dimensions than exist.
    #[error("not enough dimensions in {shape} to remove {leading} leading dimensions (has {available})")]
    OutOfRange {
        /// Requested number of leading dimensions.
        leading: usize,
        /// Dimensions actually present.
        available: usize,
        /// Rendered form of the source type.
        shape: String,
    },
}

impl TypeError {
    /// Error for a node of the wrong class in a position requiring `expected`.
    pub(crate) fn wrong_class(
        variant: Tag,
        expected: TypeClass,
        position: usize,
        found: &crate::Mono,
    ) -> Self {
        match expected {
            TypeClass::Measure => TypeError::NotAMeasure {
                variant,
                found: format!("{found:?}"),
            },
            TypeClass::Dimension => TypeError::NotADimension {
                position,
                found: format!("{found:?}"),
            },
        }
    }

    pub(crate) fn invalid(variant: Tag, param: &'static str, reason: impl Into<String>) -> Self {
        TypeError::InvalidParameter {
            variant,
            param,
            reason: reason.into(),
        }
    }
}

/// Registry collision or miss.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RegistryError {
    /// The name is already taken; the existing entry is kept.
    #[error("there is another type registered with name {0:?}")]
    NameCollision(String),

    /// No type is registered under the name.
    #[error("no type registered with name {0:?}")]
    NotFound(String),

    /// `register_named` was given a datashape without a name.
    #[error("cannot register an unnamed datashape: {0}")]
    Anonymous(String),
}
