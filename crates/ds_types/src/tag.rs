//! Variant tag for tag-driven dispatch.
//!
//! Every [`Mono`](crate::Mono) has a `Tag` that identifies its variant. The
//! tag is the type constructor identity a unifier compares before looking
//! at parameters: two nodes with different tags can never unify.
//!
//! # Tag Categories
//!
//! Tags are organized into semantic ranges:
//! - 0-31: Unit measures
//! - 32-47: Constructor constants (literal parameters)
//! - 48-63: Dimensions
//! - 64-79: Type variables
//! - 96-127: Composite types

use std::fmt;

/// Whether a node describes one axis of shape or the kind of one element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeClass {
    /// One axis of shape (`5`, `var`, `...`).
    Dimension,
    /// The kind of a single element (`int32`, `{ a : bool }`, ...).
    Measure,
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension => f.write_str("dimension"),
            Self::Measure => f.write_str("measure"),
        }
    }
}

/// Variant discriminant (u8).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Unit Measures (0-31) ===
    /// The empty datashape.
    Null = 0,
    /// Calendar date.
    Date = 1,
    /// Time of day, optionally zoned.
    Time = 2,
    /// Date and time, optionally zoned.
    DateTime = 3,
    /// Value with a physical unit.
    Units = 4,
    /// Opaque byte blob.
    Bytes = 5,
    /// Fixed- or variable-length text.
    String = 6,
    /// Native fixed-size scalar.
    CType = 7,
    /// Opaque JSON value.
    Json = 8,

    // === Constructor Constants (32-47) ===
    /// Integer literal parameter.
    IntegerConstant = 32,
    /// String literal parameter.
    StringConstant = 33,

    // === Dimensions (48-63) ===
    /// Fixed-size dimension.
    Fixed = 48,
    /// Variable-length dimension.
    Var = 49,
    /// Zero or more dimensions.
    Ellipsis = 50,

    // === Variables (64-79) ===
    /// Free type variable.
    TypeVar = 64,

    // === Composite (96-127) ===
    /// Dimensions followed by one measure.
    DataShape = 96,
    /// Named fields.
    Record = 97,
    /// Fixed-arity product.
    Tuple = 98,
    /// Argument types followed by a return type.
    Function = 99,
    /// Measure that may be absent.
    Option = 100,
    /// Type variable constrained to a type set.
    Implements = 101,
}

impl Tag {
    /// Every tag, in discriminant order.
    pub const ALL: [Tag; 21] = [
        Tag::Null,
        Tag::Date,
        Tag::Time,
        Tag::DateTime,
        Tag::Units,
        Tag::Bytes,
        Tag::String,
        Tag::CType,
        Tag::Json,
        Tag::IntegerConstant,
        Tag::StringConstant,
        Tag::Fixed,
        Tag::Var,
        Tag::Ellipsis,
        Tag::TypeVar,
        Tag::DataShape,
        Tag::Record,
        Tag::Tuple,
        Tag::Function,
        Tag::Option,
        Tag::Implements,
    ];

    /// Static classification of this variant.
    ///
    /// `None` means the position decides: type variables and constraints
    /// stand for either kind, a `DataShape` spans both, and a `Function`
    /// describes a signature rather than data.
    #[inline]
    pub const fn class(self) -> Option<TypeClass> {
        match self {
            Self::IntegerConstant | Self::Fixed | Self::Var | Self::Ellipsis => {
                Some(TypeClass::Dimension)
            }
            Self::TypeVar | Self::Implements | Self::DataShape | Self::Function => None,
            Self::Null
            | Self::Date
            | Self::Time
            | Self::DateTime
            | Self::Units
            | Self::Bytes
            | Self::String
            | Self::CType
            | Self::Json
            | Self::StringConstant
            | Self::Record
            | Self::Tuple
            | Self::Option => Some(TypeClass::Measure),
        }
    }

    /// Check if this tag is built from other types.
    #[inline]
    pub const fn is_composite(self) -> bool {
        (self as u8) >= 96
    }

    /// Check if this tag is a unit type (no structural children).
    #[inline]
    pub const fn is_unit(self) -> bool {
        !self.is_composite()
    }

    /// Check if this tag is a dimension variant.
    #[inline]
    pub const fn is_dimension(self) -> bool {
        matches!(self.class(), Some(TypeClass::Dimension))
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Units => "Units",
            Self::Bytes => "Bytes",
            Self::String => "String",
            Self::CType => "CType",
            Self::Json => "JSON",
            Self::IntegerConstant => "IntegerConstant",
            Self::StringConstant => "StringConstant",
            Self::Fixed => "Fixed",
            Self::Var => "Var",
            Self::Ellipsis => "Ellipsis",
            Self::TypeVar => "TypeVar",
            Self::Implements => "Implements",
            Self::DataShape => "DataShape",
            Self::Record => "Record",
            Self::Tuple => "Tuple",
            Self::Function => "Function",
            Self::Option => "Option",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Tag must stay one byte.
const _: () = assert!(std::mem::size_of::<Tag>() == 1);
