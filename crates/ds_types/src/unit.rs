//! Payloads of the unit variants.
//!
//! Unit types carry only literal parameters (integers, strings, other
//! measures used as defaults). Each constructor validates its invariant
//! and fails immediately.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use crate::{Encoding, Mono, Tag, TypeClass, TypeError};

/// Integer literal used as a type-constructor parameter.
///
/// Compares equal to bare `i64` values in both directions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerConstant(i64);

impl IntegerConstant {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl PartialEq<i64> for IntegerConstant {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<IntegerConstant> for i64 {
    fn eq(&self, other: &IntegerConstant) -> bool {
        *self == other.0
    }
}

/// String literal used as a type-constructor parameter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringConstant(Box<str>);

impl StringConstant {
    pub fn new(value: impl Into<Box<str>>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StringConstant {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for StringConstant {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<StringConstant> for &str {
    fn eq(&self, other: &StringConstant) -> bool {
        *self == &*other.0
    }
}

/// Time of day, optionally tagged with an IANA-style timezone.
///
/// The timezone is not validated against a timezone database.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    tz: Option<Box<str>>,
}

impl Time {
    /// `time` without a timezone.
    pub const UNZONED: Time = Time { tz: None };

    pub fn new(tz: Option<&str>) -> Self {
        Self { tz: tz.map(Box::from) }
    }

    pub fn tz(&self) -> Option<&str> {
        self.tz.as_deref()
    }
}

/// Date and time, optionally tagged with an IANA-style timezone.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    tz: Option<Box<str>>,
}

impl DateTime {
    /// `datetime` without a timezone.
    pub const UNZONED: DateTime = DateTime { tz: None };

    pub fn new(tz: Option<&str>) -> Self {
        Self { tz: tz.map(Box::from) }
    }

    pub fn tz(&self) -> Option<&str> {
        self.tz.as_deref()
    }
}

/// A measure with a physical unit, e.g. `units['second', int32]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::de::UnitsRepr")
)]
pub struct Units {
    unit: Box<str>,
    tp: Box<Mono>,
}

impl Units {
    /// Value type used when none is given.
    pub const DEFAULT_TP: Mono = Mono::FLOAT64;

    /// Build a units measure. `tp` defaults to `float64` and must be a
    /// standalone datashape (a measure or a `DataShape`).
    pub fn new(unit: impl Into<Box<str>>, tp: Option<Mono>) -> Result<Self, TypeError> {
        let tp = tp.unwrap_or(Self::DEFAULT_TP);
        if !tp.is_standalone() {
            return Err(TypeError::invalid(
                Tag::Units,
                "tp",
                format!("must be a datashape type, not {tp:?}"),
            ));
        }
        Ok(Self {
            unit: unit.into(),
            tp: Box::new(tp),
        })
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn tp(&self) -> &Mono {
        &self.tp
    }

    /// Whether the value type is the default `float64`.
    pub fn has_default_tp(&self) -> bool {
        *self.tp == Self::DEFAULT_TP
    }
}

/// Fixed- or variable-length text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringType {
    fixlen: Option<u64>,
    encoding: Encoding,
}

impl StringType {
    /// Variable-length UTF-8 text (`string`).
    pub const VARIABLE: StringType = StringType {
        fixlen: None,
        encoding: Encoding::Utf8,
    };

    /// Build a string measure; the encoding is canonicalized through the
    /// alias table and defaults to `U8`.
    pub fn new(fixlen: Option<u64>, encoding: Option<&str>) -> Result<Self, TypeError> {
        let encoding = match encoding {
            Some(alias) => Encoding::parse(alias)?,
            None => Encoding::default(),
        };
        Ok(Self { fixlen, encoding })
    }

    pub const fn with_encoding(fixlen: Option<u64>, encoding: Encoding) -> Self {
        Self { fixlen, encoding }
    }

    pub const fn fixlen(self) -> Option<u64> {
        self.fixlen
    }

    pub const fn encoding(self) -> Encoding {
        self.encoding
    }
}

/// A native fixed-size scalar (`int32`, `complex[float64]`, `object`, ...).
///
/// Identity is the name alone: size and alignment are descriptive.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CType {
    name: Cow<'static, str>,
    itemsize: usize,
    alignment: usize,
}

impl CType {
    pub fn new(name: impl Into<Cow<'static, str>>, itemsize: usize, alignment: usize) -> Self {
        Self {
            name: name.into(),
            itemsize,
            alignment,
        }
    }

    /// `const` constructor for the built-in scalars.
    pub const fn from_static(name: &'static str, itemsize: usize, alignment: usize) -> Self {
        Self {
            name: Cow::Borrowed(name),
            itemsize,
            alignment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The size of one element of this type.
    pub const fn itemsize(&self) -> usize {
        self.itemsize
    }

    /// The size of one element with C-contiguous storage.
    pub const fn c_itemsize(&self) -> usize {
        self.itemsize
    }

    /// The alignment of one element of this type.
    pub const fn c_alignment(&self) -> usize {
        self.alignment
    }
}

impl PartialEq for CType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CType {}

impl Hash for CType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Non-negative fixed-size dimension.
///
/// Compares equal to bare `i64` values in both directions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixed(u64);

impl Fixed {
    pub fn new(value: i64) -> Result<Self, TypeError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| TypeError::NegativeDimension(value))
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Fixed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl PartialEq<i64> for Fixed {
    fn eq(&self, other: &i64) -> bool {
        u64::try_from(*other).is_ok_and(|v| v == self.0)
    }
}

impl PartialEq<Fixed> for i64 {
    fn eq(&self, other: &Fixed) -> bool {
        other == self
    }
}

/// Named free type variable (`A`, `Batch`).
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Box<str>")
)]
pub struct TypeVar(Box<str>);

impl TypeVar {
    /// User-facing type variable; the symbol must begin with a capital.
    pub fn new(symbol: impl Into<Box<str>>) -> Result<Self, TypeError> {
        let symbol = symbol.into();
        if symbol.chars().next().is_some_and(char::is_uppercase) {
            Ok(Self(symbol))
        } else {
            Err(TypeError::TypeVarSymbol(symbol.into_string()))
        }
    }

    /// Machine-generated variable `i{index}`.
    ///
    /// Lowercase, so it never collides with a symbol accepted by
    /// [`TypeVar::new`].
    pub fn fresh(index: usize) -> Self {
        Self(format!("i{index}").into_boxed_str())
    }

    /// Rebuild a variable from any symbol a `TypeVar` can carry: a
    /// user-facing capitalized symbol or a machine-generated `i{index}`.
    pub fn from_symbol(symbol: impl Into<Box<str>>) -> Result<Self, TypeError> {
        let symbol = symbol.into();
        if Self::is_fresh_symbol(&symbol) {
            return Ok(Self(symbol));
        }
        Self::new(symbol)
    }

    fn is_fresh_symbol(symbol: &str) -> bool {
        symbol
            .strip_prefix('i')
            .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

/// Zero or more dimensions, optionally bound to a type variable (`A...`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsis {
    typevar: Option<TypeVar>,
}

impl Ellipsis {
    pub const fn new(typevar: Option<TypeVar>) -> Self {
        Self { typevar }
    }

    pub fn typevar(&self) -> Option<&TypeVar> {
        self.typevar.as_ref()
    }
}

impl Mono {
    /// Whether this node may stand in a position of class `class`.
    ///
    /// Type variables and constraints fit either position. A `DataShape`
    /// fits neither, since datashapes do not nest, and neither does a
    /// `Function`.
    pub fn fits_position(&self, class: TypeClass) -> bool {
        match self.class() {
            Some(own) => own == class,
            None => matches!(self, Mono::TypeVar(_) | Mono::Implements(_)),
        }
    }

    /// Whether this node is a complete datashape on its own: a
    /// `DataShape`, or anything that fits the measure position.
    pub fn is_standalone(&self) -> bool {
        matches!(self, Mono::DataShape(_)) || self.fits_position(TypeClass::Measure)
    }
}
