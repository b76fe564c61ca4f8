//! Payloads of the composite variants.
//!
//! # Invariants
//!
//! - A `DataShape` is two or more parameters: dimensions, then one measure.
//! - Record fields, tuple members, function arguments and results are
//!   standalone datashapes (see [`Mono::is_standalone`]).
//! - Record field names are unique; equality ignores field order.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::{Mono, Tag, TypeClass, TypeError, TypeVar};

/// Zero or more dimensions followed by exactly one measure.
///
/// An optional display name makes the datashape render as that name. The
/// name takes no part in equality or hashing.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::de::DataShapeRepr")
)]
pub struct DataShape {
    params: Box<[Mono]>,
    name: Option<Box<str>>,
}

impl DataShape {
    /// Build a datashape from its full parameter list (dimensions, then the
    /// measure).
    ///
    /// A bare measure is represented by the measure itself, so fewer than
    /// two parameters is an arity error.
    pub fn new(params: Vec<Mono>) -> Result<Self, TypeError> {
        let Some((measure, dims)) = params.split_last() else {
            return Err(arity_error(0));
        };
        if dims.is_empty() {
            return Err(arity_error(1));
        }
        if !measure.fits_position(TypeClass::Measure) {
            return Err(TypeError::wrong_class(
                Tag::DataShape,
                TypeClass::Measure,
                dims.len(),
                measure,
            ));
        }
        if let Some((position, dim)) = dims
            .iter()
            .enumerate()
            .find(|(_, dim)| !dim.fits_position(TypeClass::Dimension))
        {
            return Err(TypeError::wrong_class(
                Tag::DataShape,
                TypeClass::Dimension,
                position,
                dim,
            ));
        }
        Ok(Self {
            params: params.into_boxed_slice(),
            name: None,
        })
    }

    /// Build from a dimension list and a measure.
    pub fn from_parts(
        dims: impl IntoIterator<Item = Mono>,
        measure: Mono,
    ) -> Result<Self, TypeError> {
        let mut params: Vec<Mono> = dims.into_iter().collect();
        params.push(measure);
        Self::new(params)
    }

    /// Build a datashape that renders as `name`.
    ///
    /// Construction has no side effects; see
    /// [`TypeRegistry::register_named`](crate::TypeRegistry::register_named)
    /// to make the name resolvable.
    pub fn named(name: impl Into<Box<str>>, params: Vec<Mono>) -> Result<Self, TypeError> {
        let mut ds = Self::new(params)?;
        ds.name = Some(name.into());
        Ok(ds)
    }

    /// Every parameter, dimensions first.
    pub fn parameters(&self) -> &[Mono] {
        &self.params
    }

    /// The dimension prefix.
    pub fn shape(&self) -> &[Mono] {
        &self.params[..self.params.len() - 1]
    }

    /// The terminal measure.
    pub fn measure(&self) -> &Mono {
        &self.params[self.params.len() - 1]
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.params.len() - 1
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn arity_error(found: usize) -> TypeError {
    TypeError::Arity {
        variant: Tag::DataShape,
        expected: "2 or more",
        found,
    }
}

impl PartialEq for DataShape {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for DataShape {}

impl Hash for DataShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.params.hash(state);
    }
}

/// Ordered named fields.
///
/// Declaration order drives rendering and native layout; equality compares
/// the name-to-type mapping only.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::de::RecordRepr")
)]
pub struct Record {
    fields: Box<[(Box<str>, Mono)]>,
}

impl Record {
    pub fn new<N>(fields: impl IntoIterator<Item = (N, Mono)>) -> Result<Self, TypeError>
    where
        N: Into<Box<str>>,
    {
        let fields: Vec<(Box<str>, Mono)> = fields
            .into_iter()
            .map(|(name, ty)| (name.into(), ty))
            .collect();

        {
            let mut seen = FxHashSet::default();
            for (name, ty) in &fields {
                if !seen.insert(&**name) {
                    return Err(TypeError::DuplicateField(name.to_string()));
                }
                if !ty.is_standalone() {
                    return Err(TypeError::NotAMeasure {
                        variant: Tag::Record,
                        found: format!("{ty:?}"),
                    });
                }
            }
        }

        Ok(Self {
            fields: fields.into_boxed_slice(),
        })
    }

    /// The record with no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `(name, type)` pairs in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, &Mono)> {
        self.fields.iter().map(|(name, ty)| (&**name, ty))
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.fields.iter().map(|(name, _)| &**name)
    }

    pub fn types(&self) -> impl ExactSizeIterator<Item = &Mono> {
        self.fields.iter().map(|(_, ty)| ty)
    }

    /// Type of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&Mono> {
        self.fields
            .iter()
            .find(|(field, _)| &**field == name)
            .map(|(_, ty)| ty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .fields()
                .all(|(name, ty)| other.get(name).is_some_and(|o| o == ty))
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Names are unique, so sorting by name gives an order-free key.
        let mut sorted: Vec<(&str, &Mono)> = self.fields().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted.hash(state);
    }
}

/// Fixed-arity product of datashapes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::de::TupleRepr")
)]
pub struct Tuple {
    dshapes: Box<[Mono]>,
}

impl Tuple {
    pub fn new(dshapes: Vec<Mono>) -> Result<Self, TypeError> {
        if let Some(bad) = dshapes.iter().find(|ty| !ty.is_standalone()) {
            return Err(TypeError::NotAMeasure {
                variant: Tag::Tuple,
                found: format!("{bad:?}"),
            });
        }
        Ok(Self {
            dshapes: dshapes.into_boxed_slice(),
        })
    }

    pub fn dshapes(&self) -> &[Mono] {
        &self.dshapes
    }
}

/// Function signature: argument types followed by the return type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::de::FunctionRepr")
)]
pub struct Function {
    params: Box<[Mono]>,
}

impl Function {
    pub fn new(params: Vec<Mono>) -> Result<Self, TypeError> {
        if params.is_empty() {
            return Err(TypeError::Arity {
                variant: Tag::Function,
                expected: "1 or more",
                found: 0,
            });
        }
        if let Some(bad) = params.iter().find(|ty| !ty.is_standalone()) {
            return Err(TypeError::NotAMeasure {
                variant: Tag::Function,
                found: format!("{bad:?}"),
            });
        }
        Ok(Self {
            params: params.into_boxed_slice(),
        })
    }

    pub fn parameters(&self) -> &[Mono] {
        &self.params
    }

    pub fn argtypes(&self) -> &[Mono] {
        &self.params[..self.params.len() - 1]
    }

    pub fn restype(&self) -> &Mono {
        &self.params[self.params.len() - 1]
    }
}

/// A measure that may be absent.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::de::OptionRepr")
)]
pub struct OptionType {
    ty: Box<Mono>,
}

impl OptionType {
    /// Wrap a measure. Dimensions, type variables and multi-element
    /// datashapes are rejected.
    pub fn new(ty: Mono) -> Result<Self, TypeError> {
        if ty.class() != Some(TypeClass::Measure) {
            return Err(TypeError::NotAMeasure {
                variant: Tag::Option,
                found: format!("{ty:?}"),
            });
        }
        Ok(Self { ty: Box::new(ty) })
    }

    pub fn ty(&self) -> &Mono {
        &self.ty
    }
}

/// Constraint that a type variable belongs to a named type set.
///
/// The type set itself is resolved by the unifier, not here.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Implements {
    typevar: TypeVar,
    typeset: Box<str>,
}

impl Implements {
    pub fn new(typevar: TypeVar, typeset: impl Into<Box<str>>) -> Self {
        Self {
            typevar,
            typeset: typeset.into(),
        }
    }

    pub fn typevar(&self) -> &TypeVar {
        &self.typevar
    }

    pub fn typeset(&self) -> &str {
        &self.typeset
    }
}
