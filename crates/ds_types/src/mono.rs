//! The `Mono` type tree.
//!
//! `Mono` is the closed set of datashape variants. Nodes are immutable
//! values: equality and hashing are structural, and every node can be
//! rebuilt from its [`parameters`](Mono::parameters).
//!
//! # Structural Queries
//!
//! - [`Mono::shape`]: the dimension prefix (empty for a bare measure)
//! - [`Mono::measure`]: the terminal measure (the node itself for a measure)
//! - [`Mono::subarray`]: drop leading dimensions
//! - [`Mono::sigform`]: generalize concrete dimensions to fresh variables

use crate::{
    CType, DataShape, DateTime, Ellipsis, Fixed, Function, Implements, IntegerConstant,
    MonoVisitor, OptionType, Record, StringConstant, StringType, Tag, Time, Tuple, TypeClass,
    TypeError, TypeVar, Units,
};

/// A datashape type node.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mono {
    // Unit measures
    /// The empty datashape (`null`).
    Null,
    /// `date`
    Date,
    /// `time`, `time[tz='UTC']`
    Time(Time),
    /// `datetime`, `datetime[tz='UTC']`
    DateTime(DateTime),
    /// `units['second']`
    Units(Units),
    /// `bytes`
    Bytes,
    /// `string`, `string[10,'A']`
    String(StringType),
    /// `int32`, `complex[float64]`, ...
    CType(CType),
    /// `json`
    Json,

    // Constructor constants
    IntegerConstant(IntegerConstant),
    StringConstant(StringConstant),

    // Dimensions
    /// `5`
    Fixed(Fixed),
    /// `var`
    Var,
    /// `...`, `A...`
    Ellipsis(Ellipsis),

    // Variables
    /// `A`
    TypeVar(TypeVar),

    // Composite
    /// `5 * var * int32`
    DataShape(DataShape),
    /// `{ x : int32, y : float64 }`
    Record(Record),
    /// `(int32, string)`
    Tuple(Tuple),
    /// `(int32, int32) -> bool`
    Function(Function),
    /// `option[int32]`
    Option(OptionType),
    /// `A : integral`
    Implements(Implements),
}

impl Mono {
    /// The variant tag (type constructor identity).
    pub fn tag(&self) -> Tag {
        match self {
            Mono::Null => Tag::Null,
            Mono::Date => Tag::Date,
            Mono::Time(_) => Tag::Time,
            Mono::DateTime(_) => Tag::DateTime,
            Mono::Units(_) => Tag::Units,
            Mono::Bytes => Tag::Bytes,
            Mono::String(_) => Tag::String,
            Mono::CType(_) => Tag::CType,
            Mono::Json => Tag::Json,
            Mono::IntegerConstant(_) => Tag::IntegerConstant,
            Mono::StringConstant(_) => Tag::StringConstant,
            Mono::Fixed(_) => Tag::Fixed,
            Mono::Var => Tag::Var,
            Mono::Ellipsis(_) => Tag::Ellipsis,
            Mono::TypeVar(_) => Tag::TypeVar,
            Mono::DataShape(_) => Tag::DataShape,
            Mono::Record(_) => Tag::Record,
            Mono::Tuple(_) => Tag::Tuple,
            Mono::Function(_) => Tag::Function,
            Mono::Option(_) => Tag::Option,
            Mono::Implements(_) => Tag::Implements,
        }
    }

    /// Static classification; `None` for contextual nodes.
    #[inline]
    pub fn class(&self) -> Option<TypeClass> {
        self.tag().class()
    }

    /// The dimension prefix. Empty for anything but a `DataShape`.
    pub fn shape(&self) -> &[Mono] {
        match self {
            Mono::DataShape(ds) => ds.shape(),
            _ => &[],
        }
    }

    /// The terminal measure; a non-`DataShape` node is its own measure.
    pub fn measure(&self) -> &Mono {
        match self {
            Mono::DataShape(ds) => ds.measure(),
            _ => self,
        }
    }

    /// The type left after dropping `leading` leading dimensions.
    ///
    /// Dropping every dimension yields the bare measure, never a
    /// one-parameter `DataShape`.
    pub fn subarray(&self, leading: usize) -> Result<Mono, TypeError> {
        let available = self.shape().len();
        if leading > available {
            return Err(TypeError::OutOfRange {
                leading,
                available,
                shape: self.to_string(),
            });
        }
        match self {
            _ if leading == 0 => Ok(self.clone()),
            Mono::DataShape(ds) if leading == available => Ok(ds.measure().clone()),
            Mono::DataShape(ds) => {
                DataShape::new(ds.parameters()[leading..].to_vec()).map(Mono::DataShape)
            }
            _ => Ok(self.clone()),
        }
    }

    /// Signature form: every concrete dimension replaced by a fresh type
    /// variable (`i0`, `i1`, ...), measure untouched.
    ///
    /// Used to match literal-shaped types against generic signatures.
    pub fn sigform(&self) -> Mono {
        let Mono::DataShape(ds) = self else {
            return self.clone();
        };
        let mut fresh = 0;
        let params: Vec<Mono> = ds
            .shape()
            .iter()
            .map(|dim| match dim {
                Mono::Fixed(_) | Mono::IntegerConstant(_) => {
                    let var = TypeVar::fresh(fresh);
                    fresh += 1;
                    Mono::TypeVar(var)
                }
                other => other.clone(),
            })
            .chain(std::iter::once(ds.measure().clone()))
            .collect();
        // Type variables fit every dimension slot, so this cannot fail.
        DataShape::new(params).map_or_else(|_| self.clone(), Mono::DataShape)
    }

    /// Whether the tree has no free variables, `var` dimensions or
    /// ellipses.
    pub fn is_concrete(&self) -> bool {
        struct Concrete(bool);

        impl MonoVisitor for Concrete {
            fn visit_type_var(&mut self, _var: &TypeVar) {
                self.0 = false;
            }

            fn visit_var(&mut self) {
                self.0 = false;
            }

            fn visit_ellipsis(&mut self, _ellipsis: &Ellipsis) {
                self.0 = false;
            }
        }

        let mut check = Concrete(true);
        check.visit(self);
        check.0
    }
}

macro_rules! impl_from_payload {
    ($( $payload:ty => $variant:ident ),+ $(,)?) => {
        $(
            impl From<$payload> for Mono {
                fn from(value: $payload) -> Self {
                    Mono::$variant(value)
                }
            }
        )+
    };
}

impl_from_payload!(
    Time => Time,
    DateTime => DateTime,
    Units => Units,
    StringType => String,
    CType => CType,
    IntegerConstant => IntegerConstant,
    StringConstant => StringConstant,
    Fixed => Fixed,
    Ellipsis => Ellipsis,
    TypeVar => TypeVar,
    DataShape => DataShape,
    Record => Record,
    Tuple => Tuple,
    Function => Function,
    OptionType => Option,
    Implements => Implements,
);

impl PartialEq<i64> for Mono {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Mono::Fixed(fixed) => fixed == other,
            Mono::IntegerConstant(constant) => constant == other,
            _ => false,
        }
    }
}

impl PartialEq<Mono> for i64 {
    fn eq(&self, other: &Mono) -> bool {
        other == self
    }
}

impl PartialEq<&str> for Mono {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Mono::StringConstant(constant) if constant == other)
    }
}

impl PartialEq<Mono> for &str {
    fn eq(&self, other: &Mono) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests;
