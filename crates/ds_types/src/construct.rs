//! Generic construction from parameter lists.
//!
//! Every node exposes its ordered parameters, and
//! `Mono::from_parameters(node.tag(), node.parameters())` rebuilds an equal
//! node. This is also the entry point a grammar front end uses: one
//! production maps onto one tag plus its parameter list, and every
//! invariant is checked here before a node exists.

use crate::{
    CType, DataShape, DateTime, Ellipsis, Fixed, Function, Implements, IntegerConstant, Mono,
    OptionType, Record, StringConstant, StringType, Tag, Time, Tuple, TypeError, TypeVar, Units,
};

/// One type-constructor parameter.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Param {
    /// An omitted optional parameter.
    None,
    /// Wide enough for every `Fixed` and `IntegerConstant` value.
    Int(i128),
    Str(Box<str>),
    Type(Mono),
    Types(Vec<Mono>),
    /// Record fields in declaration order.
    Fields(Vec<(Box<str>, Mono)>),
}

impl Param {
    fn kind(&self) -> &'static str {
        match self {
            Param::None => "None",
            Param::Int(_) => "integer",
            Param::Str(_) => "string",
            Param::Type(_) => "type",
            Param::Types(_) => "type list",
            Param::Fields(_) => "field list",
        }
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        self.format_construct_into(&mut buf);
        f.write_str(&buf)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value.into())
    }
}

impl From<u64> for Param {
    fn from(value: u64) -> Self {
        Param::Int(value.into())
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Str(value.into())
    }
}

impl From<Mono> for Param {
    fn from(value: Mono) -> Self {
        Param::Type(value)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Param::None, Into::into)
    }
}

impl Mono {
    /// Ordered constructor parameters.
    pub fn parameters(&self) -> Vec<Param> {
        match self {
            Mono::Null | Mono::Date | Mono::Bytes | Mono::Json | Mono::Var => Vec::new(),
            Mono::Time(time) => vec![time.tz().into()],
            Mono::DateTime(datetime) => vec![datetime.tz().into()],
            Mono::Units(units) => vec![units.unit().into(), Param::Type(units.tp().clone())],
            Mono::String(string) => vec![
                string.fixlen().into(),
                string.encoding().canonical().into(),
            ],
            Mono::CType(ct) => vec![
                ct.name().into(),
                size_param(ct.itemsize()),
                size_param(ct.c_alignment()),
            ],
            Mono::IntegerConstant(constant) => vec![constant.value().into()],
            Mono::StringConstant(constant) => vec![constant.value().into()],
            Mono::Fixed(fixed) => vec![fixed.value().into()],
            Mono::TypeVar(var) => vec![var.symbol().into()],
            Mono::Ellipsis(ellipsis) => {
                vec![ellipsis.typevar().cloned().map(Mono::TypeVar).into()]
            }
            Mono::DataShape(ds) => ds.parameters().iter().cloned().map(Param::Type).collect(),
            Mono::Record(record) => vec![Param::Fields(
                record
                    .fields()
                    .map(|(name, ty)| (Box::from(name), ty.clone()))
                    .collect(),
            )],
            Mono::Tuple(tuple) => vec![Param::Types(tuple.dshapes().to_vec())],
            Mono::Function(func) => func.parameters().iter().cloned().map(Param::Type).collect(),
            Mono::Option(option) => vec![Param::Type(option.ty().clone())],
            Mono::Implements(implements) => vec![
                Param::Type(Mono::TypeVar(implements.typevar().clone())),
                implements.typeset().into(),
            ],
        }
    }

    /// Build the node `tag` from its parameters, checking every invariant.
    pub fn from_parameters(tag: Tag, params: Vec<Param>) -> Result<Mono, TypeError> {
        let mut args = Args::new(tag, params);
        let ty = match tag {
            Tag::Null => Mono::Null,
            Tag::Date => Mono::Date,
            Tag::Bytes => Mono::Bytes,
            Tag::Json => Mono::Json,
            Tag::Var => Mono::Var,
            Tag::Time => Mono::Time(Time::new(args.opt_str("tz")?.as_deref())),
            Tag::DateTime => Mono::DateTime(DateTime::new(args.opt_str("tz")?.as_deref())),
            Tag::Units => {
                let unit = args.str("unit")?;
                let tp = args.opt_type("tp")?;
                Mono::Units(Units::new(unit, tp)?)
            }
            Tag::String => Mono::String(args.string()?),
            Tag::CType => {
                let name = args.str("name")?;
                let itemsize = args.size("itemsize")?;
                let alignment = args.size("alignment")?;
                Mono::CType(CType::new(name.into_string(), itemsize, alignment))
            }
            Tag::IntegerConstant => Mono::IntegerConstant(IntegerConstant::new(args.int_in("i")?)),
            Tag::StringConstant => Mono::StringConstant(StringConstant::new(args.str("s")?)),
            Tag::Fixed => {
                let value = args.int("i")?;
                let fixed = u64::try_from(value).map_err(|_| match i64::try_from(value) {
                    Ok(negative) => TypeError::NegativeDimension(negative),
                    Err(_) => TypeError::invalid(tag, "i", format!("{value} is out of range")),
                })?;
                Mono::Fixed(Fixed::from(fixed))
            }
            Tag::TypeVar => Mono::TypeVar(TypeVar::from_symbol(args.str("symbol")?)?),
            Tag::Ellipsis => Mono::Ellipsis(Ellipsis::new(args.opt_typevar("typevar")?)),
            Tag::DataShape => Mono::DataShape(DataShape::new(args.rest_types()?)?),
            Tag::Record => Mono::Record(Record::new(args.fields()?)?),
            Tag::Tuple => Mono::Tuple(Tuple::new(args.types("dshapes")?)?),
            Tag::Function => Mono::Function(Function::new(args.rest_types()?)?),
            Tag::Option => Mono::Option(OptionType::new(args.ty("ds")?)?),
            Tag::Implements => {
                let typevar = args.opt_typevar("typevar")?.ok_or_else(|| {
                    TypeError::invalid(tag, "typevar", "a type variable is required")
                })?;
                Mono::Implements(Implements::new(typevar, args.str("typeset")?))
            }
        };
        args.finish()?;
        Ok(ty)
    }
}

fn size_param(size: usize) -> Param {
    // usize is at most 64 bits on every supported target.
    u64::try_from(size).map_or(Param::None, Param::from)
}

/// Positional parameter cursor for one constructor call.
struct Args {
    tag: Tag,
    params: std::vec::IntoIter<Param>,
    total: usize,
}

impl Args {
    fn new(tag: Tag, params: Vec<Param>) -> Self {
        Self {
            tag,
            total: params.len(),
            params: params.into_iter(),
        }
    }

    fn pop(&mut self) -> Param {
        self.params.next().unwrap_or(Param::None)
    }

    fn wrong_kind(&self, name: &'static str, expected: &str, found: &Param) -> TypeError {
        TypeError::invalid(
            self.tag,
            name,
            format!("expected {expected}, got {}", found.kind()),
        )
    }

    fn int(&mut self, name: &'static str) -> Result<i128, TypeError> {
        match self.pop() {
            Param::Int(value) => Ok(value),
            Param::Type(Mono::IntegerConstant(constant)) => Ok(constant.value().into()),
            other => Err(self.wrong_kind(name, "an integer", &other)),
        }
    }

    /// An integer converted to `T`, rejected when it does not fit.
    fn int_in<T: TryFrom<i128>>(&mut self, name: &'static str) -> Result<T, TypeError> {
        let value = self.int(name)?;
        T::try_from(value)
            .map_err(|_| TypeError::invalid(self.tag, name, format!("{value} is out of range")))
    }

    fn size(&mut self, name: &'static str) -> Result<usize, TypeError> {
        self.int_in(name)
    }

    fn opt_str(&mut self, name: &'static str) -> Result<Option<Box<str>>, TypeError> {
        match self.pop() {
            Param::None => Ok(None),
            Param::Str(value) => Ok(Some(value)),
            Param::Type(Mono::StringConstant(constant)) => Ok(Some(constant.value().into())),
            other => Err(self.wrong_kind(name, "a string or None", &other)),
        }
    }

    fn str(&mut self, name: &'static str) -> Result<Box<str>, TypeError> {
        self.opt_str(name)?
            .ok_or_else(|| TypeError::invalid(self.tag, name, "a string is required"))
    }

    fn opt_type(&mut self, name: &'static str) -> Result<Option<Mono>, TypeError> {
        match self.pop() {
            Param::None => Ok(None),
            Param::Type(ty) => Ok(Some(ty)),
            other => Err(self.wrong_kind(name, "a type or None", &other)),
        }
    }

    fn ty(&mut self, name: &'static str) -> Result<Mono, TypeError> {
        self.opt_type(name)?
            .ok_or_else(|| TypeError::invalid(self.tag, name, "a type is required"))
    }

    fn opt_typevar(&mut self, name: &'static str) -> Result<Option<TypeVar>, TypeError> {
        match self.pop() {
            Param::None => Ok(None),
            Param::Type(Mono::TypeVar(var)) => Ok(Some(var)),
            Param::Str(symbol) => TypeVar::from_symbol(symbol).map(Some),
            other => Err(self.wrong_kind(name, "a type variable", &other)),
        }
    }

    fn types(&mut self, name: &'static str) -> Result<Vec<Mono>, TypeError> {
        match self.pop() {
            Param::Types(types) => Ok(types),
            other => Err(self.wrong_kind(name, "a type list", &other)),
        }
    }

    fn fields(&mut self) -> Result<Vec<(Box<str>, Mono)>, TypeError> {
        match self.pop() {
            Param::Fields(fields) => Ok(fields),
            Param::None => Ok(Vec::new()),
            other => Err(self.wrong_kind("fields", "a field list", &other)),
        }
    }

    /// Every remaining parameter, each a single type.
    fn rest_types(&mut self) -> Result<Vec<Mono>, TypeError> {
        let mut types = Vec::with_capacity(self.params.len());
        for param in self.params.by_ref() {
            match param {
                Param::Type(ty) => types.push(ty),
                other => {
                    return Err(TypeError::invalid(
                        self.tag,
                        "params",
                        format!("expected a type, got {}", other.kind()),
                    ))
                }
            }
        }
        Ok(types)
    }

    /// `string`, `string[N]`, `string['enc']` or `string[N, 'enc']`.
    fn string(&mut self) -> Result<StringType, TypeError> {
        let (fixlen, encoding) = match (self.pop(), self.pop()) {
            (first @ (Param::Str(_) | Param::Type(Mono::StringConstant(_))), Param::None) => {
                (Param::None, first)
            }
            pair => pair,
        };
        let fixlen = match fixlen {
            Param::None => None,
            Param::Int(n) => Some(n),
            Param::Type(Mono::IntegerConstant(constant)) => Some(constant.value().into()),
            other => return Err(self.wrong_kind("fixlen", "an integer or None", &other)),
        };
        let fixlen = fixlen
            .map(u64::try_from)
            .transpose()
            .map_err(|_| TypeError::invalid(self.tag, "fixlen", "must be non-negative"))?;
        let encoding = match encoding {
            Param::None => None,
            Param::Str(alias) => Some(alias),
            Param::Type(Mono::StringConstant(constant)) => Some(constant.value().into()),
            other => return Err(self.wrong_kind("encoding", "a string or None", &other)),
        };
        StringType::new(fixlen, encoding.as_deref())
    }

    /// Fail if parameters are left over.
    fn finish(mut self) -> Result<(), TypeError> {
        if self.params.next().is_some() {
            return Err(TypeError::Arity {
                variant: self.tag,
                expected: "fewer",
                found: self.total,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
