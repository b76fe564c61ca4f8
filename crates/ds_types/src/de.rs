//! Deserialization shapes for validated payloads.
//!
//! Each payload with an invariant deserializes into one of these plain
//! shapes first and is then rebuilt through its constructor, so
//! deserialized trees satisfy the same invariants as constructed ones.

use serde::Deserialize;

use crate::{DataShape, Function, Mono, OptionType, Record, Tuple, TypeError, TypeVar, Units};

#[derive(Deserialize)]
pub struct DataShapeRepr {
    params: Vec<Mono>,
    name: Option<Box<str>>,
}

impl TryFrom<DataShapeRepr> for DataShape {
    type Error = TypeError;

    fn try_from(repr: DataShapeRepr) -> Result<Self, TypeError> {
        match repr.name {
            Some(name) => DataShape::named(name, repr.params),
            None => DataShape::new(repr.params),
        }
    }
}

#[derive(Deserialize)]
pub struct RecordRepr {
    fields: Vec<(Box<str>, Mono)>,
}

impl TryFrom<RecordRepr> for Record {
    type Error = TypeError;

    fn try_from(repr: RecordRepr) -> Result<Self, TypeError> {
        Record::new(repr.fields)
    }
}

#[derive(Deserialize)]
pub struct TupleRepr {
    dshapes: Vec<Mono>,
}

impl TryFrom<TupleRepr> for Tuple {
    type Error = TypeError;

    fn try_from(repr: TupleRepr) -> Result<Self, TypeError> {
        Tuple::new(repr.dshapes)
    }
}

#[derive(Deserialize)]
pub struct FunctionRepr {
    params: Vec<Mono>,
}

impl TryFrom<FunctionRepr> for Function {
    type Error = TypeError;

    fn try_from(repr: FunctionRepr) -> Result<Self, TypeError> {
        Function::new(repr.params)
    }
}

#[derive(Deserialize)]
pub struct OptionRepr {
    ty: Mono,
}

impl TryFrom<OptionRepr> for OptionType {
    type Error = TypeError;

    fn try_from(repr: OptionRepr) -> Result<Self, TypeError> {
        OptionType::new(repr.ty)
    }
}

#[derive(Deserialize)]
pub struct UnitsRepr {
    unit: Box<str>,
    tp: Mono,
}

impl TryFrom<UnitsRepr> for Units {
    type Error = TypeError;

    fn try_from(repr: UnitsRepr) -> Result<Self, TypeError> {
        Units::new(repr.unit, Some(repr.tp))
    }
}

impl TryFrom<Box<str>> for TypeVar {
    type Error = TypeError;

    fn try_from(symbol: Box<str>) -> Result<Self, TypeError> {
        TypeVar::from_symbol(symbol)
    }
}
