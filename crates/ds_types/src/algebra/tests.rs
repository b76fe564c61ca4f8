use pretty_assertions::assert_eq;

use super::*;
use crate::{
    DataShape, Ellipsis, Fixed, Function, Implements, OptionType, Record, Tuple, Units,
};

fn tv(symbol: &str) -> TypeVar {
    TypeVar::new(symbol).expect("valid symbol")
}

fn dshape(params: Vec<Mono>) -> Mono {
    Mono::DataShape(DataShape::new(params).expect("valid datashape"))
}

#[test]
fn bare_typevar_is_free() {
    assert_eq!(free_variables(&Mono::TypeVar(tv("T"))), vec![tv("T")]);
}

#[test]
fn unit_types_have_no_free_variables() {
    assert!(free_variables(&Mono::INT32).is_empty());
    assert!(free_variables(&Mono::Var).is_empty());
    assert!(free_variables(&Mono::Fixed(Fixed::from(3))).is_empty());
}

#[test]
fn dimension_variables_in_order() {
    let ty = dshape(vec![Mono::TypeVar(tv("A")), Mono::TypeVar(tv("B")), Mono::INT32]);
    assert_eq!(free_variables(&ty), vec![tv("A"), tv("B")]);
}

#[test]
fn duplicates_are_kept() {
    let ty = dshape(vec![
        Mono::TypeVar(tv("N")),
        Mono::TypeVar(tv("N")),
        Mono::TypeVar(tv("T")),
    ]);
    assert_eq!(free_variables(&ty), vec![tv("N"), tv("N"), tv("T")]);
}

#[test]
fn ellipsis_binds_a_free_variable() {
    let ty = dshape(vec![
        Mono::Ellipsis(Ellipsis::new(Some(tv("A")))),
        Mono::Ellipsis(Ellipsis::new(None)),
        Mono::FLOAT64,
    ]);
    assert_eq!(free_variables(&ty), vec![tv("A")]);
}

#[test]
fn composites_are_searched_depth_first() {
    let record = Record::new([
        ("xs", dshape(vec![Mono::TypeVar(tv("N")), Mono::INT32])),
        ("y", Mono::TypeVar(tv("T"))),
    ])
    .expect("valid");
    let tuple = Tuple::new(vec![Mono::Record(record), Mono::TypeVar(tv("U"))]).expect("valid");
    let func = Function::new(vec![Mono::Tuple(tuple), Mono::TypeVar(tv("R"))]).expect("valid");

    assert_eq!(
        free_variables(&Mono::Function(func)),
        vec![tv("N"), tv("T"), tv("U"), tv("R")]
    );
}

#[test]
fn constraints_and_options() {
    let constraint = Mono::Implements(Implements::new(tv("A"), "numeric"));
    assert_eq!(free_variables(&constraint), vec![tv("A")]);

    let option = Mono::Option(OptionType::new(Mono::INT8).expect("valid"));
    assert!(free_variables(&option).is_empty());
}

#[test]
fn units_value_type_is_not_searched() {
    let units = Units::new("m", Some(Mono::TypeVar(tv("T")))).expect("typevar is standalone");
    assert!(free_variables(&Mono::Units(units)).is_empty());
}

#[test]
fn type_constructor_is_the_tag() {
    assert_eq!(type_constructor(&Mono::INT32), Tag::CType);
    assert_eq!(type_constructor(&Mono::FLOAT64), type_constructor(&Mono::INT8));
    assert_eq!(
        type_constructor(&dshape(vec![Mono::Var, Mono::INT8])),
        Tag::DataShape
    );
    assert_ne!(type_constructor(&Mono::Var), type_constructor(&Mono::TypeVar(tv("A"))));
}
