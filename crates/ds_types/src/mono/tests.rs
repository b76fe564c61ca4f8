use pretty_assertions::assert_eq;

use super::*;

fn fixed(n: u64) -> Mono {
    Mono::Fixed(Fixed::from(n))
}

fn var(symbol: &str) -> Mono {
    Mono::TypeVar(TypeVar::new(symbol).expect("valid symbol"))
}

fn dshape(params: Vec<Mono>) -> Mono {
    Mono::DataShape(DataShape::new(params).expect("valid datashape"))
}

// Tags and classes

#[test]
fn tag_matches_variant() {
    assert_eq!(Mono::INT32.tag(), Tag::CType);
    assert_eq!(Mono::Var.tag(), Tag::Var);
    assert_eq!(fixed(3).tag(), Tag::Fixed);
    assert_eq!(dshape(vec![fixed(3), Mono::INT32]).tag(), Tag::DataShape);
}

#[test]
fn class_is_static_per_variant() {
    assert_eq!(Mono::INT32.class(), Some(TypeClass::Measure));
    assert_eq!(Mono::STRING.class(), Some(TypeClass::Measure));
    assert_eq!(fixed(3).class(), Some(TypeClass::Dimension));
    assert_eq!(Mono::Var.class(), Some(TypeClass::Dimension));
    assert_eq!(var("A").class(), None);
}

// Shape and measure

#[test]
fn unit_measure_is_its_own_measure() {
    assert!(Mono::INT32.shape().is_empty());
    assert_eq!(Mono::INT32.measure(), &Mono::INT32);
}

#[test]
fn datashape_splits_shape_and_measure() {
    let ds = dshape(vec![fixed(5), Mono::Var, Mono::FLOAT64]);
    assert_eq!(ds.shape(), &[fixed(5), Mono::Var]);
    assert_eq!(ds.measure(), &Mono::FLOAT64);
}

// subarray

#[test]
fn subarray_zero_is_identity() {
    let ds = dshape(vec![fixed(3), fixed(4), Mono::INT32]);
    assert_eq!(ds.subarray(0), Ok(ds.clone()));
}

#[test]
fn subarray_drops_leading_dimensions() {
    let ds = dshape(vec![fixed(3), fixed(4), fixed(5), Mono::INT32]);
    assert_eq!(
        ds.subarray(1),
        Ok(dshape(vec![fixed(4), fixed(5), Mono::INT32]))
    );
}

#[test]
fn subarray_of_every_dimension_is_bare_measure() {
    let ds = dshape(vec![fixed(3), fixed(4), Mono::INT32]);
    assert_eq!(ds.subarray(2), Ok(Mono::INT32));
}

#[test]
fn subarray_out_of_range() {
    let ds = dshape(vec![fixed(3), fixed(4), Mono::INT32]);
    let err = ds.subarray(3).expect_err("only two dimensions");
    assert_eq!(
        err,
        TypeError::OutOfRange {
            leading: 3,
            available: 2,
            shape: "3 * 4 * int32".to_owned(),
        }
    );
    assert!(Mono::INT32.subarray(1).is_err());
    assert_eq!(Mono::INT32.subarray(0), Ok(Mono::INT32));
}

// sigform

#[test]
fn sigform_replaces_fixed_dimensions() {
    let ds = dshape(vec![fixed(5), fixed(7), Mono::FLOAT32]);
    let sig = ds.sigform();
    assert_eq!(
        sig,
        dshape(vec![
            Mono::TypeVar(TypeVar::fresh(0)),
            Mono::TypeVar(TypeVar::fresh(1)),
            Mono::FLOAT32,
        ])
    );
    assert_eq!(sig.to_string(), "i0 * i1 * float32");
    assert_eq!(sig.measure(), ds.measure());
}

#[test]
fn sigform_keeps_symbolic_dimensions() {
    let ds = dshape(vec![var("N"), fixed(2), Mono::Var, Mono::INT8]);
    assert_eq!(ds.sigform().to_string(), "N * i0 * var * int8");
}

#[test]
fn sigform_of_measure_is_unchanged() {
    assert_eq!(Mono::INT32.sigform(), Mono::INT32);
}

// is_concrete

#[test]
fn concrete_types() {
    assert!(Mono::INT32.is_concrete());
    assert!(dshape(vec![fixed(2), fixed(3), Mono::FLOAT64]).is_concrete());
}

#[test]
fn symbolic_types_are_not_concrete() {
    assert!(!var("A").is_concrete());
    assert!(!dshape(vec![Mono::Var, Mono::INT32]).is_concrete());
    assert!(!dshape(vec![Mono::Ellipsis(Ellipsis::new(None)), Mono::INT32]).is_concrete());
    assert!(!dshape(vec![fixed(2), var("T")]).is_concrete());
}

// Mixed equality

#[test]
fn dimensions_compare_with_integers() {
    assert!(fixed(3) == 3_i64);
    assert!(3_i64 == fixed(3));
    assert!(fixed(3) != 4_i64);
    assert!(Mono::IntegerConstant(IntegerConstant::new(-2)) == -2_i64);
    assert!(Mono::INT32 != 3_i64);
}

#[test]
fn string_constants_compare_with_str() {
    let constant = Mono::StringConstant(StringConstant::new("utf-8"));
    assert!(constant == "utf-8");
    assert!("utf-8" == constant);
    assert!(constant != "ascii");
    assert!(Mono::STRING != "string");
}

#[test]
fn independently_built_nodes_are_equal() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(ty: &Mono) -> u64 {
        let mut hasher = DefaultHasher::new();
        ty.hash(&mut hasher);
        hasher.finish()
    }

    let a = Mono::CType(CType::new("int32", 4, 4));
    assert_eq!(a, Mono::INT32);
    assert_eq!(hash_of(&a), hash_of(&Mono::INT32));
}

#[test]
fn from_payloads() {
    assert_eq!(Mono::from(Fixed::from(2)), fixed(2));
    assert_eq!(Mono::from(crate::ctypes::BOOL), Mono::BOOL);
}
