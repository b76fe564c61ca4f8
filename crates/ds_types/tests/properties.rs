//! Property-based tests for the datashape type algebra.
//!
//! Strategies generate valid dimension lists, measures and records and
//! check the structural laws every consumer relies on:
//! 1. Reconstruction: a node rebuilt from its tag and parameters is equal
//! 2. Shape/measure split: `DataShape` keeps exactly what it was given
//! 3. Record equality ignores field order, rendering does not
//! 4. `subarray` and `sigform` preserve the measure

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::BTreeMap;

use ds_types::{
    ctypes, free_variables, DataShape, Ellipsis, Fixed, Mono, Record, StringType, Tag,
    TypeRegistry, TypeVar,
};
use proptest::prelude::*;

// -- Strategies --

fn typevar_strategy() -> impl Strategy<Value = TypeVar> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,6}")
        .expect("valid regex")
        .prop_map(|symbol| TypeVar::new(symbol).expect("capitalized"))
}

fn dimension_strategy() -> impl Strategy<Value = Mono> {
    prop_oneof![
        (0_u64..10_000).prop_map(|n| Mono::Fixed(Fixed::from(n))),
        Just(Mono::Var),
        typevar_strategy().prop_map(Mono::TypeVar),
        proptest::option::of(typevar_strategy()).prop_map(|v| Mono::Ellipsis(Ellipsis::new(v))),
    ]
}

fn concrete_dimension_strategy() -> impl Strategy<Value = Mono> {
    (0_u64..10_000).prop_map(|n| Mono::Fixed(Fixed::from(n)))
}

fn scalar_strategy() -> impl Strategy<Value = Mono> {
    prop::sample::select(ctypes::SCALARS.to_vec()).prop_map(Mono::CType)
}

fn measure_strategy() -> impl Strategy<Value = Mono> {
    prop_oneof![
        3 => scalar_strategy(),
        1 => (proptest::option::of(1_u64..64), prop::sample::select(vec!["A", "U8", "U16", "U32"]))
            .prop_map(|(fixlen, enc)| {
                Mono::String(StringType::new(fixlen, Some(enc)).expect("canonical encoding"))
            }),
        1 => Just(Mono::Date),
        1 => Just(Mono::Json),
    ]
}

fn field_map_strategy() -> impl Strategy<Value = BTreeMap<String, Mono>> {
    prop::collection::btree_map("[a-z][a-z0-9_]{0,8}", scalar_strategy(), 1..6)
}

// -- Properties --

proptest! {
    #[test]
    fn datashape_keeps_shape_and_measure(
        dims in prop::collection::vec(dimension_strategy(), 1..5),
        measure in measure_strategy(),
    ) {
        let ds = DataShape::from_parts(dims.clone(), measure.clone()).expect("valid pair");
        prop_assert_eq!(ds.shape(), dims.as_slice());
        prop_assert_eq!(ds.measure(), &measure);
    }

    #[test]
    fn non_measure_terminal_always_fails(
        dims in prop::collection::vec(dimension_strategy(), 1..4),
        last in concrete_dimension_strategy(),
    ) {
        prop_assert!(DataShape::from_parts(dims, last).is_err());
    }

    #[test]
    fn measure_in_dimension_position_always_fails(
        measure in measure_strategy(),
        dims in prop::collection::vec(dimension_strategy(), 0..3),
    ) {
        let mut params = vec![measure.clone()];
        params.extend(dims);
        params.push(measure);
        prop_assert!(DataShape::new(params).is_err());
    }

    #[test]
    fn nodes_rebuild_from_parameters(
        dims in prop::collection::vec(dimension_strategy(), 1..4),
        measure in measure_strategy(),
    ) {
        let ty = Mono::DataShape(DataShape::from_parts(dims, measure).expect("valid pair"));
        prop_assert_eq!(Mono::from_parameters(ty.tag(), ty.parameters()), Ok(ty.clone()));
        for param in ty.shape().iter().chain([ty.measure()]) {
            prop_assert_eq!(
                Mono::from_parameters(param.tag(), param.parameters()),
                Ok(param.clone())
            );
        }

        let sig = ty.sigform();
        prop_assert_eq!(Mono::from_parameters(sig.tag(), sig.parameters()), Ok(sig.clone()));
        for dim in sig.shape() {
            prop_assert_eq!(Mono::from_parameters(dim.tag(), dim.parameters()), Ok(dim.clone()));
        }
    }

    #[test]
    fn record_equality_ignores_order(fields in field_map_strategy(), seed in any::<u64>()) {
        let forward: Vec<(String, Mono)> = fields.into_iter().collect();
        let mut shuffled = forward.clone();
        let len = shuffled.len();
        shuffled.rotate_left(usize::try_from(seed).unwrap_or(0) % len);
        shuffled.reverse();

        let a = Record::new(forward.clone()).expect("unique names");
        let b = Record::new(shuffled.clone()).expect("unique names");
        prop_assert_eq!(&a, &b);

        let names: Vec<&str> = b.names().collect();
        let expected: Vec<&str> = shuffled.iter().map(|(name, _)| name.as_str()).collect();
        prop_assert_eq!(names, expected);
        if forward != shuffled {
            prop_assert_ne!(a.to_string(), b.to_string());
        }
    }

    #[test]
    fn subarray_preserves_measure(
        dims in prop::collection::vec(concrete_dimension_strategy(), 1..5),
        measure in scalar_strategy(),
        leading in 0_usize..6,
    ) {
        let ty = Mono::DataShape(DataShape::from_parts(dims.clone(), measure.clone()).expect("valid"));
        match ty.subarray(leading) {
            Ok(sub) => {
                prop_assert!(leading <= dims.len());
                prop_assert_eq!(sub.measure(), &measure);
                prop_assert_eq!(sub.shape(), &dims[leading..]);
            }
            Err(_) => prop_assert!(leading > dims.len()),
        }
    }

    #[test]
    fn sigform_generalizes_concrete_dimensions(
        dims in prop::collection::vec(concrete_dimension_strategy(), 1..5),
        measure in measure_strategy(),
    ) {
        let ty = Mono::DataShape(DataShape::from_parts(dims.clone(), measure.clone()).expect("valid"));
        let sig = ty.sigform();
        prop_assert_eq!(sig.measure(), &measure);
        let expected: Vec<TypeVar> = (0..dims.len()).map(TypeVar::fresh).collect();
        prop_assert_eq!(free_variables(&sig), expected);
    }

    #[test]
    fn free_variables_follow_parameter_order(vars in prop::collection::vec(typevar_strategy(), 1..5)) {
        let dims = vars.iter().cloned().map(Mono::TypeVar);
        let ty = Mono::DataShape(DataShape::from_parts(dims, Mono::INT32).expect("valid"));
        prop_assert_eq!(free_variables(&ty), vars);
    }
}

#[test]
fn every_builtin_scalar_renders_as_its_name() {
    let registry = TypeRegistry::with_builtins();
    for name in registry.names() {
        let ty = registry.lookup(name).expect("listed name");
        if ty.tag() == Tag::CType && ctypes::SCALARS.iter().any(|ct| ct.name() == name) {
            assert_eq!(ty.to_string(), name);
        }
    }
}

#[test]
fn three_by_four_subarray() {
    let ty = Mono::DataShape(
        DataShape::from_parts(
            [Mono::Fixed(Fixed::from(3)), Mono::Fixed(Fixed::from(4))],
            Mono::INT32,
        )
        .expect("valid"),
    );
    assert_eq!(ty.subarray(2), Ok(Mono::INT32));
    assert!(ty.subarray(3).is_err());
    assert_eq!(ty.subarray(0), Ok(ty.clone()));
}
