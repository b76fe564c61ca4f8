use pretty_assertions::assert_eq;

use super::*;

fn fixed(n: u64) -> Mono {
    Mono::Fixed(Fixed::from(n))
}

fn rebuild(ty: &Mono) -> Result<Mono, TypeError> {
    Mono::from_parameters(ty.tag(), ty.parameters())
}

fn samples() -> Vec<Mono> {
    let a = TypeVar::new("A").expect("valid symbol");
    vec![
        Mono::Null,
        Mono::Date,
        Mono::Bytes,
        Mono::Json,
        Mono::Var,
        Mono::Time(Time::new(Some("UTC"))),
        Mono::DateTime(DateTime::UNZONED),
        Mono::Units(Units::new("second", None).expect("valid")),
        Mono::Units(Units::new("tick", Some(Mono::INT64)).expect("valid")),
        Mono::STRING,
        Mono::String(StringType::new(Some(8), Some("ascii")).expect("valid")),
        Mono::INT32,
        Mono::COMPLEX64,
        Mono::IntegerConstant(IntegerConstant::new(-1)),
        Mono::StringConstant(StringConstant::new("x")),
        fixed(7),
        Mono::TypeVar(a.clone()),
        Mono::Ellipsis(Ellipsis::new(None)),
        Mono::Ellipsis(Ellipsis::new(Some(a.clone()))),
        Mono::DataShape(DataShape::new(vec![fixed(2), Mono::Var, Mono::FLOAT32]).expect("valid")),
        Mono::Record(Record::new([("x", Mono::INT8), ("y", Mono::STRING)]).expect("valid")),
        Mono::Tuple(Tuple::new(vec![Mono::INT8, Mono::BOOL]).expect("valid")),
        Mono::Function(Function::new(vec![Mono::INT8, Mono::BOOL]).expect("valid")),
        Mono::Option(OptionType::new(Mono::FLOAT64).expect("valid")),
        Mono::Implements(Implements::new(a, "integral")),
    ]
}

#[test]
fn every_variant_rebuilds_from_parameters() {
    for ty in samples() {
        assert_eq!(rebuild(&ty), Ok(ty.clone()), "rebuilding {ty:?}");
    }
}

#[test]
fn samples_cover_every_tag() {
    let tags: Vec<Tag> = samples().iter().map(Mono::tag).collect();
    for tag in Tag::ALL {
        assert!(tags.contains(&tag), "no sample for {tag:?}");
    }
}

#[test]
fn parameters_of_units() {
    assert_eq!(Mono::Var.parameters(), Vec::new());
    assert_eq!(fixed(3).parameters(), vec![Param::Int(3)]);
    assert_eq!(
        Mono::INT32.parameters(),
        vec![Param::from("int32"), Param::Int(4), Param::Int(4)]
    );
    assert_eq!(
        Mono::STRING.parameters(),
        vec![Param::None, Param::from("U8")]
    );
}

#[test]
fn string_accepts_wrapped_constants() {
    let built = Mono::from_parameters(
        Tag::String,
        vec![
            Param::Type(Mono::IntegerConstant(IntegerConstant::new(10))),
            Param::Type(Mono::StringConstant(StringConstant::new("utf-8"))),
        ],
    );
    assert_eq!(built.map(|ty| ty.to_string()), Ok("string[10]".to_owned()));
}

#[test]
fn string_with_only_encoding() {
    let built = Mono::from_parameters(Tag::String, vec![Param::from("ascii")]);
    assert_eq!(built.map(|ty| ty.to_string()), Ok("string['A']".to_owned()));
}

#[test]
fn string_rejects_negative_length() {
    let err = Mono::from_parameters(Tag::String, vec![Param::Int(-3)]).expect_err("negative");
    assert!(matches!(
        err,
        TypeError::InvalidParameter {
            variant: Tag::String,
            param: "fixlen",
            ..
        }
    ));
}

#[test]
fn invariants_are_checked() {
    assert_eq!(
        Mono::from_parameters(Tag::Fixed, vec![Param::Int(-1)]),
        Err(TypeError::NegativeDimension(-1))
    );
    assert!(Mono::from_parameters(Tag::DataShape, vec![Param::Type(Mono::INT32)]).is_err());
    assert!(Mono::from_parameters(Tag::TypeVar, vec![Param::from("lower")]).is_err());
    assert!(Mono::from_parameters(Tag::Option, vec![Param::Type(Mono::Var)]).is_err());
}

#[test]
fn sigform_variables_rebuild() {
    let ty = Mono::DataShape(
        DataShape::new(vec![fixed(3), fixed(4), Mono::INT32]).expect("valid"),
    );
    let sig = ty.sigform();
    for dim in sig.shape() {
        assert_eq!(Mono::from_parameters(dim.tag(), dim.parameters()), Ok(dim.clone()));
    }
    assert_eq!(Mono::from_parameters(sig.tag(), sig.parameters()), Ok(sig.clone()));
    assert_eq!(
        Mono::from_parameters(Tag::Ellipsis, vec![Param::from("i7")]),
        Ok(Mono::Ellipsis(Ellipsis::new(Some(TypeVar::fresh(7)))))
    );
    for symbol in ["i", "ix", "j0"] {
        assert!(Mono::from_parameters(Tag::TypeVar, vec![Param::from(symbol)]).is_err());
    }
}

#[test]
fn large_fixed_dimensions_rebuild_exactly() {
    let huge = Mono::Fixed(Fixed::from(u64::MAX));
    assert_eq!(huge.parameters(), vec![Param::Int(u64::MAX.into())]);
    assert_eq!(Mono::from_parameters(Tag::Fixed, huge.parameters()), Ok(huge.clone()));
    assert_eq!(format!("{huge:?}"), "Fixed(18446744073709551615)");

    let too_big = Param::Int(i128::from(u64::MAX) + 1);
    assert!(matches!(
        Mono::from_parameters(Tag::Fixed, vec![too_big]),
        Err(TypeError::InvalidParameter { param: "i", .. })
    ));
    let too_small = Param::Int(i128::from(i64::MIN) - 1);
    assert!(matches!(
        Mono::from_parameters(Tag::IntegerConstant, vec![too_small]),
        Err(TypeError::InvalidParameter { param: "i", .. })
    ));
}

#[test]
fn wrong_parameter_kind() {
    let err = Mono::from_parameters(Tag::Fixed, vec![Param::from("three")]).expect_err("kind");
    assert_eq!(
        err,
        TypeError::InvalidParameter {
            variant: Tag::Fixed,
            param: "i",
            reason: "expected an integer, got string".to_owned(),
        }
    );
}

#[test]
fn extra_parameters_are_rejected() {
    let err = Mono::from_parameters(Tag::Var, vec![Param::Int(1)]).expect_err("var takes none");
    assert_eq!(
        err,
        TypeError::Arity {
            variant: Tag::Var,
            expected: "fewer",
            found: 1,
        }
    );
}

#[test]
fn optional_parameter_conversions() {
    assert_eq!(Param::from(None::<&str>), Param::None);
    assert_eq!(Param::from(Some(5_i64)), Param::Int(5));
    assert_eq!(Param::from(Mono::BOOL), Param::Type(Mono::BOOL));
}
