use pretty_assertions::assert_eq;

use super::*;
use crate::ScalarKind;

struct Opaque;

impl Describe for Opaque {}

struct SelfDescribed;

impl Describe for SelfDescribed {
    fn dshape(&self) -> Option<Mono> {
        Some(Mono::Json)
    }

    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Int
    }
}

#[test]
fn primitives_map_to_fixed_measures() {
    assert_eq!(infer_type(&true), Ok(Mono::BOOL));
    assert_eq!(infer_type(&1_i64), Ok(Mono::INT32));
    assert_eq!(infer_type(&7_u8), Ok(Mono::INT32));
    assert_eq!(infer_type(&1.5_f64), Ok(Mono::FLOAT64));
    assert_eq!(infer_type(&2.5_f32), Ok(Mono::FLOAT64));
    assert_eq!(infer_type(&"text"), Ok(Mono::STRING));
    assert_eq!(infer_type(&String::from("text")), Ok(Mono::STRING));
}

#[test]
fn system_time_is_datetime() {
    assert_eq!(
        infer_type(&SystemTime::UNIX_EPOCH),
        Ok(Mono::DateTime(DateTime::UNZONED))
    );
}

#[test]
fn unknown_values_are_objects() {
    assert_eq!(infer_type(&Opaque), Ok(Mono::OBJECT));
}

#[test]
fn own_dshape_takes_precedence() {
    assert_eq!(infer_type(&SelfDescribed), Ok(Mono::Json));
    assert_eq!(infer_type(&Mono::INT16), Ok(Mono::INT16));
}

#[test]
fn arrays_go_through_native_conversion() {
    let array = NativeArray::new(vec![5, 5], Dtype::Scalar(ScalarKind::Int32));
    assert_eq!(array.ndim(), 2);
    let ty = infer_type(&array).expect("native array");
    assert_eq!(ty.to_string(), "5 * 5 * int32");
}

#[test]
fn array_round_trips_through_dshape() {
    let array = NativeArray::new(vec![3], Dtype::Scalar(ScalarKind::Float32));
    let ty = infer_type(&array).expect("native array");
    assert_eq!(NativeArray::from_dshape(&ty), Ok(array));
}

#[test]
fn kinds_without_a_rust_type() {
    struct Kind(ValueKind<'static>);

    impl Describe for Kind {
        fn kind(&self) -> ValueKind<'_> {
            self.0
        }
    }

    assert_eq!(infer_type(&Kind(ValueKind::Complex)), Ok(Mono::COMPLEX128));
    assert_eq!(infer_type(&Kind(ValueKind::Date)), Ok(Mono::Date));
    assert_eq!(infer_type(&Kind(ValueKind::Time)), Ok(Mono::Time(Time::UNZONED)));
}

#[test]
fn references_and_boxes_delegate() {
    let boxed: Box<dyn Describe> = Box::new(3_i32);
    assert_eq!(infer_type(&boxed), Ok(Mono::INT32));
    assert_eq!(infer_type(&&false), Ok(Mono::BOOL));
}
