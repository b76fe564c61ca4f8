//! Datashape <-> native descriptor conversion.
//!
//! A native array is a `(shape, dtype)` pair. Going native, concrete
//! dimensions become extents and type variables become the wildcard `-1`;
//! only scalar and record measures have a native element kind. Coming
//! back, names resolve through the process-wide type registry.

use ds_types::{registry, DataShape, Encoding, Fixed, Mono, Record, StringType};

use crate::{ConversionError, Dtype, ScalarKind};

/// Extent standing for a dimension of unknown size.
pub const WILDCARD: i64 = -1;

/// Convert a datashape to a native `(shape, dtype)` pair.
#[tracing::instrument(level = "trace", skip_all, fields(ty = %ty))]
pub fn to_native(ty: &Mono) -> Result<(Vec<i64>, Dtype), ConversionError> {
    let shape = ty
        .shape()
        .iter()
        .map(|dim| extent(dim, ty))
        .collect::<Result<Vec<_>, _>>()?;
    let dtype = measure_to_dtype(ty.measure())?;
    Ok((shape, dtype))
}

/// Convert a datashape to its native element descriptor, discarding shape.
pub fn to_native_dtype(ty: &Mono) -> Result<Dtype, ConversionError> {
    to_native(ty).map(|(_, dtype)| dtype)
}

/// Convert a native `(shape, dtype)` pair to a datashape.
///
/// An empty shape yields the bare measure.
#[tracing::instrument(level = "trace", skip(dtype), fields(dtype = %dtype))]
pub fn from_native(shape: &[i64], dtype: &Dtype) -> Result<Mono, ConversionError> {
    let measure = dtype_to_measure(dtype)?;
    if shape.is_empty() {
        return Ok(measure);
    }
    let dims = shape
        .iter()
        .map(|&extent| Fixed::new(extent).map(Mono::Fixed))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Mono::DataShape(DataShape::from_parts(dims, measure)?))
}

fn extent(dim: &Mono, ty: &Mono) -> Result<i64, ConversionError> {
    let incompatible = || ConversionError::IncompatibleDimension {
        dim: dim.to_string(),
        ty: ty.to_string(),
    };
    match dim {
        Mono::Fixed(fixed) => i64::try_from(fixed.value()).map_err(|_| incompatible()),
        // Negative constants would alias the wildcard or be no size at all.
        Mono::IntegerConstant(constant) if constant.value() >= 0 => Ok(constant.value()),
        Mono::TypeVar(_) => Ok(WILDCARD),
        _ => Err(incompatible()),
    }
}

fn measure_to_dtype(measure: &Mono) -> Result<Dtype, ConversionError> {
    match measure {
        Mono::CType(ct) => {
            let name = match ct.name() {
                "complex[float32]" => "complex64",
                "complex[float64]" => "complex128",
                name => name,
            };
            ScalarKind::from_name(name).map(Dtype::Scalar).ok_or_else(|| {
                ConversionError::IncompatibleMeasure {
                    measure: measure.to_string(),
                }
            })
        }
        Mono::Record(record) => record_to_dtype(record),
        _ => Err(ConversionError::IncompatibleMeasure {
            measure: measure.to_string(),
        }),
    }
}

fn record_to_dtype(record: &Record) -> Result<Dtype, ConversionError> {
    let fields = record
        .fields()
        .map(|(name, ty)| -> Result<_, ConversionError> {
            let shape = ty
                .shape()
                .iter()
                .map(|dim| match dim {
                    Mono::Fixed(fixed) => Ok(fixed.value()),
                    Mono::IntegerConstant(constant) => u64::try_from(constant.value())
                        .map_err(|_| incompatible_field_dim(dim, ty)),
                    _ => Err(incompatible_field_dim(dim, ty)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok((name, measure_to_dtype(ty.measure())?, shape))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dtype::structured(fields))
}

fn incompatible_field_dim(dim: &Mono, ty: &Mono) -> ConversionError {
    ConversionError::IncompatibleDimension {
        dim: dim.to_string(),
        ty: ty.to_string(),
    }
}

fn dtype_to_measure(dtype: &Dtype) -> Result<Mono, ConversionError> {
    match dtype {
        Dtype::Scalar(scalar) => resolve_scalar(scalar.name()),
        Dtype::Bytes(len) => Ok(fixed_string(*len, Encoding::Ascii)),
        Dtype::Unicode { chars, width } => {
            let encoding = match width {
                1 => Encoding::Utf8,
                2 => Encoding::Utf16,
                4 => Encoding::Utf32,
                _ => {
                    return Err(ConversionError::UnexpectedKind {
                        descriptor: dtype.name().into_owned(),
                        expected: "a 1, 2 or 4 byte code unit",
                        found: format!("{width} byte code units"),
                    })
                }
            };
            Ok(fixed_string(*chars, encoding))
        }
        Dtype::Structured(fields) => {
            let fields = fields
                .iter()
                .map(|field| -> Result<_, ConversionError> {
                    let measure = dtype_to_measure(field.dtype())?;
                    let ty = if field.shape().is_empty() {
                        measure
                    } else {
                        let dims = field.shape().iter().map(|&n| Mono::Fixed(Fixed::from(n)));
                        Mono::DataShape(DataShape::from_parts(dims, measure)?)
                    };
                    Ok((field.name(), ty))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Mono::Record(Record::new(fields)?))
        }
    }
}

fn fixed_string(len: usize, encoding: Encoding) -> Mono {
    let fixlen = u64::try_from(len).unwrap_or(u64::MAX);
    Mono::String(StringType::with_encoding(Some(fixlen), encoding))
}

/// Resolve a native scalar name to its `CType` through the registry.
fn resolve_scalar(name: &str) -> Result<Mono, ConversionError> {
    let ty = registry::lookup(name)?;
    match ty {
        Mono::CType(_) => Ok(ty),
        other => Err(ConversionError::UnexpectedKind {
            descriptor: name.to_owned(),
            expected: "a native scalar",
            found: other.to_string(),
        }),
    }
}
