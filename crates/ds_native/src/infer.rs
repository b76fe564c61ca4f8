//! Datashape inference for runtime values.
//!
//! Inference is a closed, ordered dispatch: a value that can describe its
//! own datashape is asked first, then the value kind decides. Anything
//! without a better description is an `object`.

use std::time::SystemTime;

use ds_types::{DateTime, Mono, Time};

use crate::{from_native, ConversionError, Dtype};

/// Runtime kind of a value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValueKind<'a> {
    /// A native array with its shape and element descriptor.
    Array { shape: &'a [i64], dtype: &'a Dtype },
    Bool,
    Int,
    Float,
    Complex,
    Str,
    Date,
    Time,
    DateTime,
    /// No specific kind.
    Other,
}

/// A value whose datashape can be inferred.
///
/// Both methods have defaults, so `impl Describe for T {}` describes `T`
/// as an opaque `object`.
pub trait Describe {
    /// The value's own datashape, if it knows it.
    fn dshape(&self) -> Option<Mono> {
        None
    }

    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Other
    }
}

/// Infer the datashape of a value.
#[tracing::instrument(level = "trace", skip_all, fields(kind = ?value.kind()))]
pub fn infer_type(value: &dyn Describe) -> Result<Mono, ConversionError> {
    if let Some(ty) = value.dshape() {
        return Ok(ty);
    }
    let ty = match value.kind() {
        ValueKind::Array { shape, dtype } => return from_native(shape, dtype),
        ValueKind::Bool => Mono::BOOL,
        ValueKind::Int => Mono::INT32,
        ValueKind::Float => Mono::FLOAT64,
        ValueKind::Complex => Mono::COMPLEX128,
        ValueKind::Str => Mono::STRING,
        ValueKind::Date => Mono::Date,
        ValueKind::Time => Mono::Time(Time::UNZONED),
        ValueKind::DateTime => Mono::DateTime(DateTime::UNZONED),
        ValueKind::Other => Mono::OBJECT,
    };
    Ok(ty)
}

/// An owned native array description: shape plus element descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NativeArray {
    shape: Vec<i64>,
    dtype: Dtype,
}

impl NativeArray {
    pub fn new(shape: Vec<i64>, dtype: Dtype) -> Self {
        Self { shape, dtype }
    }

    /// The native array a datashape describes.
    pub fn from_dshape(ty: &Mono) -> Result<Self, ConversionError> {
        let (shape, dtype) = crate::to_native(ty)?;
        Ok(Self { shape, dtype })
    }

    pub fn shape(&self) -> &[i64] {
        &self.shape
    }

    pub fn dtype(&self) -> &Dtype {
        &self.dtype
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
}

impl Describe for NativeArray {
    fn kind(&self) -> ValueKind<'_> {
        ValueKind::Array {
            shape: &self.shape,
            dtype: &self.dtype,
        }
    }
}

macro_rules! impl_describe {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn kind(&self) -> ValueKind<'_> {
                    ValueKind::$kind
                }
            }
        )+
    };
}

impl_describe!(Bool: bool);
impl_describe!(Int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_describe!(Float: f32, f64);
impl_describe!(Str: str, String, char);
impl_describe!(DateTime: SystemTime);

impl Describe for Mono {
    fn dshape(&self) -> Option<Mono> {
        Some(self.clone())
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn dshape(&self) -> Option<Mono> {
        (**self).dshape()
    }

    fn kind(&self) -> ValueKind<'_> {
        (**self).kind()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn dshape(&self) -> Option<Mono> {
        (**self).dshape()
    }

    fn kind(&self) -> ValueKind<'_> {
        (**self).kind()
    }
}

#[cfg(test)]
mod tests;
