//! Native fixed-size array element descriptors.
//!
//! `Dtype` mirrors the element description of a native array library:
//! a one-character kind, a name, an item size and an alignment. Byte order
//! is the native library's concern and is not modeled.

use std::borrow::Cow;
use std::fmt;

/// Scalar element kinds of the native library.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Complex64,
    Complex128,
    /// Reference to a host object.
    Object,
}

impl ScalarKind {
    /// Every scalar kind.
    pub const ALL: [ScalarKind; 15] = [
        ScalarKind::Bool,
        ScalarKind::Int8,
        ScalarKind::Int16,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::UInt8,
        ScalarKind::UInt16,
        ScalarKind::UInt32,
        ScalarKind::UInt64,
        ScalarKind::Float16,
        ScalarKind::Float32,
        ScalarKind::Float64,
        ScalarKind::Complex64,
        ScalarKind::Complex128,
        ScalarKind::Object,
    ];

    /// Native name (`int32`, `complex128`, `object`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float16 => "float16",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Object => "object",
        }
    }

    /// Resolve a native name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// One-character kind code.
    pub const fn kind(self) -> char {
        match self {
            Self::Bool => 'b',
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => 'i',
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64 => 'u',
            Self::Float16 | Self::Float32 | Self::Float64 => 'f',
            Self::Complex64 | Self::Complex128 => 'c',
            Self::Object => 'O',
        }
    }

    pub const fn itemsize(self) -> usize {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 | Self::Float16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 | Self::Complex64 => 8,
            Self::Complex128 => 16,
            Self::Object => std::mem::size_of::<usize>(),
        }
    }

    pub const fn alignment(self) -> usize {
        match self {
            Self::Complex64 => std::mem::align_of::<f32>(),
            Self::Complex128 => std::mem::align_of::<f64>(),
            Self::Object => std::mem::align_of::<usize>(),
            other => other.itemsize(),
        }
    }
}

/// One field of a structured descriptor.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Field {
    name: Box<str>,
    dtype: Dtype,
    shape: Box<[u64]>,
    offset: usize,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> &Dtype {
        &self.dtype
    }

    /// Fixed sub-array extents of the field; empty for a scalar field.
    pub fn shape(&self) -> &[u64] {
        &self.shape
    }

    /// Byte offset within the packed record.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes occupied by the field, sub-array included.
    pub fn size(&self) -> usize {
        self.shape
            .iter()
            .fold(self.dtype.itemsize(), |size, &extent| {
                size.saturating_mul(usize::try_from(extent).unwrap_or(usize::MAX))
            })
    }
}

/// Element descriptor of a native array.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Dtype {
    /// A fixed-size scalar.
    Scalar(ScalarKind),
    /// Fixed-length byte string of the given length (kind `S`).
    Bytes(usize),
    /// Fixed-length text of `chars` code units, each `width` bytes (kind `U`).
    Unicode { chars: usize, width: usize },
    /// Packed record of named fields (kind `V`).
    Structured(Box<[Field]>),
}

impl Dtype {
    /// A packed structured descriptor; offsets follow declaration order.
    pub fn structured<N>(fields: impl IntoIterator<Item = (N, Dtype, Vec<u64>)>) -> Self
    where
        N: Into<Box<str>>,
    {
        let mut offset = 0;
        let fields = fields
            .into_iter()
            .map(|(name, dtype, shape)| {
                let field = Field {
                    name: name.into(),
                    dtype,
                    shape: shape.into_boxed_slice(),
                    offset,
                };
                offset += field.size();
                field
            })
            .collect();
        Dtype::Structured(fields)
    }

    /// One-character kind code.
    pub fn kind(&self) -> char {
        match self {
            Dtype::Scalar(scalar) => scalar.kind(),
            Dtype::Bytes(_) => 'S',
            Dtype::Unicode { .. } => 'U',
            Dtype::Structured(_) => 'V',
        }
    }

    /// Native name (`int32`, `S10`, `U8`, `V12`).
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Dtype::Scalar(scalar) => Cow::Borrowed(scalar.name()),
            Dtype::Bytes(len) => Cow::Owned(format!("S{len}")),
            Dtype::Unicode { chars, .. } => Cow::Owned(format!("U{chars}")),
            Dtype::Structured(_) => Cow::Owned(format!("V{}", self.itemsize())),
        }
    }

    pub fn itemsize(&self) -> usize {
        match self {
            Dtype::Scalar(scalar) => scalar.itemsize(),
            Dtype::Bytes(len) => *len,
            Dtype::Unicode { chars, width } => chars.saturating_mul(*width),
            Dtype::Structured(fields) => fields
                .last()
                .map_or(0, |field| field.offset().saturating_add(field.size())),
        }
    }

    pub fn alignment(&self) -> usize {
        match self {
            Dtype::Scalar(scalar) => scalar.alignment(),
            Dtype::Unicode { width, .. } => *width,
            Dtype::Bytes(_) | Dtype::Structured(_) => 1,
        }
    }

    /// Fields of a structured descriptor; empty otherwise.
    pub fn fields(&self) -> &[Field] {
        match self {
            Dtype::Structured(fields) => fields,
            _ => &[],
        }
    }
}

impl From<ScalarKind> for Dtype {
    fn from(kind: ScalarKind) -> Self {
        Dtype::Scalar(kind)
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
