//! Built-in native scalars.
//!
//! These are `const` values: they exist before any code runs and need no
//! registration to be used. [`TypeRegistry::with_builtins`] makes them
//! resolvable by name.
//!
//! [`TypeRegistry::with_builtins`]: crate::TypeRegistry::with_builtins

use std::mem::{align_of, size_of};

use crate::{CType, Mono, StringType};

pub const BOOL: CType = CType::from_static("bool", 1, 1);
pub const CHAR: CType = CType::from_static("char", 1, 1);

pub const INT8: CType = CType::from_static("int8", 1, 1);
pub const INT16: CType = CType::from_static("int16", 2, align_of::<i16>());
pub const INT32: CType = CType::from_static("int32", 4, align_of::<i32>());
pub const INT64: CType = CType::from_static("int64", 8, align_of::<i64>());

pub const UINT8: CType = CType::from_static("uint8", 1, 1);
pub const UINT16: CType = CType::from_static("uint16", 2, align_of::<u16>());
pub const UINT32: CType = CType::from_static("uint32", 4, align_of::<u32>());
pub const UINT64: CType = CType::from_static("uint64", 8, align_of::<u64>());

pub const FLOAT16: CType = CType::from_static("float16", 2, align_of::<u16>());
pub const FLOAT32: CType = CType::from_static("float32", 4, align_of::<f32>());
pub const FLOAT64: CType = CType::from_static("float64", 8, align_of::<f64>());

pub const COMPLEX_FLOAT32: CType = CType::from_static("complex[float32]", 8, align_of::<f32>());
pub const COMPLEX_FLOAT64: CType = CType::from_static("complex[float64]", 16, align_of::<f64>());

pub const VOID: CType = CType::from_static("void", 0, 1);
/// Opaque handle to a host-language object.
pub const OBJECT: CType = CType::from_static("object", size_of::<usize>(), align_of::<usize>());

// Pointer-sized integers follow the target, fixed at build time.
#[cfg(target_pointer_width = "64")]
pub const INTPTR: CType = INT64;
#[cfg(target_pointer_width = "64")]
pub const UINTPTR: CType = UINT64;
#[cfg(not(target_pointer_width = "64"))]
pub const INTPTR: CType = INT32;
#[cfg(not(target_pointer_width = "64"))]
pub const UINTPTR: CType = UINT32;

/// Every distinct built-in scalar, in declaration order.
pub const SCALARS: [CType; 17] = [
    BOOL,
    CHAR,
    INT8,
    INT16,
    INT32,
    INT64,
    UINT8,
    UINT16,
    UINT32,
    UINT64,
    FLOAT16,
    FLOAT32,
    FLOAT64,
    COMPLEX_FLOAT32,
    COMPLEX_FLOAT64,
    VOID,
    OBJECT,
];

/// Alternative names for built-in scalars.
///
/// `intptr` and `uintptr` share identity with a fixed-width integer, so
/// they appear here rather than in [`SCALARS`].
pub const ALIASES: [(&str, CType); 6] = [
    ("complex64", COMPLEX_FLOAT32),
    ("complex128", COMPLEX_FLOAT64),
    ("intptr", INTPTR),
    ("uintptr", UINTPTR),
    ("float", FLOAT32),
    ("double", FLOAT64),
];

impl Mono {
    pub const BOOL: Mono = Mono::CType(BOOL);
    pub const CHAR: Mono = Mono::CType(CHAR);
    pub const INT8: Mono = Mono::CType(INT8);
    pub const INT16: Mono = Mono::CType(INT16);
    pub const INT32: Mono = Mono::CType(INT32);
    pub const INT64: Mono = Mono::CType(INT64);
    pub const UINT8: Mono = Mono::CType(UINT8);
    pub const UINT16: Mono = Mono::CType(UINT16);
    pub const UINT32: Mono = Mono::CType(UINT32);
    pub const UINT64: Mono = Mono::CType(UINT64);
    pub const FLOAT16: Mono = Mono::CType(FLOAT16);
    pub const FLOAT32: Mono = Mono::CType(FLOAT32);
    pub const FLOAT64: Mono = Mono::CType(FLOAT64);
    pub const COMPLEX64: Mono = Mono::CType(COMPLEX_FLOAT32);
    pub const COMPLEX128: Mono = Mono::CType(COMPLEX_FLOAT64);
    pub const VOID: Mono = Mono::CType(VOID);
    pub const OBJECT: Mono = Mono::CType(OBJECT);
    pub const INTPTR: Mono = Mono::CType(INTPTR);
    pub const UINTPTR: Mono = Mono::CType(UINTPTR);

    /// Variable-length UTF-8 `string`.
    pub const STRING: Mono = Mono::String(StringType::VARIABLE);
}
