//! Native-array interop for datashape types.
//!
//! Converts between datashape type trees and the `(shape, dtype)` pair a
//! native fixed-size array library uses, and infers datashapes for runtime
//! values.
//!
//! - [`to_native`] / [`from_native`]: the two directions of conversion
//! - [`Dtype`]: the native element descriptor
//! - [`infer_type`]: ordered dispatch over [`Describe`] values

mod convert;
mod dtype;
mod error;
mod infer;

pub use convert::{from_native, to_native, to_native_dtype, WILDCARD};
pub use dtype::{Dtype, Field, ScalarKind};
pub use error::ConversionError;
pub use infer::{infer_type, Describe, NativeArray, ValueKind};
