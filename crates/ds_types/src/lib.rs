//! Datashape type algebra.
//!
//! A datashape describes the shape (dimensions) and measure (element kind)
//! of array-like, record-like and scalar data: `5 * var * int32`,
//! `{ name : string, age : int8 }`, `A... * float64`.
//!
//! - All nodes are immutable values with structural `Eq`/`Hash`
//! - Constructors check every invariant and fail before a node exists
//! - `Display` is the canonical form, `Debug` the construct expression
//!
//! # Layout
//!
//! - [`Mono`]: the closed set of variants, with payloads in [`unit`] and
//!   [`composite`] types
//! - [`Tag`]/[`TypeClass`]: variant identity and static classification
//! - [`ctypes`]: built-in native scalars as constants
//! - [`TypeRegistry`]: name lookups, with a process-wide instance
//! - [`free_variables`], [`type_constructor`], [`Mono::subarray`],
//!   [`Mono::sigform`]: what a unifier asks of a type

mod algebra;
pub mod composite;
mod construct;
pub mod ctypes;
#[cfg(feature = "serde")]
mod de;
mod encoding;
mod error;
mod format;
mod mono;
pub mod registry;
mod tag;
mod traverse;
pub mod unit;

use std::sync::Once;

pub use algebra::{free_variables, type_constructor};
pub use composite::{DataShape, Function, Implements, OptionType, Record, Tuple};
pub use construct::Param;
pub use encoding::Encoding;
pub use error::{RegistryError, TypeError};
pub use mono::Mono;
pub use registry::{is_registered, lookup, register, register_named, TypeRegistry};
pub use tag::{Tag, TypeClass};
pub use traverse::MonoVisitor;
pub use unit::{
    CType, DateTime, Ellipsis, Fixed, IntegerConstant, StringConstant, StringType, Time, TypeVar,
    Units,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ds_types=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
