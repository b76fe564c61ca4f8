//! Name-to-type registry.
//!
//! `TypeRegistry` is an ordinary map that never overwrites an entry. A
//! process-wide instance, seeded with every built-in, backs the free
//! functions at the bottom of this module; the parser and native interop
//! resolve bare identifiers through it.

use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{ctypes, DataShape, DateTime, Mono, RegistryError, Time};

/// Mapping from canonical name to type.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<Box<str>, Mono>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in scalar, its aliases and the
    /// named unit measures (`string`, `bytes`, `json`, ...).
    pub fn with_builtins() -> Self {
        let named = [
            ("bytes", Mono::Bytes),
            ("string", Mono::STRING),
            ("json", Mono::Json),
            ("date", Mono::Date),
            ("time", Mono::Time(Time::UNZONED)),
            ("datetime", Mono::DateTime(DateTime::UNZONED)),
            ("null", Mono::Null),
        ];

        let mut types = FxHashMap::default();
        for ct in ctypes::SCALARS {
            types.insert(Box::from(ct.name()), Mono::CType(ct));
        }
        for (alias, ct) in ctypes::ALIASES {
            types.insert(Box::from(alias), Mono::CType(ct));
        }
        for (name, ty) in named {
            types.insert(Box::from(name), ty);
        }
        Self { types }
    }

    /// Register `ty` under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NameCollision`] if `name` is taken; the existing
    /// entry is kept.
    pub fn register(&mut self, name: &str, ty: Mono) -> Result<(), RegistryError> {
        if self.types.contains_key(name) {
            tracing::debug!(name, "rejected type registration: name collision");
            return Err(RegistryError::NameCollision(name.to_owned()));
        }
        tracing::debug!(name, ty = %ty, "registered type");
        self.types.insert(name.into(), ty);
        Ok(())
    }

    /// Register a named datashape under its own name.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Anonymous`] if the datashape has no name, otherwise
    /// as [`TypeRegistry::register`].
    pub fn register_named(&mut self, ds: DataShape) -> Result<(), RegistryError> {
        let Some(name) = ds.name().map(str::to_owned) else {
            return Err(RegistryError::Anonymous(ds.to_string()));
        };
        self.register(&name, Mono::DataShape(ds))
    }

    /// The type registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Mono, RegistryError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    pub fn get(&self, name: &str) -> Option<&Mono> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(|name| &**name).collect();
        names.sort_unstable();
        names
    }
}

/// Process-wide registry.
///
/// Writers hold the lock across check-then-insert, so concurrent
/// registrations of one name leave exactly one winner.
static REGISTRY: LazyLock<RwLock<TypeRegistry>> =
    LazyLock::new(|| RwLock::new(TypeRegistry::with_builtins()));

/// Get a reference to the process-wide registry.
pub fn registry() -> &'static RwLock<TypeRegistry> {
    &REGISTRY
}

/// Register `ty` under `name` in the process-wide registry.
pub fn register(name: &str, ty: Mono) -> Result<(), RegistryError> {
    REGISTRY.write().register(name, ty)
}

/// Register a named datashape in the process-wide registry.
pub fn register_named(ds: DataShape) -> Result<(), RegistryError> {
    REGISTRY.write().register_named(ds)
}

/// Look `name` up in the process-wide registry.
pub fn lookup(name: &str) -> Result<Mono, RegistryError> {
    REGISTRY.read().lookup(name)
}

/// Check if `name` is registered in the process-wide registry.
pub fn is_registered(name: &str) -> bool {
    REGISTRY.read().contains(name)
}
