//! Type traversal.
//!
//! `MonoVisitor` walks a type tree depth-first in parameter order. The
//! default `visit` dispatches to variant-specific methods; override the ones
//! you care about. Unit variants are leaves: the value type of `Units` is a
//! literal parameter and is not descended into.
//!
//! # Example
//!
//! ```text
//! struct CountVars(usize);
//!
//! impl MonoVisitor for CountVars {
//!     fn visit_type_var(&mut self, _var: &TypeVar) {
//!         self.0 += 1;
//!     }
//! }
//! ```

use crate::{Ellipsis, Implements, Mono, Record, TypeVar};

/// Trait for inspecting types via structural recursion.
pub trait MonoVisitor {
    /// Visit a type by dispatching to variant-specific methods.
    fn visit(&mut self, ty: &Mono) {
        match ty {
            Mono::TypeVar(var) => self.visit_type_var(var),
            Mono::Var => self.visit_var(),
            Mono::Ellipsis(ellipsis) => self.visit_ellipsis(ellipsis),
            Mono::DataShape(ds) => self.visit_datashape(ds.parameters()),
            Mono::Record(record) => self.visit_record(record),
            Mono::Tuple(tuple) => self.visit_tuple(tuple.dshapes()),
            Mono::Function(func) => self.visit_function(func.argtypes(), func.restype()),
            Mono::Option(option) => self.visit_option(option.ty()),
            Mono::Implements(implements) => self.visit_implements(implements),
            Mono::Null
            | Mono::Date
            | Mono::Time(_)
            | Mono::DateTime(_)
            | Mono::Units(_)
            | Mono::Bytes
            | Mono::String(_)
            | Mono::CType(_)
            | Mono::Json
            | Mono::IntegerConstant(_)
            | Mono::StringConstant(_)
            | Mono::Fixed(_) => {}
        }
    }

    /// Visit a type variable. Override to handle variables.
    fn visit_type_var(&mut self, _var: &TypeVar) {}

    /// Visit a `var` dimension.
    fn visit_var(&mut self) {}

    /// Visit an ellipsis. Default visits its bound type variable, if any.
    fn visit_ellipsis(&mut self, ellipsis: &Ellipsis) {
        if let Some(var) = ellipsis.typevar() {
            self.visit_type_var(var);
        }
    }

    /// Visit a datashape. Default visits dimensions, then the measure.
    fn visit_datashape(&mut self, params: &[Mono]) {
        for p in params {
            self.visit(p);
        }
    }

    /// Visit a record. Default visits field types in declaration order.
    fn visit_record(&mut self, record: &Record) {
        for ty in record.types() {
            self.visit(ty);
        }
    }

    /// Visit a tuple. Default visits members.
    fn visit_tuple(&mut self, dshapes: &[Mono]) {
        for t in dshapes {
            self.visit(t);
        }
    }

    /// Visit a function signature. Default visits arguments, then the result.
    fn visit_function(&mut self, args: &[Mono], ret: &Mono) {
        for a in args {
            self.visit(a);
        }
        self.visit(ret);
    }

    /// Visit an option. Default visits the wrapped measure.
    fn visit_option(&mut self, inner: &Mono) {
        self.visit(inner);
    }

    /// Visit a constraint. Default visits the constrained variable.
    fn visit_implements(&mut self, implements: &Implements) {
        self.visit_type_var(implements.typevar());
    }
}
