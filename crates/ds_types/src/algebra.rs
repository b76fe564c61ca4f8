//! Queries a unifier asks of a type before solving.

use crate::{Mono, MonoVisitor, Tag, TypeVar};

/// Free type variables in depth-first parameter order, duplicates kept.
///
/// Variables bound by an ellipsis (`A...`) or constrained by `A : set` are
/// free as well; the unifier decides what they stand for.
pub fn free_variables(ty: &Mono) -> Vec<TypeVar> {
    #[derive(Default)]
    struct Collect(Vec<TypeVar>);

    impl MonoVisitor for Collect {
        fn visit_type_var(&mut self, var: &TypeVar) {
            self.0.push(var.clone());
        }
    }

    let mut collect = Collect::default();
    collect.visit(ty);
    collect.0
}

/// Type constructor identity. Nodes with different constructors never
/// unify.
#[inline]
pub fn type_constructor(ty: &Mono) -> Tag {
    ty.tag()
}

#[cfg(test)]
mod tests;
