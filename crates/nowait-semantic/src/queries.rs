//! Derived symbol queries: interface closure, interface implementation and
//! external visibility.
//!
//! All walks over the type graph are bounded by the limits in
//! `nowait_common::limits` so that a cyclic graph produced by a confused host
//! degrades to a partial answer instead of a hang.

use crate::database::SymbolDatabase;
use crate::ids::{MethodId, TypeId};
use crate::symbols::{Accessibility, MethodSymbol};
use nowait_common::limits::{MAX_CONTAINING_TYPE_DEPTH, MAX_TYPE_HIERARCHY_DEPTH};
use rustc_hash::FxHashSet;
use tracing::trace;

// =============================================================================
// Interface Closure
// =============================================================================

/// Every interface `ty` implements: directly, through its base types, or
/// through interface inheritance. De-duplicated, in first-seen order.
pub fn all_interfaces(db: &dyn SymbolDatabase, ty: TypeId) -> Vec<TypeId> {
    let mut result = Vec::new();
    let mut seen = FxHashSet::default();

    let mut current = Some(ty);
    let mut depth = 0;
    while let Some(id) = current {
        depth += 1;
        if depth > MAX_TYPE_HIERARCHY_DEPTH {
            trace!(%ty, "all_interfaces - base type chain too deep");
            break;
        }
        let Some(sym) = db.type_symbol(id) else {
            break;
        };
        for &iface in &sym.interfaces {
            collect_interface(db, iface, &mut seen, &mut result, 0);
        }
        current = sym.base_type;
    }

    result
}

fn collect_interface(
    db: &dyn SymbolDatabase,
    iface: TypeId,
    seen: &mut FxHashSet<TypeId>,
    result: &mut Vec<TypeId>,
    depth: u32,
) {
    if depth > MAX_TYPE_HIERARCHY_DEPTH || !seen.insert(iface) {
        return;
    }
    let Some(sym) = db.type_symbol(iface) else {
        return;
    };
    if !sym.is_interface() {
        trace!(%iface, "collect_interface - not an interface");
        return;
    }
    result.push(iface);
    for &inherited in &sym.interfaces {
        collect_interface(db, inherited, seen, result, depth + 1);
    }
}

// =============================================================================
// Interface Implementation
// =============================================================================

/// Whether `method` satisfies an interface contract.
///
/// True for explicit implementations, and for public instance methods whose
/// name and parameter types match a method declared by any interface in the
/// containing type's interface closure. Parameter types must be identical
/// once the interface's type arguments replace its type parameters.
pub fn is_interface_implementation(db: &dyn SymbolDatabase, method: MethodId) -> bool {
    let Some(sym) = db.method(method) else {
        return false;
    };
    if !sym.explicit_interface_impls.is_empty() {
        return true;
    }
    if sym.is_static() || sym.accessibility != Accessibility::Public {
        return false;
    }
    let Some(owner) = sym.containing_type else {
        return false;
    };

    all_interfaces(db, owner).into_iter().any(|iface| {
        let substitution = Substitution::of(db, iface);
        db.members(iface)
            .iter()
            .filter_map(|member| member.as_method())
            .filter_map(|id| db.method(id))
            .any(|candidate| implicitly_implements(db, &substitution, sym, candidate))
    })
}

/// Type arguments of a constructed interface, keyed by the ordinals of its
/// definition's type parameters.
struct Substitution<'a> {
    definition: TypeId,
    arguments: &'a [TypeId],
}

impl<'a> Substitution<'a> {
    fn of(db: &'a dyn SymbolDatabase, iface: TypeId) -> Self {
        let definition = db.original_definition(iface);
        let arguments: &'a [TypeId] = match (db.type_symbol(iface), db.type_symbol(definition)) {
            (Some(sym), Some(def))
                if definition != iface && sym.type_arguments.len() == def.arity as usize =>
            {
                sym.type_arguments.as_slice()
            }
            _ => &[],
        };
        Self {
            definition,
            arguments,
        }
    }
}

fn implicitly_implements(
    db: &dyn SymbolDatabase,
    substitution: &Substitution<'_>,
    method: &MethodSymbol,
    interface_method: &MethodSymbol,
) -> bool {
    !interface_method.is_static()
        && interface_method.name == method.name
        && interface_method.parameters.len() == method.parameters.len()
        && interface_method
            .parameters
            .iter()
            .zip(&method.parameters)
            .all(|(&declared, &actual)| {
                parameter_matches(db, substitution, declared, actual, 0)
            })
}

/// Whether `declared`, a parameter type of an interface method, is `actual`
/// after substitution. Constructed types match when they share a definition
/// and their type arguments match pairwise.
fn parameter_matches(
    db: &dyn SymbolDatabase,
    substitution: &Substitution<'_>,
    declared: TypeId,
    actual: TypeId,
    depth: u32,
) -> bool {
    if depth > MAX_TYPE_HIERARCHY_DEPTH {
        trace!(%declared, "parameter_matches - type arguments nested too deep");
        return false;
    }
    let Some(declared_sym) = db.type_symbol(declared) else {
        return declared == actual;
    };

    if let Some(ordinal) = declared_sym.type_parameter_ordinal()
        && declared_sym.containing_type == Some(substitution.definition)
        && let Some(&argument) = substitution.arguments.get(ordinal as usize)
    {
        return argument == actual;
    }
    if declared == actual {
        return true;
    }

    // `List<T>` against `List<int>`.
    let Some(definition) = declared_sym.original_definition else {
        return false;
    };
    let Some(actual_sym) = db.type_symbol(actual) else {
        return false;
    };
    actual_sym.original_definition == Some(definition)
        && declared_sym.type_arguments.len() == actual_sym.type_arguments.len()
        && declared_sym
            .type_arguments
            .iter()
            .zip(&actual_sym.type_arguments)
            .all(|(&d, &a)| parameter_matches(db, substitution, d, a, depth + 1))
}

// =============================================================================
// External Visibility
// =============================================================================

/// Whether a type is reachable from outside its compilation: it and every
/// type containing it are public, protected or protected internal.
pub fn type_is_visible_outside_of_assembly(db: &dyn SymbolDatabase, ty: TypeId) -> bool {
    let mut current = ty;
    for _ in 0..MAX_CONTAINING_TYPE_DEPTH {
        let def = db.original_definition(current);
        let Some(sym) = db.type_symbol(def) else {
            return false;
        };
        if !sym.accessibility.is_reachable_externally() {
            return false;
        }
        match sym.containing_type {
            Some(outer) => current = outer,
            None => return true,
        }
    }
    trace!(%ty, "type_is_visible_outside_of_assembly - containing chain too deep");
    false
}

/// Whether an executable is part of the compilation's externally reachable
/// surface. Lambdas, anonymous methods and local functions never are.
pub fn method_is_visible_outside_of_assembly(db: &dyn SymbolDatabase, method: MethodId) -> bool {
    let Some(sym) = db.method(method) else {
        return false;
    };
    if sym.kind.is_anonymous() || !sym.accessibility.is_reachable_externally() {
        return false;
    }
    match sym.containing_type {
        Some(owner) => type_is_visible_outside_of_assembly(db, owner),
        None => true,
    }
}

#[cfg(test)]
#[path = "../tests/queries_tests.rs"]
mod tests;
