//! Resolution of the well-known asynchronous-computation types.
//!
//! Resolution happens once per compilation. A compilation that does not
//! reference all three types has no asynchronous-computation support to
//! misuse, so the analyzer stays inert for it: that is a normal outcome, not
//! an error.

use crate::options::WellKnownTypeNames;
use nowait_semantic::{SymbolDatabase, TypeId};
use tracing::debug;

// =============================================================================
// Canonical type identity
// =============================================================================

/// A type identity with generic instantiation erased.
///
/// `Task<int>` and `Task<string>` share one canonical identity (the generic
/// definition `Task<T>`); non-generic types are their own canonical identity.
/// Every type comparison in the analyzer goes through this normalization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalType(TypeId);

impl CanonicalType {
    pub fn of(db: &dyn SymbolDatabase, ty: TypeId) -> Self {
        Self(db.original_definition(ty))
    }

    pub const fn id(self) -> TypeId {
        self.0
    }
}

// =============================================================================
// ResolvedTypeSet
// =============================================================================

/// The three resolved well-known types. Immutable once built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTypeSet {
    pub async_result: CanonicalType,
    pub async_result_of_t: CanonicalType,
    pub async_result_awaiter: CanonicalType,
}

impl ResolvedTypeSet {
    /// Resolve all three types, or `None` if any one is unavailable.
    pub fn resolve(db: &dyn SymbolDatabase, names: &WellKnownTypeNames) -> Option<Self> {
        let lookup = |name: &str| {
            let resolved = db.resolve_type(name).map(|id| CanonicalType::of(db, id));
            if resolved.is_none() {
                debug!(name, "well-known type not available in this compilation");
            }
            resolved
        };

        Some(Self {
            async_result: lookup(&names.async_result)?,
            async_result_of_t: lookup(&names.async_result_of_t)?,
            async_result_awaiter: lookup(&names.async_result_awaiter)?,
        })
    }

    /// Whether `ty` is either computation handle (generic or not).
    pub fn is_async_handle(&self, ty: CanonicalType) -> bool {
        ty == self.async_result || ty == self.async_result_of_t
    }

    /// Like `is_async_handle`, for an optional type (absent = no value).
    pub fn is_async_handle_opt(&self, ty: Option<CanonicalType>) -> bool {
        ty.is_some_and(|ty| self.is_async_handle(ty))
    }
}

#[cfg(test)]
#[path = "../tests/type_resolver_tests.rs"]
mod tests;
