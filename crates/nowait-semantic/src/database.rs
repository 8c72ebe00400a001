//! The host symbol database contract.

use crate::ids::{MemberId, MethodId, PropertyId, TypeId};
use crate::symbols::{MethodSymbol, PropertySymbol, TypeSymbol};

/// Read-only access to a type-checked compilation's symbols.
///
/// Implementations must be shareable across worker threads: the analyzer
/// evaluates call sites concurrently against one database.
pub trait SymbolDatabase: Sync {
    /// Look up a type by fully-qualified metadata name.
    ///
    /// Returns `None` when the type is not available in this compilation,
    /// or when the name is ambiguous (declared by more than one source).
    fn resolve_type(&self, metadata_name: &str) -> Option<TypeId>;

    fn type_symbol(&self, id: TypeId) -> Option<&TypeSymbol>;

    fn method(&self, id: MethodId) -> Option<&MethodSymbol>;

    fn property(&self, id: PropertyId) -> Option<&PropertySymbol>;

    /// The generic definition of a constructed type, or the type itself.
    fn original_definition(&self, id: TypeId) -> TypeId {
        self.type_symbol(id)
            .and_then(|sym| sym.original_definition)
            .unwrap_or(id)
    }

    /// Directly declared members of `id`, in declaration order.
    ///
    /// A constructed generic type that declares nothing of its own exposes
    /// the members of its definition.
    fn members(&self, id: TypeId) -> &[MemberId] {
        let Some(sym) = self.type_symbol(id) else {
            return &[];
        };
        if sym.members.is_empty()
            && let Some(def) = sym.original_definition
            && def != id
        {
            return self
                .type_symbol(def)
                .map(|d| d.members.as_slice())
                .unwrap_or(&[]);
        }
        &sym.members
    }
}
