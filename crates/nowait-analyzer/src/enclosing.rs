//! The executable lexically enclosing a call site.

use crate::type_resolver::CanonicalType;
use nowait_semantic::{
    MethodId, MethodKind, SourceFile, SymbolDatabase, is_interface_implementation,
    method_is_visible_outside_of_assembly,
};

/// Everything the context classifiers need to know about the smallest
/// executable (method, local function, lambda, anonymous method) containing
/// a call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnclosingExecutable {
    pub id: MethodId,
    pub kind: MethodKind,
    pub is_async: bool,
    pub return_type: Option<CanonicalType>,
    pub is_override: bool,
    pub is_interface_implementation: bool,
    pub is_externally_visible: bool,
}

impl EnclosingExecutable {
    /// Snapshot the executable `id` from the database.
    pub fn from_symbol(db: &dyn SymbolDatabase, id: MethodId) -> Option<Self> {
        let sym = db.method(id)?;
        Some(Self {
            id,
            kind: sym.kind,
            is_async: sym.is_async(),
            return_type: sym.return_type.map(|ty| CanonicalType::of(db, ty)),
            is_override: sym.is_override(),
            is_interface_implementation: is_interface_implementation(db, id),
            is_externally_visible: method_is_visible_outside_of_assembly(db, id),
        })
    }

    /// The executable enclosing `offset` in `file`, if any.
    pub fn find(db: &dyn SymbolDatabase, file: &SourceFile, offset: u32) -> Option<Self> {
        let id = file.enclosing_executable(offset)?;
        Self::from_symbol(db, id)
    }
}
