//! In-memory symbol database.
//!
//! `SymbolStoreBuilder` collects types and members while a host (or a test)
//! materializes a compilation; `build()` freezes it into a `SymbolStore`
//! that is never mutated again.
//!
//! ## Metadata-name lookup
//!
//! | Registrations of a name | `resolve_type` |
//! |-------------------------|----------------|
//! | none                    | `None`         |
//! | exactly one             | `Some(id)`     |
//! | more than one           | `None` (ambiguous) |
//!
//! Constructed generic instances are never indexed by name; they are
//! interned by (definition, type arguments) so that constructing the same
//! instance twice yields the same `TypeId`.

use crate::database::SymbolDatabase;
use crate::ids::{MemberId, MethodId, PropertyId, TypeId};
use crate::symbols::{MethodSymbol, PropertySymbol, TypeSymbol};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

type ConstructionKey = (TypeId, SmallVec<[TypeId; 2]>);

// =============================================================================
// SymbolStore
// =============================================================================

/// Immutable, thread-safe symbol storage.
#[derive(Debug, Default)]
pub struct SymbolStore {
    types: Vec<TypeSymbol>,
    methods: Vec<MethodSymbol>,
    properties: Vec<PropertySymbol>,
    /// `None` marks an ambiguous name.
    by_metadata_name: FxHashMap<String, Option<TypeId>>,
}

impl SymbolStore {
    pub fn builder() -> SymbolStoreBuilder {
        SymbolStoreBuilder::default()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

impl SymbolDatabase for SymbolStore {
    fn resolve_type(&self, metadata_name: &str) -> Option<TypeId> {
        self.by_metadata_name.get(metadata_name).copied().flatten()
    }

    fn type_symbol(&self, id: TypeId) -> Option<&TypeSymbol> {
        self.types.get(id.0 as usize)
    }

    fn method(&self, id: MethodId) -> Option<&MethodSymbol> {
        self.methods.get(id.0 as usize)
    }

    fn property(&self, id: PropertyId) -> Option<&PropertySymbol> {
        self.properties.get(id.0 as usize)
    }
}

// =============================================================================
// SymbolStoreBuilder
// =============================================================================

#[derive(Debug, Default)]
pub struct SymbolStoreBuilder {
    types: Vec<TypeSymbol>,
    methods: Vec<MethodSymbol>,
    properties: Vec<PropertySymbol>,
    by_metadata_name: FxHashMap<String, Option<TypeId>>,
    constructions: FxHashMap<ConstructionKey, TypeId>,
}

impl SymbolStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type definition and index it by metadata name.
    pub fn add_type(&mut self, symbol: TypeSymbol) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        let name = symbol.metadata_name.clone();
        self.types.push(symbol);

        self.by_metadata_name
            .entry(name)
            .and_modify(|existing| {
                trace!(%id, "SymbolStoreBuilder::add_type - ambiguous metadata name");
                *existing = None;
            })
            .or_insert(Some(id));
        id
    }

    /// Register a type nested inside `outer`.
    pub fn add_nested_type(&mut self, outer: TypeId, mut symbol: TypeSymbol) -> TypeId {
        symbol.containing_type = Some(outer);
        self.add_type(symbol)
    }

    /// Intern the constructed instance `definition<arguments...>`.
    pub fn construct(
        &mut self,
        definition: TypeId,
        arguments: impl IntoIterator<Item = TypeId>,
    ) -> TypeId {
        let arguments: SmallVec<[TypeId; 2]> = arguments.into_iter().collect();
        let key = (definition, arguments.clone());
        if let Some(&existing) = self.constructions.get(&key) {
            return existing;
        }

        let Some(def) = self.types.get(definition.0 as usize) else {
            // Constructing from an unknown definition still yields a distinct identity.
            trace!(%definition, "SymbolStoreBuilder::construct - unknown definition");
            let id = self.push_type(TypeSymbol::class(format!("<unknown>{}", definition.0)));
            self.constructions.insert(key, id);
            return id;
        };

        let mut instance = def.clone();
        instance.original_definition = Some(definition);
        instance.type_arguments = arguments;
        instance.members = Vec::new();

        let id = self.push_type(instance);
        self.constructions.insert(key, id);
        id
    }

    /// Declare a type parameter of the generic definition `owner`. Type
    /// parameters are not indexed by name.
    pub fn add_type_parameter(
        &mut self,
        owner: TypeId,
        name: impl Into<String>,
        ordinal: u32,
    ) -> TypeId {
        let mut symbol = TypeSymbol::type_parameter(name, ordinal);
        symbol.containing_type = Some(owner);
        self.push_type(symbol)
    }

    fn push_type(&mut self, symbol: TypeSymbol) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(symbol);
        id
    }

    /// Declare a method on `owner`, appended to its member list.
    pub fn add_method(&mut self, owner: TypeId, mut method: MethodSymbol) -> MethodId {
        method.containing_type = Some(owner);
        let id = MethodId(self.methods.len() as u32);
        self.methods.push(method);
        if let Some(owner_sym) = self.types.get_mut(owner.0 as usize) {
            owner_sym.members.push(MemberId::Method(id));
        }
        id
    }

    /// Declare a property on `owner`, appended to its member list.
    pub fn add_property(&mut self, owner: TypeId, mut property: PropertySymbol) -> PropertyId {
        property.containing_type = Some(owner);
        let id = PropertyId(self.properties.len() as u32);
        self.properties.push(property);
        if let Some(owner_sym) = self.types.get_mut(owner.0 as usize) {
            owner_sym.members.push(MemberId::Property(id));
        }
        id
    }

    /// Register an executable that is not a member of any type: a lambda, an
    /// anonymous method or a local function.
    pub fn add_executable(&mut self, executable: MethodSymbol) -> MethodId {
        let id = MethodId(self.methods.len() as u32);
        self.methods.push(executable);
        id
    }

    pub fn set_base_type(&mut self, id: TypeId, base: TypeId) {
        if let Some(sym) = self.types.get_mut(id.0 as usize) {
            sym.base_type = Some(base);
        }
    }

    pub fn add_interface(&mut self, id: TypeId, interface: TypeId) {
        if let Some(sym) = self.types.get_mut(id.0 as usize) {
            sym.interfaces.push(interface);
        }
    }

    pub fn type_symbol(&self, id: TypeId) -> Option<&TypeSymbol> {
        self.types.get(id.0 as usize)
    }

    pub fn method(&self, id: MethodId) -> Option<&MethodSymbol> {
        self.methods.get(id.0 as usize)
    }

    /// Freeze the builder into an immutable store.
    pub fn build(self) -> SymbolStore {
        trace!(
            types = self.types.len(),
            methods = self.methods.len(),
            properties = self.properties.len(),
            "SymbolStoreBuilder::build"
        );
        SymbolStore {
            types: self.types,
            methods: self.methods,
            properties: self.properties,
            by_metadata_name: self.by_metadata_name,
        }
    }
}

#[cfg(test)]
#[path = "../tests/store_tests.rs"]
mod tests;
