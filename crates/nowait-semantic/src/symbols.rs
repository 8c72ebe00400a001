//! Symbol records for types, methods and properties.

use crate::ids::{MemberId, MethodId, TypeId};
use bitflags::bitflags;
use smallvec::SmallVec;

// =============================================================================
// Accessibility
// =============================================================================

/// Declared accessibility of a type or member.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Accessibility {
    /// Not applicable (lambdas, anonymous methods, local functions).
    NotApplicable,
    #[default]
    Private,
    /// `private protected`: derived types inside the same compilation only.
    PrivateProtected,
    Internal,
    Protected,
    /// `protected internal`: derived types anywhere, or the same compilation.
    ProtectedInternal,
    Public,
}

impl Accessibility {
    /// Whether code outside the declaring compilation can reach a member with
    /// this accessibility (assuming its containing types are reachable).
    #[must_use]
    pub const fn is_reachable_externally(self) -> bool {
        matches!(self, Self::Public | Self::Protected | Self::ProtectedInternal)
    }
}

// =============================================================================
// Types
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Delegate,
    /// A type parameter of a generic type, by position in its declaring
    /// type's parameter list.
    TypeParameter { ordinal: u32 },
}

/// A resolved type: either a definition or a constructed generic instance.
#[derive(Clone, Debug)]
pub struct TypeSymbol {
    /// Simple name without namespace or arity suffix (`Task`).
    pub name: String,
    /// Fully-qualified metadata name (``System.Threading.Tasks.Task`1``).
    pub metadata_name: String,
    pub kind: TypeKind,
    pub accessibility: Accessibility,
    pub containing_type: Option<TypeId>,
    /// For constructed generics: the generic definition this was built from.
    pub original_definition: Option<TypeId>,
    pub type_arguments: SmallVec<[TypeId; 2]>,
    /// Number of type parameters declared by the definition.
    pub arity: u32,
    pub base_type: Option<TypeId>,
    /// Directly implemented (or, for interfaces, inherited) interfaces.
    pub interfaces: SmallVec<[TypeId; 4]>,
    /// Directly declared members, in declaration order.
    pub members: Vec<MemberId>,
}

impl TypeSymbol {
    fn new(kind: TypeKind, metadata_name: impl Into<String>) -> Self {
        let metadata_name = metadata_name.into();
        let (name, arity) = split_metadata_name(&metadata_name);
        Self {
            name,
            metadata_name,
            kind,
            accessibility: Accessibility::Public,
            containing_type: None,
            original_definition: None,
            type_arguments: SmallVec::new(),
            arity,
            base_type: None,
            interfaces: SmallVec::new(),
            members: Vec::new(),
        }
    }

    /// Create a public class definition.
    pub fn class(metadata_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, metadata_name)
    }

    /// Create a public struct definition.
    pub fn structure(metadata_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Struct, metadata_name)
    }

    /// Create a public interface definition.
    pub fn interface(metadata_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, metadata_name)
    }

    /// Create a public delegate definition.
    pub fn delegate(metadata_name: impl Into<String>) -> Self {
        Self::new(TypeKind::Delegate, metadata_name)
    }

    /// Create the type parameter at `ordinal`. Attach it to its declaring
    /// type with `SymbolStoreBuilder::add_type_parameter`.
    pub fn type_parameter(name: impl Into<String>, ordinal: u32) -> Self {
        let mut symbol = Self::new(TypeKind::TypeParameter { ordinal }, name);
        symbol.accessibility = Accessibility::NotApplicable;
        symbol
    }

    pub const fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub const fn with_base_type(mut self, base: TypeId) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_interfaces(mut self, interfaces: impl IntoIterator<Item = TypeId>) -> Self {
        self.interfaces = interfaces.into_iter().collect();
        self
    }

    pub const fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface)
    }

    pub const fn type_parameter_ordinal(&self) -> Option<u32> {
        match self.kind {
            TypeKind::TypeParameter { ordinal } => Some(ordinal),
            _ => None,
        }
    }

    pub const fn is_constructed(&self) -> bool {
        self.original_definition.is_some()
    }
}

/// Split ``Ns.Outer+Task`1`` into (`Task`, 1).
fn split_metadata_name(metadata_name: &str) -> (String, u32) {
    let simple = metadata_name
        .rsplit(['.', '+'])
        .next()
        .unwrap_or(metadata_name);
    match simple.split_once('`') {
        Some((name, arity)) => (name.to_string(), arity.parse().unwrap_or(0)),
        None => (simple.to_string(), 0),
    }
}

// =============================================================================
// Methods
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Ordinary,
    Constructor,
    /// Property or event accessor.
    Accessor,
    LocalFunction,
    Lambda,
    AnonymousMethod,
}

impl MethodKind {
    /// Executables without a declared surface of their own.
    pub const fn is_anonymous(self) -> bool {
        matches!(self, Self::LocalFunction | Self::Lambda | Self::AnonymousMethod)
    }
}

bitflags! {
    /// Modifiers of a method-like executable.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MethodFlags: u8 {
        const STATIC = 1 << 0;
        /// Declared with the `async` modifier.
        const ASYNC = 1 << 1;
        /// Overrides a base member.
        const OVERRIDE = 1 << 2;
    }
}

/// A method-like executable.
#[derive(Clone, Debug)]
pub struct MethodSymbol {
    pub name: String,
    pub kind: MethodKind,
    /// Declaring type; `None` for lambdas and anonymous methods.
    pub containing_type: Option<TypeId>,
    pub accessibility: Accessibility,
    pub flags: MethodFlags,
    /// `None` when the executable produces no value.
    pub return_type: Option<TypeId>,
    pub parameters: SmallVec<[TypeId; 4]>,
    pub explicit_interface_impls: SmallVec<[MethodId; 1]>,
}

impl MethodSymbol {
    fn new(kind: MethodKind, name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            name: name.into(),
            kind,
            containing_type: None,
            accessibility,
            flags: MethodFlags::empty(),
            return_type: None,
            parameters: SmallVec::new(),
            explicit_interface_impls: SmallVec::new(),
        }
    }

    /// Ordinary method; private until told otherwise.
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(MethodKind::Ordinary, name, Accessibility::Private)
    }

    pub fn accessor(name: impl Into<String>) -> Self {
        Self::new(MethodKind::Accessor, name, Accessibility::Private)
    }

    pub fn local_function(name: impl Into<String>) -> Self {
        Self::new(
            MethodKind::LocalFunction,
            name,
            Accessibility::NotApplicable,
        )
    }

    pub fn lambda() -> Self {
        Self::new(MethodKind::Lambda, "<lambda>", Accessibility::NotApplicable)
    }

    pub fn anonymous_method() -> Self {
        Self::new(
            MethodKind::AnonymousMethod,
            "<anonymous>",
            Accessibility::NotApplicable,
        )
    }

    pub const fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub const fn with_return_type(mut self, return_type: TypeId) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = TypeId>) -> Self {
        self.parameters = parameters.into_iter().collect();
        self
    }

    /// Record an explicit interface implementation (`void IFoo.Bar()`).
    pub fn with_explicit_impl(mut self, interface_method: MethodId) -> Self {
        self.explicit_interface_impls.push(interface_method);
        self
    }

    pub const fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::STATIC)
    }

    pub const fn is_async(&self) -> bool {
        self.flags.contains(MethodFlags::ASYNC)
    }

    pub const fn is_override(&self) -> bool {
        self.flags.contains(MethodFlags::OVERRIDE)
    }
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
pub struct PropertySymbol {
    pub name: String,
    pub containing_type: Option<TypeId>,
    pub property_type: Option<TypeId>,
    pub accessibility: Accessibility,
    pub is_static: bool,
}

impl PropertySymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            containing_type: None,
            property_type: None,
            accessibility: Accessibility::Public,
            is_static: false,
        }
    }

    pub const fn with_type(mut self, property_type: TypeId) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub const fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }
}

#[cfg(test)]
#[path = "../tests/symbols_tests.rs"]
mod tests;
