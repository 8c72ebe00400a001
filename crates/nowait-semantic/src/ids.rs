//! Opaque symbol identities handed out by a `SymbolDatabase`.
//!
//! Identities are plain indices: equality is identity, and copying them is
//! free. A host that does not use `SymbolStore` may assign them however it
//! likes as long as they are stable for the lifetime of one compilation.

use std::fmt;

/// Identity of a resolved type (definition or constructed generic).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Identity of a method-like executable (method, accessor, local function, lambda).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(pub u32);

/// Identity of a property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub u32);

/// A directly declared member of a type, in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberId {
    Method(MethodId),
    Property(PropertyId),
}

impl MemberId {
    /// The method identity, if this member is a method.
    #[must_use]
    pub const fn as_method(self) -> Option<MethodId> {
        match self {
            Self::Method(id) => Some(id),
            Self::Property(_) => None,
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "method#{}", self.0)
    }
}
