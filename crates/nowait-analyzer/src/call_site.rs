//! Call sites: the two operation shapes the analyzer inspects.
//!
//! A host `Operation` is resolved against the symbol database once, into a
//! `CallSite` carrying everything the classifiers need. Type identities are
//! canonicalized here so that no classifier compares raw `TypeId`s.

use crate::type_resolver::CanonicalType;
use nowait_common::Span;
use nowait_semantic::{MethodId, Operation, PropertyId, SymbolDatabase, TypeId};

/// A method invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationSite<'db> {
    pub target: MethodId,
    pub name: &'db str,
    /// Containing type as bound at the call site (may be a constructed generic).
    pub containing_type: TypeId,
    pub containing_definition: CanonicalType,
    pub is_static: bool,
    pub return_type: Option<CanonicalType>,
    pub span: Span,
}

/// A property read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyReadSite<'db> {
    pub property: PropertyId,
    pub name: &'db str,
    pub containing_type: TypeId,
    pub containing_definition: CanonicalType,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallSite<'db> {
    Invocation(InvocationSite<'db>),
    PropertyRead(PropertyReadSite<'db>),
}

impl<'db> CallSite<'db> {
    /// Resolve a host operation. `None` when its symbols are unknown to the
    /// database or it has no containing type to classify against.
    pub fn from_operation(db: &'db dyn SymbolDatabase, operation: &Operation) -> Option<Self> {
        match *operation {
            Operation::Invocation {
                target,
                containing_type,
                span,
            } => {
                let method = db.method(target)?;
                let containing_type = containing_type.or(method.containing_type)?;
                Some(Self::Invocation(InvocationSite {
                    target,
                    name: &method.name,
                    containing_type,
                    containing_definition: CanonicalType::of(db, containing_type),
                    is_static: method.is_static(),
                    return_type: method.return_type.map(|ty| CanonicalType::of(db, ty)),
                    span,
                }))
            }
            Operation::PropertyReference {
                property,
                containing_type,
                span,
            } => {
                let sym = db.property(property)?;
                let containing_type = containing_type.or(sym.containing_type)?;
                Some(Self::PropertyRead(PropertyReadSite {
                    property,
                    name: &sym.name,
                    containing_type,
                    containing_definition: CanonicalType::of(db, containing_type),
                    span,
                }))
            }
        }
    }

    pub const fn span(&self) -> Span {
        match self {
            Self::Invocation(site) => site.span,
            Self::PropertyRead(site) => site.span,
        }
    }

    pub const fn name(&self) -> &'db str {
        match self {
            Self::Invocation(site) => site.name,
            Self::PropertyRead(site) => site.name,
        }
    }
}
