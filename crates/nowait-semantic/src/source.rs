//! Source files as seen by the analyzer: host operations plus the lexical
//! executable scopes that contain them.

use crate::generated_code::is_generated_file;
use crate::ids::{MethodId, PropertyId, TypeId};
use crate::store::SymbolStore;
use nowait_common::Span;

// =============================================================================
// Operations
// =============================================================================

/// A bound operation the host reports for a source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// A method invocation.
    Invocation {
        target: MethodId,
        /// Containing type of the target as bound at the call site. `None`
        /// means "the target's declaring type".
        containing_type: Option<TypeId>,
        span: Span,
    },
    /// A read of a property.
    PropertyReference {
        property: PropertyId,
        containing_type: Option<TypeId>,
        span: Span,
    },
}

impl Operation {
    pub const fn invocation(target: MethodId, span: Span) -> Self {
        Self::Invocation {
            target,
            containing_type: None,
            span,
        }
    }

    pub const fn property_reference(property: PropertyId, span: Span) -> Self {
        Self::PropertyReference {
            property,
            containing_type: None,
            span,
        }
    }

    /// Bind the operation to a constructed containing type (`Task<int>`).
    pub const fn on(self, containing: TypeId) -> Self {
        match self {
            Self::Invocation { target, span, .. } => Self::Invocation {
                target,
                containing_type: Some(containing),
                span,
            },
            Self::PropertyReference { property, span, .. } => Self::PropertyReference {
                property,
                containing_type: Some(containing),
                span,
            },
        }
    }

    pub const fn span(&self) -> Span {
        match self {
            Self::Invocation { span, .. } | Self::PropertyReference { span, .. } => *span,
        }
    }
}

// =============================================================================
// Executable Scopes
// =============================================================================

/// The source extent of one executable (method body, lambda, local function).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExecutableScope {
    pub span: Span,
    pub executable: MethodId,
}

// =============================================================================
// SourceFile
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct SourceFile {
    pub path: String,
    /// Leading text of the file (used for `<auto-generated>` markers).
    pub header: Option<String>,
    /// Explicitly marked as generated by the host.
    pub generated: bool,
    operations: Vec<Operation>,
    scopes: Vec<ExecutableScope>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub const fn mark_generated(mut self) -> Self {
        self.generated = true;
        self
    }

    pub fn push_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Record the extent of an executable. Nested executables should be
    /// registered after the executables that contain them.
    pub fn push_scope(&mut self, span: Span, executable: MethodId) {
        self.scopes.push(ExecutableScope { span, executable });
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn scopes(&self) -> &[ExecutableScope] {
        &self.scopes
    }

    /// Whether this file holds generated code.
    pub fn is_generated(&self) -> bool {
        self.generated || is_generated_file(&self.path, self.header.as_deref())
    }

    /// Find the innermost executable lexically containing `offset`.
    ///
    /// The innermost scope is the smallest one containing the offset; among
    /// equally sized scopes the one registered last wins.
    pub fn enclosing_executable(&self, offset: u32) -> Option<MethodId> {
        let mut best: Option<&ExecutableScope> = None;
        for scope in &self.scopes {
            if !scope.span.contains(offset) {
                continue;
            }
            match best {
                Some(current) if scope.span.len() > current.span.len() => {}
                _ => best = Some(scope),
            }
        }
        best.map(|scope| scope.executable)
    }
}

// =============================================================================
// Compilation
// =============================================================================

/// A symbol store plus the source files compiled against it.
#[derive(Debug, Default)]
pub struct Compilation {
    pub store: SymbolStore,
    pub files: Vec<SourceFile>,
}

impl Compilation {
    pub fn new(store: SymbolStore, files: Vec<SourceFile>) -> Self {
        Self { store, files }
    }
}

#[cfg(test)]
#[path = "../tests/source_tests.rs"]
mod tests;
