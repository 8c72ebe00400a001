//! Semantic model consumed by the blocking-call analyzer.
//!
//! The analyzer never parses or type-checks source itself. It works against a
//! host that has already done so, through the `SymbolDatabase` trait:
//!
//! - **Symbols**: types, methods and properties with resolved identity
//! - **Sources**: per-file host operations (invocations, property reads) and
//!   executable scopes used to find the executable enclosing a call site
//! - **Queries**: interface-implementation and external-visibility checks
//!   derived from the symbol graph
//!
//! `SymbolStore` is an in-memory database for hosts (and tests) that hand the
//! analyzer a fully materialized model. It is immutable once built and can be
//! shared by reference across worker threads.

pub mod database;
pub mod generated_code;
pub mod ids;
pub mod queries;
pub mod source;
pub mod store;
pub mod symbols;

pub use database::SymbolDatabase;
pub use generated_code::is_generated_file;
pub use ids::{MemberId, MethodId, PropertyId, TypeId};
pub use queries::{
    all_interfaces, is_interface_implementation, method_is_visible_outside_of_assembly,
    type_is_visible_outside_of_assembly,
};
pub use source::{Compilation, ExecutableScope, Operation, SourceFile};
pub use store::{SymbolStore, SymbolStoreBuilder};
pub use symbols::{
    Accessibility, MethodFlags, MethodKind, MethodSymbol, PropertySymbol, TypeKind, TypeSymbol,
};
