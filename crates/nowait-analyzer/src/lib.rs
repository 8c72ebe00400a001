//! Detection of blocking calls on asynchronous computation handles.
//!
//! Each call site goes through a fixed pipeline:
//!
//! 1. **Type resolution** (`type_resolver`): once per compilation, the three
//!    well-known computation types are resolved. If any is missing the
//!    analyzer is inert for the whole compilation.
//! 2. **Classification** (`blocking_call`): is the call one of the blocking
//!    idioms, and what should replace it?
//! 3. **Context** (`context`): is the enclosing executable already async, and
//!    could its signature change?
//! 4. **Selection** (`selector`): combine the answers into at most one
//!    diagnostic.
//!
//! The driver in `analyzer` runs the pipeline over whole compilations on a
//! rayon pool.

pub mod analyzer;
pub mod blocking_call;
pub mod call_site;
pub mod context;
pub mod enclosing;
pub mod options;
pub mod selector;
pub mod type_resolver;

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
pub(crate) mod test_fixtures;

pub use analyzer::{
    AnalysisReport, AnalysisStats, BlockingCallAnalyzer, CancellationToken, analyze_compilation,
};
pub use blocking_call::{BlockingCall, BlockingCallClassifier, BlockingIdiom};
pub use call_site::{CallSite, InvocationSite, PropertyReadSite};
pub use context::{
    AsyncContext, SignatureMutability, check_signature_mutability, classify_async_context,
};
pub use enclosing::EnclosingExecutable;
pub use options::{AnalyzerOptions, BlockingMemberNames, RuleSetting, WellKnownTypeNames};
pub use selector::{Finding, FindingKind, decide, select_finding};
pub use type_resolver::{CanonicalType, ResolvedTypeSet};
