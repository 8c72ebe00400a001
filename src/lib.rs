//! nowait: finds code that blocks on asynchronous computations and suggests
//! the awaiting alternative.
//!
//! The work is split across the workspace crates, re-exported here:
//!
//! - `nowait_common`: spans, diagnostics and the rule catalog
//! - `nowait_semantic`: the symbol database a host hands to the analyzer
//! - `nowait_analyzer`: detection, context classification and the driver
//!
//! This crate adds what a host application needs around them: loading
//! options from disk ([`config`]) and installing a tracing subscriber
//! ([`tracing_config`]).

pub use nowait_analyzer as analyzer;
pub use nowait_common as common;
pub use nowait_semantic as semantic;

pub use nowait_analyzer::{
    AnalysisReport, AnalysisStats, AnalyzerOptions, BlockingCallAnalyzer, CancellationToken,
    analyze_compilation,
};
pub use nowait_common::{Diagnostic, DiagnosticCategory, RuleDescriptor, Span};
pub use nowait_semantic::{Compilation, SourceFile, SymbolDatabase, SymbolStore};

pub mod config;
pub mod tracing_config;
