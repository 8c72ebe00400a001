//! Common types and utilities for the nowait blocking-call analyzer.
//!
//! This crate provides foundational types used across all nowait crates:
//! - Source spans (`Span`)
//! - Diagnostic records, categories and the rule catalog
//! - Centralized limits for type-graph walks

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostic records and rule descriptors
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, RuleDescriptor, format_message};

// Centralized limits
pub mod limits;
