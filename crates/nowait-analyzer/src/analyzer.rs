//! Compilation driver.
//!
//! `BlockingCallAnalyzer` is created once per compilation. It resolves the
//! well-known types up front and is then read-only, so call sites and files
//! may be evaluated from any number of threads at once.

use crate::blocking_call::BlockingCallClassifier;
use crate::call_site::CallSite;
use crate::context::{check_signature_mutability, classify_async_context};
use crate::enclosing::EnclosingExecutable;
use crate::options::AnalyzerOptions;
use crate::selector::{Finding, FindingKind, select_finding};
use crate::type_resolver::ResolvedTypeSet;
use nowait_common::diagnostics::RULE_DESCRIPTORS;
use nowait_common::{Diagnostic, RuleDescriptor};
use nowait_semantic::{Compilation, Operation, SourceFile, SymbolDatabase};
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

// =============================================================================
// Cancellation
// =============================================================================

/// Cooperative cancellation flag shared between the host and worker threads.
/// Checked between call-site evaluations, never inside one.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// =============================================================================
// Statistics and report
// =============================================================================

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    pub files_analyzed: usize,
    /// Generated files left alone.
    pub files_skipped: usize,
    pub call_sites: usize,
    pub in_async_context: usize,
    pub can_make_async: usize,
}

impl AnalysisStats {
    pub fn merge(mut self, other: Self) -> Self {
        self.files_analyzed += other.files_analyzed;
        self.files_skipped += other.files_skipped;
        self.call_sites += other.call_sites;
        self.in_async_context += other.in_async_context;
        self.can_make_async += other.can_make_async;
        self
    }

    fn record(&mut self, kind: FindingKind) {
        match kind {
            FindingKind::InAsyncContext => self.in_async_context += 1,
            FindingKind::CanMakeAsync => self.can_make_async += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub diagnostics: Vec<Diagnostic>,
    pub stats: AnalysisStats,
    /// The pass stopped early; `diagnostics` covers only what was evaluated.
    pub cancelled: bool,
}

impl AnalysisReport {
    fn merge(mut self, other: Self) -> Self {
        self.diagnostics.extend(other.diagnostics);
        self.stats = self.stats.merge(other.stats);
        self.cancelled |= other.cancelled;
        self
    }

    /// Order diagnostics by (file, start, rule id) so that output does not
    /// depend on thread scheduling.
    fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.start.cmp(&b.start))
                .then(a.rule_id.cmp(b.rule_id))
        });
    }
}

// =============================================================================
// BlockingCallAnalyzer
// =============================================================================

pub struct BlockingCallAnalyzer<'a> {
    db: &'a dyn SymbolDatabase,
    options: &'a AnalyzerOptions,
    types: ResolvedTypeSet,
}

impl<'a> BlockingCallAnalyzer<'a> {
    /// Both rules, registered regardless of whether the analyzer is active.
    pub fn supported_rules() -> &'static [RuleDescriptor] {
        &RULE_DESCRIPTORS
    }

    /// Resolve the well-known types for this compilation. `None` means the
    /// compilation has no asynchronous-computation support and nothing in it
    /// can be reported.
    pub fn on_compilation_start(
        db: &'a dyn SymbolDatabase,
        options: &'a AnalyzerOptions,
    ) -> Option<Self> {
        let Some(types) = ResolvedTypeSet::resolve(db, &options.well_known_types) else {
            debug!("well-known types unavailable; blocking-call analysis disabled");
            return None;
        };
        Some(Self { db, options, types })
    }

    pub const fn types(&self) -> &ResolvedTypeSet {
        &self.types
    }

    /// Evaluate one call site. Pure: the same inputs always give the same
    /// finding.
    pub fn evaluate(&self, file: &SourceFile, operation: &Operation) -> Finding {
        let Some(site) = CallSite::from_operation(self.db, operation) else {
            return Finding::NoMatch;
        };
        let classifier = BlockingCallClassifier::new(self.db, &self.types, &self.options.members);
        let Some(call) = classifier.classify(&site) else {
            return Finding::NoMatch;
        };

        let span = site.span();
        let enclosing = EnclosingExecutable::find(self.db, file, span.start);
        let context = classify_async_context(&self.types, enclosing.as_ref());
        let signature = check_signature_mutability(enclosing.as_ref());
        select_finding(Some(call), context, signature, span)
    }

    /// Evaluate every call site of `file` in source order.
    pub fn analyze_file(&self, file: &SourceFile, cancel: &CancellationToken) -> AnalysisReport {
        let mut report = AnalysisReport::default();
        if file.is_generated() && !self.options.analyze_generated_code {
            debug!(file = %file.path, "skipping generated file");
            report.stats.files_skipped = 1;
            return report;
        }
        report.stats.files_analyzed = 1;

        for operation in file.operations() {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            report.stats.call_sites += 1;

            let finding = self.evaluate(file, operation);
            let Some(kind) = finding.kind() else {
                continue;
            };
            report.stats.record(kind);
            if let Some(diagnostic) = finding.to_diagnostic(&file.path, self.options) {
                debug!(
                    file = %file.path,
                    start = diagnostic.start,
                    rule = diagnostic.rule_id,
                    message = %diagnostic.message_text,
                    "blocking call"
                );
                report.diagnostics.push(diagnostic);
            }
        }
        report
    }

    /// Evaluate `files` concurrently. Diagnostics are sorted.
    #[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
    pub fn analyze_files(&self, files: &[SourceFile], cancel: &CancellationToken) -> AnalysisReport {
        let mut report = files
            .par_iter()
            .map(|file| self.analyze_file(file, cancel))
            .reduce(AnalysisReport::default, AnalysisReport::merge);
        report.sort();
        report
    }
}

/// Run the whole analysis over a compilation. An inert compilation produces
/// an empty report.
pub fn analyze_compilation(
    compilation: &Compilation,
    options: &AnalyzerOptions,
    cancel: &CancellationToken,
) -> AnalysisReport {
    match BlockingCallAnalyzer::on_compilation_start(&compilation.store, options) {
        Some(analyzer) => analyzer.analyze_files(&compilation.files, cancel),
        None => AnalysisReport::default(),
    }
}

#[cfg(test)]
#[path = "../tests/analyzer_tests.rs"]
mod tests;
