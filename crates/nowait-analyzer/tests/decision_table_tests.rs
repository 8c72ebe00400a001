//! Exhaustive checks of the final decision table through the public API.

use nowait_analyzer::{
    AnalyzerOptions, AsyncContext, BlockingCall, BlockingIdiom, Finding, FindingKind, RuleSetting,
    SignatureMutability, decide, select_finding,
};
use nowait_common::diagnostics::rule_ids;
use nowait_common::{DiagnosticCategory, Span};

fn wait_call() -> BlockingCall {
    BlockingCall {
        idiom: BlockingIdiom::BlockingWait,
        suggestion: "Use await instead of 'Wait()'".to_string(),
    }
}

const SPAN: Span = Span { start: 12, end: 30 };

#[test]
fn test_decision_table() {
    use AsyncContext::*;
    use SignatureMutability::*;

    assert_eq!(decide(Async, Mutable), Some(FindingKind::InAsyncContext));
    assert_eq!(decide(Async, Fixed), Some(FindingKind::InAsyncContext));
    assert_eq!(decide(NotAsync, Mutable), Some(FindingKind::CanMakeAsync));
    assert_eq!(decide(NotAsync, Fixed), None);
}

#[test]
fn test_no_blocking_call_is_never_reported() {
    for context in [AsyncContext::Async, AsyncContext::NotAsync] {
        for signature in [SignatureMutability::Mutable, SignatureMutability::Fixed] {
            assert_eq!(
                select_finding(None, context, signature, SPAN),
                Finding::NoMatch
            );
        }
    }
}

#[test]
fn test_async_context_keeps_suggestion() {
    let finding = select_finding(
        Some(wait_call()),
        AsyncContext::Async,
        SignatureMutability::Fixed,
        SPAN,
    );
    assert_eq!(finding.message(), Some("Use await instead of 'Wait()'"));
    assert_eq!(finding.span(), Some(SPAN));
}

#[test]
fn test_mutable_signature_appends_conversion_hint() {
    let finding = select_finding(
        Some(wait_call()),
        AsyncContext::NotAsync,
        SignatureMutability::Mutable,
        SPAN,
    );
    assert_eq!(
        finding.message(),
        Some("Use await instead of 'Wait()' and make method async")
    );
}

#[test]
fn test_fixed_signature_is_silent() {
    let finding = select_finding(
        Some(wait_call()),
        AsyncContext::NotAsync,
        SignatureMutability::Fixed,
        SPAN,
    );
    assert_eq!(finding, Finding::NoMatch);
    assert_eq!(
        finding.to_diagnostic("File.cs", &AnalyzerOptions::default()),
        None
    );
}

#[test]
fn test_diagnostic_carries_rule_and_location() {
    let finding = select_finding(
        Some(wait_call()),
        AsyncContext::Async,
        SignatureMutability::Mutable,
        SPAN,
    );
    let diagnostic = finding
        .to_diagnostic("File.cs", &AnalyzerOptions::default())
        .expect("diagnostic");
    assert_eq!(diagnostic.rule_id, rule_ids::BLOCKING_CALL_IN_ASYNC_CONTEXT);
    assert_eq!(diagnostic.file, "File.cs");
    assert_eq!(diagnostic.start, 12);
    assert_eq!(diagnostic.length, 18);
    assert_eq!(diagnostic.category, DiagnosticCategory::Info);
}

#[test]
fn test_reversed_span_fields_yield_empty_location() {
    let finding = select_finding(
        Some(wait_call()),
        AsyncContext::Async,
        SignatureMutability::Fixed,
        Span { start: 10, end: 5 },
    );
    let diagnostic = finding
        .to_diagnostic("File.cs", &AnalyzerOptions::default())
        .expect("diagnostic");
    assert_eq!(diagnostic.start, 10);
    assert_eq!(diagnostic.length, 0);
}

#[test]
fn test_disabling_one_rule_leaves_the_other() {
    let options = AnalyzerOptions::default().with_rule(
        rule_ids::BLOCKING_CALL_IN_ASYNC_CONTEXT,
        RuleSetting {
            enabled: Some(false),
            severity: None,
        },
    );

    let in_async = select_finding(
        Some(wait_call()),
        AsyncContext::Async,
        SignatureMutability::Mutable,
        SPAN,
    );
    assert_eq!(in_async.to_diagnostic("File.cs", &options), None);

    let convertible = select_finding(
        Some(wait_call()),
        AsyncContext::NotAsync,
        SignatureMutability::Mutable,
        SPAN,
    );
    let diagnostic = convertible
        .to_diagnostic("File.cs", &options)
        .expect("other rule still enabled");
    assert_eq!(
        diagnostic.rule_id,
        rule_ids::BLOCKING_CALL_CONVERTIBLE_TO_ASYNC
    );
}
