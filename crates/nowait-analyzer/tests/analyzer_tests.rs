use super::*;
use crate::options::RuleSetting;
use crate::test_fixtures::{async_method, file_in, framework, private_method};
use nowait_common::diagnostics::rule_ids;
use nowait_common::{DiagnosticCategory, Span};
use nowait_semantic::{
    Accessibility, MethodSymbol, SymbolStore, SymbolStoreBuilder, TypeId, TypeSymbol,
};

fn internal_type(builder: &mut SymbolStoreBuilder, name: &str) -> TypeId {
    builder.add_type(TypeSymbol::class(name).with_accessibility(Accessibility::Internal))
}

fn span(start: u32) -> Span {
    Span::new(start, start + 6)
}

// =============================================================================
// Compilation start
// =============================================================================

#[test]
fn test_inert_without_well_known_types() {
    let mut builder = SymbolStore::builder();
    builder.add_type(TypeSymbol::class("System.Threading.Tasks.Task"));
    let store = builder.build();
    let options = AnalyzerOptions::default();

    assert!(BlockingCallAnalyzer::on_compilation_start(&store, &options).is_none());
}

#[test]
fn test_supported_rules_always_registered() {
    let ids: Vec<_> = BlockingCallAnalyzer::supported_rules()
        .iter()
        .map(|rule| rule.id)
        .collect();
    assert_eq!(
        ids,
        [
            rule_ids::BLOCKING_CALL_IN_ASYNC_CONTEXT,
            rule_ids::BLOCKING_CALL_CONVERTIBLE_TO_ASYNC
        ]
    );
}

// =============================================================================
// Per-site evaluation
// =============================================================================

#[test]
fn test_wait_in_async_method() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let svc = internal_type(&mut builder, "App.Service");
    let run = async_method(&mut builder, svc, "RunAsync", fw.task);
    let store = builder.build();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let op = Operation::invocation(fw.task_wait, span(40));
    let file = file_in(run, vec![op]);
    assert_eq!(
        analyzer.evaluate(&file, &op),
        Finding::InAsyncContext {
            span: span(40),
            message: "Use await instead of 'Wait()'".to_string(),
        }
    );
}

#[test]
fn test_wait_in_private_sync_method() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let svc = internal_type(&mut builder, "App.Service");
    let run = private_method(&mut builder, svc, "Run");
    let store = builder.build();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let op = Operation::invocation(fw.task_wait, span(40));
    let file = file_in(run, vec![op]);
    assert_eq!(
        analyzer.evaluate(&file, &op),
        Finding::CanMakeAsync {
            span: span(40),
            message: "Use await instead of 'Wait()' and make method async".to_string(),
        }
    );
}

#[test]
fn test_outside_any_executable() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let store = builder.build();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let op = Operation::property_reference(fw.task_result, span(10)).on(fw.task_int);
    let mut file = SourceFile::new("Fields.cs");
    file.push_operation(op);
    assert_eq!(analyzer.evaluate(&file, &op), Finding::NoMatch);
}

#[test]
fn test_async_lambda_inside_sync_method() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let svc = internal_type(&mut builder, "App.Service");
    let outer = private_method(&mut builder, svc, "Schedule");
    let lambda = builder.add_executable(
        MethodSymbol::lambda()
            .with_flags(nowait_semantic::MethodFlags::ASYNC)
            .with_return_type(fw.task),
    );
    let store = builder.build();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let inside = Operation::invocation(fw.awaiter_get_result, span(120));
    let outside = Operation::invocation(fw.awaiter_get_result, span(300));
    let mut file = file_in(outer, vec![inside, outside]);
    file.push_scope(Span::new(100, 200), lambda);

    assert!(matches!(
        analyzer.evaluate(&file, &inside),
        Finding::InAsyncContext { .. }
    ));
    assert!(matches!(
        analyzer.evaluate(&file, &outside),
        Finding::CanMakeAsync { .. }
    ));
}

#[test]
fn test_public_sync_method_is_not_reported() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let svc = builder.add_type(TypeSymbol::class("App.Service"));
    let run = builder.add_method(
        svc,
        MethodSymbol::method("Run").with_accessibility(Accessibility::Public),
    );
    let store = builder.build();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let op = Operation::invocation(fw.task_wait, span(40));
    let file = file_in(run, vec![op]);
    assert_eq!(analyzer.evaluate(&file, &op), Finding::NoMatch);
}

/// ```text
/// interface IHandler<T> { void Handle(T item); }
/// class IntHandler : IHandler<int> { public void Handle(int item) => task.Wait(); }
/// ```
#[test]
fn test_generic_interface_implementation_is_not_reported() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let handler = builder.add_type(
        TypeSymbol::interface("App.IHandler`1").with_accessibility(Accessibility::Internal),
    );
    let t = builder.add_type_parameter(handler, "T", 0);
    builder.add_method(
        handler,
        MethodSymbol::method("Handle")
            .with_accessibility(Accessibility::Public)
            .with_parameters([t]),
    );
    let handler_int = builder.construct(handler, [fw.int32]);
    let int_handler = internal_type(&mut builder, "App.IntHandler");
    builder.add_interface(int_handler, handler_int);
    let handle = builder.add_method(
        int_handler,
        MethodSymbol::method("Handle")
            .with_accessibility(Accessibility::Public)
            .with_parameters([fw.int32]),
    );
    let store = builder.build();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let op = Operation::invocation(fw.task_wait, span(40));
    let file = file_in(handle, vec![op]);
    assert_eq!(analyzer.evaluate(&file, &op), Finding::NoMatch);
}

/// `Put(List<int>)` does not satisfy `ISink.Put(List<string>)`, so its
/// signature is still free to change.
#[test]
fn test_overload_with_other_type_arguments_can_be_made_async() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let string = builder.add_type(TypeSymbol::class("System.String"));
    let list = builder.add_type(TypeSymbol::class("System.Collections.Generic.List`1"));
    let list_int = builder.construct(list, [fw.int32]);
    let list_string = builder.construct(list, [string]);
    let sink = builder.add_type(
        TypeSymbol::interface("App.ISink").with_accessibility(Accessibility::Internal),
    );
    builder.add_method(
        sink,
        MethodSymbol::method("Put")
            .with_accessibility(Accessibility::Public)
            .with_parameters([list_string]),
    );
    let owner = internal_type(&mut builder, "App.Sink");
    builder.add_interface(owner, sink);
    let put = builder.add_method(
        owner,
        MethodSymbol::method("Put")
            .with_accessibility(Accessibility::Public)
            .with_parameters([list_int]),
    );
    let store = builder.build();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let op = Operation::invocation(fw.task_wait, span(40));
    let file = file_in(put, vec![op]);
    assert_eq!(
        analyzer.evaluate(&file, &op),
        Finding::CanMakeAsync {
            span: span(40),
            message: "Use await instead of 'Wait()' and make method async".to_string(),
        }
    );
}

// =============================================================================
// File and compilation passes
// =============================================================================

fn two_findings() -> (SymbolStore, SourceFile) {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let svc = internal_type(&mut builder, "App.Service");
    let run = private_method(&mut builder, svc, "Run");
    let store = builder.build();
    let file = file_in(
        run,
        vec![
            Operation::invocation(fw.task_wait, span(10)),
            Operation::invocation(fw.task_dispose, span(20)),
            Operation::property_reference(fw.task_result, span(30)).on(fw.task_int),
        ],
    );
    (store, file)
}

#[test]
fn test_analyze_file_collects_diagnostics_and_stats() {
    let (store, file) = two_findings();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let report = analyzer.analyze_file(&file, &CancellationToken::new());
    assert!(!report.cancelled);
    assert_eq!(report.stats.files_analyzed, 1);
    assert_eq!(report.stats.call_sites, 3);
    assert_eq!(report.stats.can_make_async, 2);

    let messages: Vec<_> = report
        .diagnostics
        .iter()
        .map(|d| d.message_text.as_str())
        .collect();
    assert_eq!(
        messages,
        [
            "Use await instead of 'Wait()' and make method async",
            "Use await instead of 'Result' and make method async",
        ]
    );
    let first = &report.diagnostics[0];
    assert_eq!(first.rule_id, rule_ids::BLOCKING_CALL_CONVERTIBLE_TO_ASYNC);
    assert_eq!(first.file, "Service.cs");
    assert_eq!((first.start, first.length), (10, 6));
    assert_eq!(first.category, DiagnosticCategory::Info);
}

#[test]
fn test_generated_file_skipped_by_default() {
    let (store, file) = two_findings();
    let file = file.mark_generated();

    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");
    let report = analyzer.analyze_file(&file, &CancellationToken::new());
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.stats.files_skipped, 1);
    assert_eq!(report.stats.call_sites, 0);

    let options = AnalyzerOptions {
        analyze_generated_code: true,
        ..AnalyzerOptions::default()
    };
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");
    let report = analyzer.analyze_file(&file, &CancellationToken::new());
    assert_eq!(report.diagnostics.len(), 2);
}

#[test]
fn test_disabled_rule_is_not_replaced() {
    let (store, file) = two_findings();
    let options = AnalyzerOptions::default().with_rule(
        rule_ids::BLOCKING_CALL_CONVERTIBLE_TO_ASYNC,
        RuleSetting {
            enabled: Some(false),
            severity: None,
        },
    );
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let report = analyzer.analyze_file(&file, &CancellationToken::new());
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.stats.can_make_async, 2);
}

#[test]
fn test_severity_override() {
    let (store, file) = two_findings();
    let options = AnalyzerOptions::default().with_rule(
        rule_ids::BLOCKING_CALL_CONVERTIBLE_TO_ASYNC,
        RuleSetting {
            enabled: None,
            severity: Some(DiagnosticCategory::Warning),
        },
    );
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let report = analyzer.analyze_file(&file, &CancellationToken::new());
    assert!(
        report
            .diagnostics
            .iter()
            .all(|d| d.category == DiagnosticCategory::Warning)
    );
}

#[test]
fn test_cancelled_before_start() {
    let (store, file) = two_findings();
    let options = AnalyzerOptions::default();
    let analyzer = BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");

    let cancel = CancellationToken::new();
    cancel.cancel();
    let report = analyzer.analyze_file(&file, &cancel);
    assert!(report.cancelled);
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.stats.call_sites, 0);
}

#[test]
fn test_cancellation_token_is_shared_between_clones() {
    let token = CancellationToken::new();
    let clone = token.clone();
    assert!(!clone.is_cancelled());
    token.cancel();
    assert!(clone.is_cancelled());
}

#[test]
fn test_analyze_compilation_sorts_by_file_then_position() {
    let mut builder = SymbolStore::builder();
    let fw = framework(&mut builder);
    let svc = internal_type(&mut builder, "App.Service");
    let run = async_method(&mut builder, svc, "RunAsync", fw.task);
    let store = builder.build();

    let mut b_file = SourceFile::new("b/Worker.cs");
    b_file.push_scope(Span::new(0, 1000), run);
    b_file.push_operation(Operation::invocation(fw.task_wait, span(50)));
    b_file.push_operation(Operation::invocation(fw.task_wait, span(5)));

    let mut a_file = SourceFile::new("a/Program.cs");
    a_file.push_scope(Span::new(0, 1000), run);
    a_file.push_operation(Operation::invocation(fw.awaiter_get_result, span(70)));

    let compilation = Compilation::new(store, vec![b_file, a_file]);
    let report = analyze_compilation(
        &compilation,
        &AnalyzerOptions::default(),
        &CancellationToken::new(),
    );

    let locations: Vec<_> = report
        .diagnostics
        .iter()
        .map(|d| (d.file.as_str(), d.start))
        .collect();
    assert_eq!(
        locations,
        [("a/Program.cs", 70), ("b/Worker.cs", 5), ("b/Worker.cs", 50)]
    );
    assert_eq!(report.stats.files_analyzed, 2);
    assert_eq!(report.stats.in_async_context, 3);
}

#[test]
fn test_analyze_compilation_inert() {
    let mut builder = SymbolStore::builder();
    let svc = internal_type(&mut builder, "App.Service");
    let run = private_method(&mut builder, svc, "Run");
    let store = builder.build();
    let compilation = Compilation::new(store, vec![file_in(run, vec![])]);

    let report = analyze_compilation(
        &compilation,
        &AnalyzerOptions::default(),
        &CancellationToken::new(),
    );
    assert_eq!(report, AnalysisReport::default());
}

#[test]
fn test_stats_merge() {
    let a = AnalysisStats {
        files_analyzed: 1,
        call_sites: 4,
        in_async_context: 1,
        ..AnalysisStats::default()
    };
    let b = AnalysisStats {
        files_skipped: 1,
        call_sites: 2,
        can_make_async: 2,
        ..AnalysisStats::default()
    };
    assert_eq!(
        a.merge(b),
        AnalysisStats {
            files_analyzed: 1,
            files_skipped: 1,
            call_sites: 6,
            in_async_context: 1,
            can_make_async: 2,
        }
    );
}

#[test]
fn test_analysis_under_trace_subscriber() {
    let (store, file) = two_findings();
    let options = AnalyzerOptions::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    let report = tracing::subscriber::with_default(subscriber, || {
        let analyzer =
            BlockingCallAnalyzer::on_compilation_start(&store, &options).expect("active");
        analyzer.analyze_files(std::slice::from_ref(&file), &CancellationToken::new())
    });
    assert_eq!(report.diagnostics.len(), 2);
}
