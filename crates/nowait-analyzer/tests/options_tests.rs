use super::*;
use nowait_common::diagnostics::{
    BLOCKING_CALL_CONVERTIBLE_TO_ASYNC, BLOCKING_CALL_IN_ASYNC_CONTEXT,
};

#[test]
fn test_empty_object_yields_defaults() {
    let options: AnalyzerOptions = serde_json::from_str("{}").expect("parse");
    assert_eq!(options, AnalyzerOptions::default());
    assert_eq!(
        options.well_known_types.async_result_of_t,
        "System.Threading.Tasks.Task`1"
    );
    assert_eq!(options.members.blocking_wait, "Wait");
    assert!(!options.analyze_generated_code);
}

#[test]
fn test_partial_member_names_keep_other_defaults() {
    let options: AnalyzerOptions =
        serde_json::from_str(r#"{"members": {"asyncSuffix": "Async2"}}"#).expect("parse");
    assert_eq!(options.members.async_suffix, "Async2");
    assert_eq!(options.members.result_accessor, "Result");
}

#[test]
fn test_rule_settings_accept_string_booleans() {
    let options: AnalyzerOptions = serde_json::from_str(
        r#"{
            "rules": {
                "BlockingCallConvertibleToAsync": {"enabled": "false"},
                "BlockingCallInAsyncContext": {"severity": "warning"}
            }
        }"#,
    )
    .expect("parse");

    assert!(!options.rule_enabled(&BLOCKING_CALL_CONVERTIBLE_TO_ASYNC));
    assert!(options.rule_enabled(&BLOCKING_CALL_IN_ASYNC_CONTEXT));
    assert_eq!(
        options.rule_category(&BLOCKING_CALL_IN_ASYNC_CONTEXT),
        DiagnosticCategory::Warning
    );
    assert_eq!(
        options.rule_category(&BLOCKING_CALL_CONVERTIBLE_TO_ASYNC),
        DiagnosticCategory::Info
    );
}

#[test]
fn test_invalid_boolean_string_is_rejected() {
    let result: Result<AnalyzerOptions, _> =
        serde_json::from_str(r#"{"rules": {"BlockingCallInAsyncContext": {"enabled": "maybe"}}}"#);
    let err = result.expect_err("maybe is not a boolean");
    assert!(err.to_string().contains("invalid boolean value"));
}

#[test]
fn test_with_rule_builder() {
    let options = AnalyzerOptions::default().with_rule(
        BLOCKING_CALL_IN_ASYNC_CONTEXT.id,
        RuleSetting {
            enabled: Some(false),
            severity: None,
        },
    );
    assert!(!options.rule_enabled(&BLOCKING_CALL_IN_ASYNC_CONTEXT));
}
