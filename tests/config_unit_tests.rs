use super::*;
use nowait_common::DiagnosticCategory;

#[test]
fn test_strip_comments_keeps_strings() {
    let source = r#"{ "a": "http://x/*y*/", // trailing
  /* block
     comment */ "b": 1 }"#;
    let stripped = strip_comments(source);
    assert!(stripped.contains(r#""http://x/*y*/""#));
    assert!(!stripped.contains("trailing"));
    assert!(!stripped.contains("block"));
    assert_eq!(stripped.matches('\n').count(), 2);
}

#[test]
fn test_strip_comments_handles_escaped_quote() {
    let stripped = strip_comments(r#"{ "a": "say \"//hi\"" }"#);
    assert_eq!(stripped, r#"{ "a": "say \"//hi\"" }"#);
}

#[test]
fn test_remove_trailing_commas() {
    assert_eq!(
        remove_trailing_commas("{ \"a\": [1, 2,\n ],\n}"),
        "{ \"a\": [1, 2\n ]\n}"
    );
    assert_eq!(remove_trailing_commas(r#"{"a": ",}"}"#), r#"{"a": ",}"}"#);
}

#[test]
fn test_parse_empty_object() {
    let options = parse_options("{}").expect("parse");
    assert_eq!(options, AnalyzerOptions::default());
}

#[test]
fn test_parse_jsonc_options() {
    let options = parse_options(
        r#"{
            // custom runtime
            "wellKnownTypes": { "asyncResult": "Rt.Future", },
            "rules": {
                "BlockingCallConvertibleToAsync": { "enabled": "off" },
                "BlockingCallInAsyncContext": { "severity": "error" },
            },
            "analyzeGeneratedCode": true,
        }"#,
    )
    .expect("parse");

    assert_eq!(options.well_known_types.async_result, "Rt.Future");
    assert_eq!(
        options.well_known_types.async_result_of_t,
        "System.Threading.Tasks.Task`1"
    );
    assert!(options.analyze_generated_code);
    assert_eq!(
        options.rules["BlockingCallConvertibleToAsync"].enabled,
        Some(false)
    );
    assert_eq!(
        options.rules["BlockingCallInAsyncContext"].severity,
        Some(DiagnosticCategory::Error)
    );
}

#[test]
fn test_rejects_unknown_rule() {
    let err = parse_options(r#"{ "rules": { "NoSuchRule": { "enabled": false } } }"#)
        .expect_err("unknown rule");
    assert!(err.to_string().contains("NoSuchRule"));
}

#[test]
fn test_rejects_empty_suffix() {
    let err = parse_options(r#"{ "members": { "asyncSuffix": "" } }"#).expect_err("empty suffix");
    assert_eq!(err.to_string(), "members.asyncSuffix must not be empty");
}

#[test]
fn test_rejects_blank_type_name() {
    let err = parse_options(r#"{ "wellKnownTypes": { "asyncResultAwaiter": "  " } }"#)
        .expect_err("blank type");
    assert!(err.to_string().contains("asyncResultAwaiter"));
}

#[test]
fn test_rejects_malformed_json() {
    let err = parse_options("{ rules: }").expect_err("malformed");
    assert!(err.to_string().contains("failed to parse analyzer options JSON"));
}
