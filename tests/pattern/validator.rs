//! Integration tests for semantic validation
//!
//! Tests the route rules through `analyze`, which runs both channels.

use argroute_pattern::{ErrorKind, SemanticErrorKind, analyze, compile};

fn semantic(pattern: &str) -> Vec<SemanticErrorKind> {
    let analysis = analyze(pattern);
    assert!(analysis.parse_errors.is_empty(), "{:?}", analysis.parse_errors);
    analysis.semantic_errors.into_iter().map(|e| e.kind).collect()
}

#[test]
fn duplicate_name_on_option_parameter() {
    let analysis = analyze("deploy {env} --tag {env}");
    assert_eq!(analysis.semantic_errors.len(), 1);
    let error = &analysis.semantic_errors[0];
    assert_eq!(error.kind, SemanticErrorKind::DuplicateParameterName("env".into()));
    assert_eq!(error.span.text("deploy {env} --tag {env}"), "{env}");
    assert_eq!(error.span.start, 19);
}

#[test]
fn consecutive_optionals_need_a_separator() {
    assert_eq!(semantic("deploy {env} {tag?} {note?}").len(), 1);
    assert!(semantic("deploy {env} {tag?} --force {note?}").is_empty());
}

#[test]
fn catch_all_placement() {
    assert_eq!(
        semantic("docker {*args} extra"),
        vec![SemanticErrorKind::CatchAllNotAtEnd("args".into())]
    );
    assert!(semantic("docker {*args}").is_empty());
}

#[test]
fn end_of_options_rules() {
    assert!(semantic("exec {cmd} -- {*args}").is_empty());
    assert_eq!(
        semantic("exec {cmd} --"),
        vec![SemanticErrorKind::MissingCatchAllAfterEndOfOptions]
    );
}

#[test]
fn both_channels_are_reported_together() {
    let analysis = analyze("copy <src> {a?} {b?}");
    assert_eq!(analysis.parse_errors.len(), 1);
    assert_eq!(analysis.semantic_errors.len(), 1);
    assert!(!analysis.is_valid());
}

#[test]
fn strict_compile_rejects_with_every_diagnostic() {
    let err = compile("copy <src> {a?} {b?}").unwrap_err();
    let ErrorKind::InvalidPattern(diagnostics) = &err.kind;
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.pattern, "copy <src> {a?} {b?}");
}
