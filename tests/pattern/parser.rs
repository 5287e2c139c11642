//! Integration tests for the parser
//!
//! Tests parsing of route patterns into syntax trees, including recovery.

use argroute_pattern::{ParseErrorKind, Segment, parse};

// =============================================================================
// Segments
// =============================================================================

#[test]
fn parse_literals_parameters_and_options() {
    let parsed = parse("deploy {env:string|Target env} --force,-f?|Skip checks");
    assert!(parsed.is_ok(), "{:?}", parsed.errors);
    let segments = &parsed.syntax.segments;
    assert_eq!(segments.len(), 3);

    let Segment::Literal(literal) = &segments[0] else {
        panic!("expected literal");
    };
    assert_eq!(literal.value, "deploy");

    let env = segments[1].as_parameter().unwrap();
    assert_eq!(env.name, "env");
    assert_eq!(env.type_constraint.as_deref(), Some("string"));
    assert_eq!(env.description.as_deref(), Some("Target env"));
    assert!(!env.is_optional);

    let force = segments[2].as_option().unwrap();
    assert_eq!(force.long_form.as_deref(), Some("force"));
    assert_eq!(force.short_form.as_deref(), Some("f"));
    assert!(force.is_optional);
    assert_eq!(force.description.as_deref(), Some("Skip checks"));
    assert!(force.parameter.is_none());
}

#[test]
fn parse_option_with_repeated_value() {
    let parsed = parse("docker run --env,-e {var}*");
    assert!(parsed.is_ok());
    let env = parsed.syntax.options().next().unwrap();
    assert!(env.is_repeated());
    assert_eq!(env.parameter.as_ref().map(|p| p.name.as_str()), Some("var"));
}

#[test]
fn parse_optional_via_type_suffix() {
    let parsed = parse("wait {seconds:int?}");
    let seconds = parsed.syntax.parameters().next().unwrap();
    assert!(seconds.is_optional);
    assert_eq!(seconds.type_constraint.as_deref(), Some("int"));
}

#[test]
fn parse_empty_pattern() {
    let parsed = parse("");
    assert!(parsed.is_ok());
    assert!(parsed.syntax.is_empty());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn unknown_type_is_kept_with_error() {
    let parsed = parse("greet {name:person}");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].kind, ParseErrorKind::InvalidTypeConstraint);
    let name = parsed.syntax.parameters().next().unwrap();
    assert_eq!(name.type_constraint.as_deref(), Some("person"));
}

#[test]
fn types_are_case_insensitive() {
    assert!(parse("{when:DateTime} {id:GUID}").is_ok());
}

#[test]
fn long_single_dash_name_suggests_double_dash() {
    let parsed = parse("build -verbose");
    assert_eq!(parsed.errors[0].kind, ParseErrorKind::InvalidOptionFormat);
    assert_eq!(parsed.errors[0].suggestion.as_deref(), Some("--verbose"));
    assert_eq!(parsed.syntax.segments.len(), 2);
}

#[test]
fn catch_all_marked_optional() {
    let parsed = parse("run {*args?}");
    assert_eq!(parsed.errors[0].kind, ParseErrorKind::InvalidModifierCombination);
    let args = parsed.syntax.parameters().next().unwrap();
    assert!(args.is_catch_all);
    assert!(!args.is_optional);
}

#[test]
fn errors_carry_positions() {
    let parsed = parse("deploy <env>");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].position(), 7);
    assert_eq!(parsed.errors[0].length(), 5);
}

#[test]
fn recovery_reports_every_problem() {
    let parsed = parse("deploy {} <tag> } {ok} {bad");
    let kinds: Vec<_> = parsed.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::InvalidParameterSyntax,
            ParseErrorKind::InvalidParameterSyntax,
            ParseErrorKind::UnbalancedBraces,
            ParseErrorKind::UnbalancedBraces,
        ]
    );
    let names: Vec<_> = parsed.syntax.parameters().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["ok"]);
}

#[test]
fn syntax_display_is_canonical() {
    let parsed = parse("deploy   {env?:string}   --tag,-t   {t}");
    assert_eq!(parsed.syntax.to_string(), "deploy {env:string?} --tag,-t {t}");
}
