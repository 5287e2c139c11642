//! Integration tests for route compilation
//!
//! Tests specificity scoring and the compiled form's round trip.

use argroute_pattern::{RouteMatcher, compile, parse};

fn score(pattern: &str) -> i32 {
    compile(pattern).unwrap().specificity
}

#[test]
fn scores_follow_segment_weights() {
    assert_eq!(score(""), 0);
    assert_eq!(score("status"), 100);
    assert_eq!(score("deploy {env}"), 110);
    assert_eq!(score("deploy {env} --force"), 160);
    assert_eq!(score("deploy {env:string} --force?"), 145);
    assert_eq!(score("docker {*args}"), 101);
}

#[test]
fn literal_and_optional_increments() {
    let base = score("deploy {env} --tag {t}");
    assert_eq!(score("deploy {env} --tag {t} now") - base, 100);
    assert_eq!(score("deploy {env} --tag {t} {note?}") - base, 5);
}

#[test]
fn compiled_route_round_trips() {
    for pattern in [
        "deploy {env:string|Target} --version,-v? {tag?|Release tag}",
        "docker run --env,-e {var}* {image} --detach,-d?",
        "exec {cmd} -- {*args}",
    ] {
        let route = compile(pattern).unwrap();
        let rendered = route.to_pattern();
        let reparsed = parse(&rendered);
        assert!(reparsed.is_ok(), "{rendered}: {:?}", reparsed.errors);
        assert!(parse(pattern).syntax.is_equivalent(&reparsed.syntax), "{pattern} -> {rendered}");
        assert_eq!(compile(&rendered).unwrap(), route);
    }
}

#[test]
fn compiled_metadata_for_help() {
    let route = compile("deploy {env|Where to} --tag,-t? {tag:string?|Which build}").unwrap();
    let RouteMatcher::Parameter(env) = &route.matchers[1] else {
        panic!("expected parameter");
    };
    assert_eq!(env.description.as_deref(), Some("Where to"));
    let tag = route.options().next().unwrap();
    assert_eq!(tag.alternate_form.as_deref(), Some("-t"));
    assert_eq!(tag.parameter_type.as_deref(), Some("string"));
    assert_eq!(tag.parameter_description.as_deref(), Some("Which build"));
    assert!(tag.parameter_is_optional);
}
