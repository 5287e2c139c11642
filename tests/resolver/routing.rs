//! Integration tests for route selection
//!
//! Tests end-to-end resolution over realistic route sets.

use argroute_resolver::{EndpointCollection, RegistryConfig, RouteRegistry, resolve};

fn routes(patterns: &[&str]) -> EndpointCollection<usize> {
    let mut registry = RouteRegistry::new();
    for (i, pattern) in patterns.iter().enumerate() {
        registry.register(pattern, i).unwrap();
    }
    registry.into_collection()
}

fn winner<'a>(collection: &'a EndpointCollection<usize>, args: &[&str]) -> Option<&'a str> {
    resolve(args, collection).ok().map(|m| m.endpoint.pattern.as_str())
}

// =============================================================================
// Route selection
// =============================================================================

#[test]
fn deploy_routes() {
    let collection = routes(&["status", "deploy {env}", "deploy {env} --force"]);
    assert_eq!(winner(&collection, &["deploy", "prod", "--force"]), Some("deploy {env} --force"));
    assert_eq!(winner(&collection, &["deploy", "prod"]), Some("deploy {env}"));
    assert_eq!(winner(&collection, &["status"]), Some("status"));
    assert_eq!(winner(&collection, &["deploy"]), None);
}

#[test]
fn git_like_command_tree() {
    let collection = routes(&[
        "git status",
        "git commit --message,-m {msg} --amend?",
        "git log --oneline? --max-count,-n? {count:int?}",
        "git remote add {name} {url}",
        "git {*args}",
    ]);
    let m = resolve(&["git", "commit", "-m", "fix bug", "--amend"], &collection).unwrap();
    assert_eq!(m.value("msg"), Some("fix bug"));
    assert_eq!(m.value("amend"), Some("true"));

    let m = resolve(&["git", "log", "-n", "5", "--oneline"], &collection).unwrap();
    assert_eq!(m.value("count"), Some("5"));
    assert_eq!(m.value("oneline"), Some("true"));

    assert_eq!(
        winner(&collection, &["git", "remote", "add", "origin", "git@host:repo"]),
        Some("git remote add {name} {url}")
    );
    assert_eq!(winner(&collection, &["git", "status"]), Some("git status"));
    assert_eq!(winner(&collection, &["git", "stash", "pop"]), Some("git {*args}"));
    // Missing required option value falls through to the catch-all.
    assert_eq!(winner(&collection, &["git", "commit"]), Some("git {*args}"));
}

#[test]
fn catch_all_beats_routes_that_need_defaults() {
    let collection = routes(&["git commit --message,-m {msg} --amend?", "git {*args}"]);
    // The commit route leaves `--amend` unset; the catch-all needs no default.
    let m = resolve(&["git", "commit", "-m", "wip"], &collection).unwrap();
    assert_eq!(m.endpoint.pattern, "git {*args}");
    assert_eq!(m.value("args"), Some("commit -m wip"));

    let m = resolve(&["git", "commit", "-m", "wip", "--amend"], &collection).unwrap();
    assert_eq!(m.endpoint.pattern, "git commit --message,-m {msg} --amend?");
}

#[test]
fn exec_passes_flags_through() {
    let collection = routes(&["exec {cmd} -- {*args}"]);
    let m = resolve(&["exec", "npm", "--", "run", "--watch"], &collection).unwrap();
    assert_eq!(m.value("cmd"), Some("npm"));
    assert_eq!(m.value("args"), Some("run --watch"));
    assert_eq!(m.values_of("args").collect::<Vec<_>>(), vec!["run", "--watch"]);
}

#[test]
fn default_route_handles_no_arguments() {
    let collection = routes(&["", "version"]);
    let empty: [&str; 0] = [];
    assert_eq!(winner(&collection, &empty), Some(""));
    assert_eq!(winner(&collection, &["version"]), Some("version"));
}

#[test]
fn short_and_long_forms_are_interchangeable() {
    let collection = routes(&["build --output,-o {dir} --release,-r?"]);
    for args in [
        ["build", "--output", "dist", "--release"],
        ["build", "-o", "dist", "-r"],
        ["build", "-r", "--output", "dist"],
    ] {
        let m = resolve(&args, &collection).unwrap();
        assert_eq!(m.value("dir"), Some("dist"));
        assert_eq!(m.value("release"), Some("true"));
    }
}

#[test]
fn registration_diagnostics_survive_lenient_mode() {
    let mut registry = RouteRegistry::with_config(RegistryConfig::lenient());
    registry.register("old <style>", "old").unwrap();
    registry.register("new {style}", "new").unwrap();
    assert_eq!(registry.diagnostics().len(), 1);
    let collection = registry.into_collection();
    assert_eq!(resolve(&["new", "x"], &collection).unwrap().handler(), &"new");
    // The invalid token was dropped, leaving the literal alone.
    assert_eq!(resolve(&["old"], &collection).unwrap().handler(), &"old");
}

#[test]
fn separator_after_extra_positional_is_rejected() {
    let collection = routes(&["exec {cmd} -- {*args}"]);
    assert_eq!(winner(&collection, &["exec", "a", "b", "--", "c"]), None);

    let m = resolve(&["exec", "a", "--", "b", "--", "c"], &collection).unwrap();
    assert_eq!(m.value("cmd"), Some("a"));
    assert_eq!(m.values_of("args").collect::<Vec<_>>(), vec!["b", "--", "c"]);
}

#[test]
fn flag_followed_by_catch_all() {
    let collection = routes(&["docker --verbose,-v? {*args}", "docker"]);
    let m = resolve(&["docker", "-v", "ps", "-a"], &collection).unwrap();
    assert_eq!(m.endpoint.pattern, "docker --verbose,-v? {*args}");
    assert_eq!(m.value("verbose"), Some("true"));
    assert_eq!(m.value("args"), Some("ps -a"));
}
