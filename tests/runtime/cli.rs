//! The binary's own command routing.

use argroute_runtime::cli::help_text;
use argroute_runtime::{Command, explain, parse_args};
use std::path::PathBuf;

#[test]
fn subcommands_resolve_through_routes() {
    let invocation = parse_args(&["check", "routes.toml", "--verbose"]).unwrap();
    assert_eq!(invocation.command, Command::Check);
    assert_eq!(invocation.file, Some(PathBuf::from("routes.toml")));
    assert!(invocation.verbose);

    let invocation = parse_args(&["-V"]).unwrap();
    assert_eq!(invocation.command, Command::Version);
}

#[test]
fn resolve_arguments_after_separator_are_untouched() {
    let invocation =
        parse_args(&["resolve", "-v", "routes.toml", "--", "git", "--help", "--", "x"]).unwrap();
    assert_eq!(invocation.command, Command::Resolve);
    assert!(invocation.verbose);
    assert_eq!(invocation.args, vec!["git", "--help", "--", "x"]);
}

#[test]
fn explain_output_lists_matchers_in_order() {
    let report = explain("docker run --env,-e {var}* {image}", false);
    assert!(report.success, "{}", report.output);
    let matchers: Vec<&str> = report
        .output
        .lines()
        .skip_while(|l| *l != "matchers:")
        .skip(1)
        .take(3)
        .map(str::trim)
        .collect();
    assert!(matchers[0].starts_with("literal    docker"));
    assert!(matchers[1].starts_with("literal    run"));
    assert!(matchers[2].starts_with("option     --env, -e"));
}

#[test]
fn help_mentions_every_command() {
    let help = help_text();
    for command in ["check", "explain", "resolve", "help"] {
        assert!(help.contains(command), "missing {command}");
    }
}
