//! Route table loading and registration.

use argroute_runtime::{RouteTable, check, resolve_args};
use std::fs;
use std::path::PathBuf;

fn temp_table(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "argroute-it-{}-{name}.toml",
        std::process::id()
    ));
    fs::write(&path, content).unwrap();
    path
}

const DEPLOY_TABLE: &str = r#"
[registry]
strict = true

[[routes]]
pattern = "status"
handler = "status"

[[routes]]
pattern = "deploy {env}"
handler = "deploy"

[[routes]]
pattern = "deploy {env} --force,-f"
handler = "force-deploy"

[[routes]]
pattern = "deploy {env} --dry-run"
handler = "dry-run"

[[routes]]
pattern = "exec {cmd} -- {*args}"
handler = "exec"
"#;

#[test]
fn table_resolves_like_a_registry() {
    let table = RouteTable::from_toml(DEPLOY_TABLE).unwrap();
    let loaded = table.register();
    assert!(loaded.is_clean());
    assert_eq!(loaded.collection.len(), 5);

    let m = argroute_resolver::resolve(&["deploy", "prod"], &loaded.collection).unwrap();
    assert_eq!(m.handler(), "deploy");

    let m = argroute_resolver::resolve(&["deploy", "prod", "-f"], &loaded.collection).unwrap();
    assert_eq!(m.handler(), "force-deploy");

    let m = argroute_resolver::resolve(&["deploy", "prod", "--dry-run"], &loaded.collection)
        .unwrap();
    assert_eq!(m.handler(), "dry-run");
}

#[test]
fn strict_table_rejects_broken_routes() {
    let table = RouteTable::from_toml(
        r#"
        [[routes]]
        pattern = "build <target>"
        handler = "build"

        [[routes]]
        pattern = "build {target}"
        handler = "build-ok"
        "#,
    )
    .unwrap();
    let loaded = table.register();
    assert_eq!(loaded.rejected.len(), 1);
    assert_eq!(loaded.rejected[0].pattern, "build <target>");
    assert_eq!(loaded.collection.len(), 1);
}

#[test]
fn lenient_table_keeps_broken_routes_with_warnings() {
    let table = RouteTable::from_toml(
        r#"
        [registry]
        strict = false
        allow_semantic_errors = true

        [[routes]]
        pattern = "copy {src?} {dst?}"
        handler = "copy"
        "#,
    )
    .unwrap();
    let loaded = table.register();
    assert!(loaded.rejected.is_empty());
    assert_eq!(loaded.diagnostics.len(), 1);
    assert_eq!(loaded.collection.len(), 1);
}

#[test]
fn malformed_tables_are_configuration_errors() {
    let err = RouteTable::from_toml("[[routes]]\npattern = 3\n").unwrap_err();
    assert!(err.to_string().starts_with("configuration error"));

    let err = RouteTable::from_toml("[[routes]]\npattern = \"a\"\nhandler = \" \"\n").unwrap_err();
    assert!(err.to_string().contains("empty handler name"));
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("argroute-it-does-not-exist.toml");
    assert!(RouteTable::load(&path).is_err());
}

#[test]
fn check_and_resolve_files() {
    let path = temp_table("deploy", DEPLOY_TABLE);

    let report = check(&path, false).unwrap();
    assert!(report.success, "{}", report.output);
    assert!(report.output.contains("5 routes, 5 accepted, 0 rejected, 0 with warnings"));

    let report = resolve_args(&path, &["exec", "ls", "--", "-la", "/tmp"], false).unwrap();
    assert!(report.output.starts_with("handler: exec\n"));
    assert!(report.output.contains("  args = -la /tmp\n"));
    assert!(report.output.contains("  cmd = ls\n"));

    let err = resolve_args(&path, &["deploy"], false).unwrap_err();
    assert!(err.is_no_match());

    fs::remove_file(&path).ok();
}
