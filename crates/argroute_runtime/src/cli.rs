//! Command-line surface of the `argroute` binary.
//!
//! The binary's own subcommands are ordinary routes, resolved with the same
//! resolver that serves route tables.

use std::path::PathBuf;

use argroute_resolver::{EndpointCollection, Result, RouteMatch, RouteRegistry, resolve};

/// Subcommands of the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print usage.
    Help,
    /// Print the version.
    Version,
    /// Validate a route table.
    Check,
    /// Show how one pattern is analyzed.
    Explain,
    /// Resolve arguments against a route table.
    Resolve,
}

/// Routes understood by the binary, in registration order.
pub const COMMAND_ROUTES: &[(&str, Command)] = &[
    ("", Command::Help),
    ("help", Command::Help),
    ("--help,-h", Command::Help),
    ("--version,-V", Command::Version),
    ("check {file:fileinfo|Route table} --verbose,-v?", Command::Check),
    ("explain {pattern:string|Route pattern} --verbose,-v?", Command::Explain),
    (
        "resolve {file:fileinfo|Route table} --verbose,-v? -- {*args}",
        Command::Resolve,
    ),
];

/// A resolved command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Which subcommand to run.
    pub command: Command,
    /// Route table path, for `check` and `resolve`.
    pub file: Option<PathBuf>,
    /// Pattern text, for `explain`.
    pub pattern: Option<String>,
    /// Arguments to resolve, for `resolve`.
    pub args: Vec<String>,
    /// Extra output requested.
    pub verbose: bool,
}

impl Invocation {
    fn from_match(matched: &RouteMatch<'_, Command>) -> Self {
        Self {
            command: *matched.handler(),
            file: matched.value("file").map(PathBuf::from),
            pattern: matched.value("pattern").map(str::to_string),
            args: matched.values_of("args").map(str::to_string).collect(),
            verbose: matched.value("verbose") == Some("true"),
        }
    }
}

/// Builds the binary's route collection.
///
/// # Errors
///
/// Returns a pattern error if a built-in route is invalid.
pub fn command_routes() -> Result<EndpointCollection<Command>> {
    let mut registry = RouteRegistry::new();
    for (pattern, command) in COMMAND_ROUTES {
        registry.register(pattern, *command)?;
    }
    Ok(registry.into_collection())
}

/// Resolves the binary's arguments, excluding the program name.
///
/// # Errors
///
/// Returns a no-match error if the arguments fit no subcommand.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation> {
    let routes = command_routes()?;
    let matched = resolve(args, &routes)?;
    Ok(Invocation::from_match(&matched))
}

/// Returns true if `--verbose`/`-v` appears before any `--` separator.
///
/// Used to set up logging before the arguments are resolved.
pub fn wants_verbose<S: AsRef<str>>(args: &[S]) -> bool {
    args.iter()
        .map(AsRef::as_ref)
        .take_while(|a| *a != "--")
        .any(|a| a == "--verbose" || a == "-v")
}

/// Usage text.
#[must_use]
pub fn help_text() -> String {
    format!(
        "\x1b[1margroute\x1b[0m {} - Route pattern compiler and resolver

\x1b[1mUSAGE:\x1b[0m
    argroute <COMMAND> [OPTIONS]

\x1b[1mCOMMANDS:\x1b[0m
    check <FILE>                 Validate every route in a route table
    explain <PATTERN>            Show tokens, matchers, score, and problems of a pattern
    resolve <FILE> -- <ARGS...>  Pick the route a command line dispatches to
    help                         Print help information

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -v, --verbose      More output and debug logging

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG           Log filter (e.g. RUST_LOG=argroute_resolver=trace)

\x1b[1mEXAMPLES:\x1b[0m
    argroute explain \"deploy {{env}} --force?\"
    argroute check routes.toml -v
    argroute resolve routes.toml -- deploy prod --force",
        env!("CARGO_PKG_VERSION")
    )
}
