//! Implementations of the `argroute` subcommands.
//!
//! Each command renders its output into a [`Report`] so the binary only has
//! to print it and pick an exit code.

use std::fmt::Write;
use std::path::Path;

use argroute_pattern::{
    Lexer, OptionMatcher, PatternDiagnostics, RouteMatcher, TokenKind, analyze,
};
use argroute_resolver::{Result, resolve};

use crate::table::RouteTable;

/// Rendered command output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Text for stdout.
    pub output: String,
    /// False if the command found problems.
    pub success: bool,
}

impl Report {
    fn new() -> Self {
        Self {
            output: String::new(),
            success: true,
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }
}

fn write_diagnostics(report: &mut Report, diagnostics: &PatternDiagnostics) {
    report.line(diagnostics.to_string());
}

/// Loads a route table and reports every pattern problem in it.
///
/// The report fails if any route was rejected. Retained diagnostics fail it
/// too when `verbose` is set.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn check<P: AsRef<Path>>(path: P, verbose: bool) -> Result<Report> {
    let path = path.as_ref();
    let table = RouteTable::load(path)?;
    let loaded = table.register();
    let mut report = Report::new();

    for diagnostics in &loaded.rejected {
        report.line("rejected:");
        write_diagnostics(&mut report, diagnostics);
    }
    for diagnostics in &loaded.diagnostics {
        report.line("warning:");
        write_diagnostics(&mut report, diagnostics);
    }

    if verbose {
        report.line("routes by precedence:");
        for endpoint in &loaded.collection {
            report.line(format!(
                "  {:>5}  {:<40} -> {}",
                endpoint.specificity(),
                endpoint.pattern,
                endpoint.handler
            ));
        }
    }

    report.success = loaded.rejected.is_empty() && (!verbose || loaded.diagnostics.is_empty());
    report.line(format!(
        "{}: {} routes, {} accepted, {} rejected, {} with warnings",
        path.display(),
        table.routes.len(),
        loaded.collection.len(),
        loaded.rejected.len(),
        loaded.diagnostics.len()
    ));
    Ok(report)
}

fn describe_token(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Identifier(text) => format!("identifier({text})"),
        TokenKind::Invalid(text) => format!("invalid({text})"),
        other => other.name().to_string(),
    }
}

fn describe_option(option: &OptionMatcher) -> String {
    let mut text = option.match_pattern.clone();
    if let Some(alternate) = &option.alternate_form {
        let _ = write!(text, ", {alternate}");
    }
    let requirement = if option.is_optional { "optional" } else { "required" };
    let shape = match (option.is_flag(), option.is_repeated) {
        (true, _) => "flag",
        (false, true) => "repeated value",
        (false, false) => "value",
    };
    let _ = write!(text, "  {requirement} {shape}");
    if let Some(name) = &option.parameter_name {
        let _ = write!(text, " -> {name}");
    }
    if let Some(ty) = &option.parameter_type {
        let _ = write!(text, ": {ty}");
    }
    text
}

/// Shows how a single pattern is tokenized, parsed, and compiled.
///
/// The report fails if the pattern has any diagnostic.
#[must_use]
pub fn explain(pattern: &str, verbose: bool) -> Report {
    let analysis = analyze(pattern);
    let route = analysis.compile();
    let mut report = Report::new();

    report.line(format!("pattern:     {pattern}"));
    report.line(format!("canonical:   {}", route.to_pattern()));
    report.line(format!("specificity: {}", route.specificity));

    if verbose {
        let tokens: Vec<String> = Lexer::tokenize(pattern)
            .iter()
            .filter(|t| t.kind != TokenKind::EndOfInput)
            .map(|t| describe_token(&t.kind))
            .collect();
        report.line(format!("tokens:      {}", tokens.join(" ")));
    }

    report.line("matchers:");
    for matcher in &route.matchers {
        let line = match matcher {
            RouteMatcher::Literal(l) if l.is_end_of_options() => "  end of options --".to_string(),
            RouteMatcher::Literal(l) => format!("  literal    {}", l.value),
            RouteMatcher::Parameter(p) => {
                let requirement = if p.is_catch_all {
                    "catch-all"
                } else if p.is_optional {
                    "optional"
                } else {
                    "required"
                };
                match &p.type_constraint {
                    Some(ty) => format!("  parameter  {} ({requirement}, {ty})", p.name),
                    None => format!("  parameter  {} ({requirement})", p.name),
                }
            }
            RouteMatcher::Option(o) => format!("  option     {}", describe_option(o)),
        };
        report.line(line);
    }

    if analysis.is_valid() {
        report.line("no problems found");
    } else {
        report.success = false;
        let diagnostics = PatternDiagnostics {
            pattern: analysis.pattern,
            parse_errors: analysis.parse_errors,
            semantic_errors: analysis.semantic_errors,
        };
        write_diagnostics(&mut report, &diagnostics);
    }
    report
}

/// Resolves an argument list against a route table.
///
/// # Errors
///
/// Returns an error if the table cannot be loaded or no route matches.
pub fn resolve_args<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    args: &[S],
    verbose: bool,
) -> Result<Report> {
    let table = RouteTable::load(path)?;
    let loaded = table.register();
    let matched = resolve(args, &loaded.collection)?;
    let mut report = Report::new();

    report.line(format!("handler: {}", matched.handler()));
    report.line(format!("route:   {}", matched.endpoint.pattern));
    if verbose {
        report.line(format!(
            "score:   specificity {}, defaults used {}",
            matched.endpoint.specificity(),
            matched.defaults_used
        ));
    }

    let mut names: Vec<&String> = matched.values.keys().collect();
    names.sort();
    for name in names {
        report.line(format!("  {name} = {}", matched.values[name]));
    }
    Ok(report)
}
