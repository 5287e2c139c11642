//! argroute CLI entry point.

use std::env;
use std::process::ExitCode;

use argroute_runtime::cli::{help_text, wants_verbose};
use argroute_runtime::{Command, Report, check, explain, logging, parse_args, resolve_args};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    logging::init(wants_verbose(&args));

    match run(&args) {
        Ok(report) => {
            print!("{}", report.output);
            if report.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if e.is_no_match() {
                eprintln!("Run 'argroute help' for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> argroute_resolver::Result<Report> {
    let invocation = parse_args(args)?;
    tracing::debug!(command = ?invocation.command, "dispatching");

    let report = match invocation.command {
        Command::Help => Report {
            output: format!("{}\n", help_text()),
            success: true,
        },
        Command::Version => Report {
            output: format!("argroute {}\n", env!("CARGO_PKG_VERSION")),
            success: true,
        },
        Command::Check => {
            let file = invocation.file.unwrap_or_default();
            check(file, invocation.verbose)?
        }
        Command::Explain => {
            let pattern = invocation.pattern.unwrap_or_default();
            explain(&pattern, invocation.verbose)
        }
        Command::Resolve => {
            let file = invocation.file.unwrap_or_default();
            resolve_args(file, &invocation.args, invocation.verbose)?
        }
    };
    Ok(report)
}
