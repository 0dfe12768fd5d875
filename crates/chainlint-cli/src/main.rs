//! Command-line driver for chainlint

mod logger;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use chainlint::{LintConfig, Linter, Report};

#[derive(Parser)]
#[command(name = "chainlint", version, about = "Ordering lint for UI modifier chains")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lint one or more source files
    Check {
        /// Files to lint
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Exit non-zero on warnings as well as errors
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Lint a single chain expression given on the command line
    Expr {
        /// The chain, e.g. 'Modifier.padding(8).background(color)'
        chain: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print the modifier registry
    Modifiers,

    /// Interactive session: type a chain, get diagnostics
    Repl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let linter = match &cli.config {
        Some(path) => {
            let config = LintConfig::from_file(path)
                .with_context(|| format!("loading config `{}`", path.display()))?;
            debug!(config = %path.display(), "loaded configuration");
            Linter::from_config(&config)
        }
        None => Linter::new(),
    };

    match cli.command {
        Command::Check {
            paths,
            format,
            deny_warnings,
        } => check(&linter, &paths, format, deny_warnings),
        Command::Expr { chain, format } => expr(&linter, &chain, format),
        Command::Modifiers => {
            modifiers(&linter);
            Ok(ExitCode::SUCCESS)
        }
        Command::Repl => {
            repl::run(&linter)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(
    linter: &Linter,
    paths: &[PathBuf],
    format: Format,
    deny_warnings: bool,
) -> Result<ExitCode> {
    let mut total = Report::new();

    for path in paths {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading `{}`", path.display()))?;
        let report = linter
            .lint_source(&source, &path.display().to_string())
            .with_context(|| format!("linting `{}`", path.display()))?;
        total.merge(report);
    }

    emit(linter, &total, format)?;
    Ok(exit_code(&total, deny_warnings))
}

fn expr(linter: &Linter, chain: &str, format: Format) -> Result<ExitCode> {
    let report = linter.lint_expr(chain)?;
    emit(linter, &report, format)?;
    Ok(exit_code(&report, false))
}

fn emit(linter: &Linter, report: &Report, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for diag in &report.diagnostics {
                println!("{}", linter.frontend().format_diagnostic(diag));
            }
            println!(
                "{} chain{} checked: {} finding{}",
                report.chains,
                if report.chains == 1 { "" } else { "s" },
                report.diagnostics.len(),
                if report.diagnostics.len() == 1 { "" } else { "s" },
            );
        }
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn exit_code(report: &Report, deny_warnings: bool) -> ExitCode {
    if failed(report, deny_warnings) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn failed(report: &Report, deny_warnings: bool) -> bool {
    report.has_errors() || (deny_warnings && report.has_warnings())
}

fn modifiers(linter: &Linter) {
    let mut current = None;
    for (name, info) in linter.registry().snapshot() {
        if current != Some(info.category) {
            println!("[{}]", info.category);
            current = Some(info.category);
        }
        if info.repeatable {
            println!("  {}", name);
        } else {
            println!("  {} (one-shot)", name);
        }
    }
}
