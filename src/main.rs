use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use argfold::config::Config;
use argfold::logging::init_tracing;
use argfold::report::{build_context, run, Recorder, Report};

const RESOLVE_FAILED_EXIT_CODE: u8 = 2;

/// Resolve flags and parsers declared in a config file against TOKENS.
#[derive(Debug, Parser)]
#[command(name = "argfold", version, about)]
struct Cli {
    /// Config file (default: ~/.config/argfold/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Tokens to resolve, usually after `--`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    let recorder = Recorder::new();
    let context = build_context(&config, &recorder).context("building resolution context")?;

    match run(&context, &recorder, &cli.tokens) {
        Ok(report) => {
            print_report(&report, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(ExitCode::from(RESOLVE_FAILED_EXIT_CODE))
        }
    }
}

fn print_report(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for hit in &report.flags {
        println!("{}\t{}", hit.name, hit.values.join(" "));
    }
    if !report.leftover.is_empty() {
        println!("--\t{}", report.leftover.join(" "));
    }
    Ok(())
}
