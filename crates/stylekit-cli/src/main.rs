//! `stylekit` command-line interface.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Command};
use output::Output;

/// Environment variable holding the log filter, e.g. `STYLEKIT_LOG=debug`.
const LOG_ENV: &str = "STYLEKIT_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<commands::Outcome> {
    let output = Output::new(cli.output).context("failed to compile output templates")?;
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    match &cli.command {
        Command::Lint(args) => commands::lint(args, &output, &cwd),
        Command::Rules(args) => commands::rules(args, &output, &cwd),
        Command::Check(args) => commands::check(args, &output),
        Command::Render(args) => commands::render(args),
    }
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(outcome) => {
            if !outcome.text.is_empty() {
                println!("{}", outcome.text);
            }
            if outcome.failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
