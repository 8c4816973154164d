use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputMode;

/// Lint JSX/TSX sources and work with stylekit component libraries.
#[derive(Debug, Parser)]
#[command(name = "stylekit", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lint source files and directories.
    Lint(LintArgs),
    /// List lint rules and their configured severity.
    Rules(RulesArgs),
    /// Load and validate a component library.
    Check(CheckArgs),
    /// Render a template that calls library components.
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct LintArgs {
    /// Files or directories to lint.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Lint config file (YAML or JSON). Defaults to `stylekit-lint.{yaml,yml,json}`
    /// in the current directory, if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit non-zero when any warning is reported.
    #[arg(long)]
    pub strict: bool,

    /// Run only these rules.
    #[arg(long = "rule", value_name = "ID")]
    pub only: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Show severities and enabled state from this config.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Component library YAML file.
    pub library: PathBuf,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Component library YAML file.
    pub library: PathBuf,

    /// Template file.
    pub template: PathBuf,

    /// JSON file with template variables.
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Fail on undeclared variant values instead of falling back to defaults.
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lint_defaults_to_current_directory() {
        let cli = Cli::parse_from(["stylekit", "lint"]);
        match cli.command {
            Command::Lint(args) => {
                assert_eq!(args.paths, vec![PathBuf::from(".")]);
                assert!(!args.strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.output, OutputMode::Auto);
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::parse_from([
            "stylekit", "lint", "src", "--output", "json", "--strict", "--rule", "require-data-testid",
        ]);
        assert_eq!(cli.output, OutputMode::Json);
        let Command::Lint(args) = cli.command else {
            panic!("expected lint");
        };
        assert!(args.strict);
        assert_eq!(args.only, vec!["require-data-testid"]);
    }
}
