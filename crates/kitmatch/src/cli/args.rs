//! Clap argument definitions for the `kitmatch` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use kitmatch_config::StrategyKind;

/// Parses a strategy name from the command line.
fn parse_strategy(s: &str) -> Result<StrategyKind, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "kitmatch")]
#[command(about = "Recommend rental equipment kits from a free-text description")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared catalog selection flag.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// CSV catalog to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// Arguments for `kitmatch recommend`.
#[derive(Args, Debug, Clone)]
pub struct RecommendCommand {
    /// What the kit is for, e.g. "vlog outdoor murah"
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Number of kits to return [default: 3]
    #[arg(short = 'n', long = "top-k")]
    pub top_k: Option<usize>,

    /// Rental budget; 0 means no limit
    #[arg(short = 'b', long, default_value = "0")]
    pub budget: i64,

    /// Scoring strategy: tags or corpus [default: tags]
    #[arg(short = 's', long, value_parser = parse_strategy)]
    pub strategy: Option<StrategyKind>,

    /// Also show tokens and the extracted preference
    #[arg(long)]
    pub explain: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Catalog override.
    pub catalog: CatalogArgs,
}

impl RecommendCommand {
    /// Returns the request text with arguments joined by spaces.
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for `kitmatch parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Text to analyze
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl ParseCommand {
    /// Returns the text with arguments joined by spaces.
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for `kitmatch catalog`.
#[derive(Args, Debug, Clone)]
pub struct CatalogCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    /// Catalog override.
    pub catalog: CatalogArgs,
}

/// Arguments for `kitmatch init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.kitmatch.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `kitmatch check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    #[command(flatten)]
    /// Catalog override.
    pub catalog: CatalogArgs,
}

/// Supported `kitmatch` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog kits for a request
    #[command(after_help = "\
EXAMPLES:
  kitmatch recommend vlog outdoor murah
  kitmatch recommend podcast studio audio bagus -n 5
  kitmatch recommend wedding cinematic -b 800 -s corpus
  kitmatch recommend 'tutorial indoor, pemula' --explain")]
    Recommend(RecommendCommand),

    /// Show how a request is tokenized and understood
    Parse(ParseCommand),

    /// List the equipment catalog
    Catalog(CatalogCommand),

    /// Initialize kitmatch configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and catalog
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use kitmatch_config::Settings;

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    /// Catches drift between the settings defaults and the help text.
    #[test]
    fn help_defaults_match_settings() {
        let cmd = Cli::command();
        let defaults = Settings::default();

        let top_k_help = get_arg_help(&cmd, "recommend", "top_k");
        assert!(
            top_k_help.contains(&format!("[default: {}]", defaults.top_k)),
            "recommend --top-k help should contain default {}: {top_k_help}",
            defaults.top_k
        );

        let strategy_help = get_arg_help(&cmd, "recommend", "strategy");
        assert!(
            strategy_help.contains(&format!("[default: {}]", defaults.strategy)),
            "recommend --strategy help should contain default {}: {strategy_help}",
            defaults.strategy
        );
    }

    #[test]
    fn recommend_joins_text_and_parses_flags() {
        let cli = Cli::try_parse_from([
            "kitmatch", "-v", "recommend", "vlog", "outdoor", "-b", "300", "-s", "corpus",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Recommend(cmd) = cli.command else {
            panic!("expected recommend");
        };
        assert_eq!(cmd.text(), "vlog outdoor");
        assert_eq!(cmd.budget, 300);
        assert_eq!(cmd.strategy, Some(StrategyKind::Corpus));
        assert!(cmd.top_k.is_none());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let result = Cli::try_parse_from(["kitmatch", "recommend", "vlog", "-s", "bm25"]);
        assert!(result.is_err());
    }
}
