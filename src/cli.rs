use std::path::PathBuf;

use clap::{Parser, Subcommand};

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }
}

// Structs

#[derive(Parser, Debug)]
#[command(
    name = "azure-openai-limits",
    version,
    about = "Get context and output limits for Azure OpenAI models"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    //
    // Global args start here..
    //

    //
    /// Read the model table from this JSON file instead of the bundled one.
    #[arg(long, env = "AZURE_OPENAI_LIMITS_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Print compact single-line JSON.
    #[arg(long, default_value_t = false, global = true)]
    pub unformatted: bool,

    /// Log lookups and data loading to stderr.
    #[arg(long, default_value_t = false, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show limits for a specific model.
    Show(ShowArgs),

    /// List all available models and versions.
    List,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Model name (e.g., 'gpt-4o').
    pub model: String,

    /// Model version (e.g., '2024-08-06'). Unknown versions fall back to the default.
    #[arg(long)]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }

    #[test]
    fn show_takes_model_and_version() {
        let cli = Cli::parse_from(["azure-openai-limits", "show", "gpt-4o", "--version", "2024-08-06"]);

        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.model, "gpt-4o");
                assert_eq!(args.version.as_deref(), Some("2024-08-06"));
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["azure-openai-limits", "list", "--unformatted"]);

        assert!(cli.unformatted);
        assert!(matches!(cli.command, Commands::List));
    }
}
