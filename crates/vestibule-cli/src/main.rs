use anyhow::Result;
use clap::Parser;

use vestibule_core::Field;

mod commands;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "vestibule", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Registration endpoint URL (overrides config file and environment)
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the interactive registration form
    ///
    /// Opens a full-screen terminal form with four fields:
    ///
    /// - Username: free text, 3 to 20 characters
    /// - Favorite Language: JavaScript or Rust
    /// - Favorite Food: pizza, spaghetti, or broccoli
    /// - Agreement: the terms checkbox
    ///
    /// Each field is validated as you type and shows its error inline;
    /// the Submit button stays disabled until the whole form validates.
    /// Submission POSTs the form as JSON to the configured endpoint and
    /// shows the outcome in the banner at the top: a greeting on success
    /// (the form then resets), or the server's failure message with your
    /// input kept intact for correction.
    ///
    /// Keys: Tab/Down and Shift-Tab/Up move focus, Space and Left/Right
    /// pick options, Enter submits, Esc quits.
    ///
    /// This is the default when no subcommand is given.
    Form,
    /// Validate candidate values without submitting
    ///
    /// Prints one line per field with either `ok` or the same message the
    /// form would show inline, followed by the overall verdict. Omitted
    /// fields are reported with their required message.
    Check {
        /// Candidate username
        #[arg(long)]
        username: Option<String>,

        /// Candidate favorite language
        #[arg(long)]
        fav_language: Option<String>,

        /// Candidate favorite food
        #[arg(long)]
        fav_food: Option<String>,

        /// Whether the terms have been accepted
        #[arg(long)]
        agreement: Option<bool>,

        /// Restrict the report to a single field (wire name, e.g. favFood)
        #[arg(long)]
        only: Option<Field>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, Clone, clap::Subcommand)]
enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Show example configuration
    Example,
    /// Create the config file with defaults
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => commands::run_form(cli.endpoint).await?,
        Commands::Check {
            username,
            fav_language,
            fav_food,
            agreement,
            only,
        } => {
            commands::run_check(username, fav_language, fav_food, agreement, only)?;
        }
        Commands::Config { action } => {
            commands::run_config(cli.endpoint, action.unwrap_or(ConfigAction::Show))?;
        }
    }

    Ok(())
}
