use anyhow::{Context, Result};
use clap::Parser;
use nextodd_core::{Config, Policy};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "nextodd", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input policy: "coercing" (default) or "strict"
    #[arg(long, global = true)]
    policy: Option<Policy>,

    /// Shorthand for --policy strict
    #[arg(long, global = true, conflicts_with = "policy")]
    strict: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Compute the next odd number for each value
    ///
    /// Each value is read as a literal: "4" is an integer, "2.9" is a float,
    /// and anything else is text. Under the coercing policy floats are
    /// truncated toward zero and text must be a base-10 integer. Under the
    /// strict policy only integers are accepted.
    ///
    /// Output: one "{input} -> {result}" line per value. The command stops
    /// with a non-zero exit status at the first value that cannot be used.
    Compute {
        /// Values to evaluate
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Treat every value as text rather than inferring its type
        #[arg(long)]
        text: bool,
    },
    /// Print the example invocations
    Demo,
    /// Evaluate a JSON array of inputs
    ///
    /// Reads an array such as [3, 4, 2.9, "5"] from FILE (or stdin when FILE
    /// is "-") and prints a JSON array of records, each carrying either a
    /// "result" or an "error". Invalid elements do not stop the batch.
    Batch {
        /// JSON file to read, or "-" for stdin
        file: PathBuf,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn setup_logging(config: &Config) -> Result<()> {
    let opts = config.logging_opts()?;
    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logger: {:?}", e))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let policy = if cli.strict { Some(Policy::Strict) } else { cli.policy };
    let config = Config::load()
        .context("Failed to load configuration")?
        .with_policy(policy);

    setup_logging(&config)?;

    match cli.command {
        Commands::Compute { values, text } => {
            commands::run_compute(config.policy, values, text)?;
        }
        Commands::Demo => {
            commands::run_demo(config.policy)?;
        }
        Commands::Batch { file } => {
            commands::run_batch(config.policy, file)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
