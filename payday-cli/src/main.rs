//! Payday CLI - bills to pay and money to receive, in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod input;
mod logging;
mod output;
mod prompt;

use commands::{list, menu, summary};
use config::Config;

/// Payday - track payables and receivables
#[derive(Parser)]
#[command(name = "payday", version, about, long_about = None)]
struct Cli {
    /// Start with an empty ledger instead of the demo accounts
    #[arg(long, global = true)]
    no_sample_data: bool,

    /// Currency symbol printed before amounts
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Log filter (e.g. "info", "payday_core=debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// List accounts with their status
    List {
        /// Which accounts to show
        #[arg(long, value_enum, default_value = "all")]
        view: list::View,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the financial summary
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env().with_overrides(cli.no_sample_data, cli.currency, cli.log_level);
    logging::init(&config.log_filter);
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run(&config),
        Commands::List { view, json } => list::run(&config, view, json),
        Commands::Summary { json } => summary::run(&config, json),
    }
}
