//! Orchids Terminal Entry Point

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use orchid_core::{AppConfig, AppContext, DomainResult};
use rolling_logger::LevelFilter;

#[derive(Parser)]
#[command(name = "orchids", version, about = "Browse the orchid catalog and keep a list of favorites")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at info level on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the catalog by category
    List,
    /// List favorites in the order they were added
    Favorites,
    /// Show one orchid's details
    Show { name: String },
    /// Add or remove an orchid from favorites
    Toggle { name: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> DomainResult<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose { LevelFilter::INFO } else { LevelFilter::WARN };
    if let Err(e) = rolling_logger::init_logger_with_level(config.log_dir(), "orchids", level) {
        eprintln!("Logging disabled: {}", e);
    }
    log::info!("Starting with catalog {}", config.api_url);

    let ctx = AppContext::init(config).await?;
    let result = commands::execute(&ctx, &cli.command).await;

    // Pending favorite writes must land before the process exits
    if let Err(e) = ctx.shutdown().await {
        let _ = rolling_logger::error(&format!("Favorites were not saved: {}", e));
        eprintln!("warning: favorites were not saved: {}", e);
    }

    println!("{}", result?);
    Ok(())
}
