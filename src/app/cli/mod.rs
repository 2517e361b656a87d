//! CLI Adapter.

mod pr;

use crate::app::logging;
use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prready")]
#[command(version)]
#[command(about = "Mark draft GitHub pull requests as ready for review", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with pull requests
    Pr {
        #[command(subcommand)]
        command: pr::PrCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Pr { command } => pr::run_pr(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
