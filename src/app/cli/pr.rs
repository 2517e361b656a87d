//! Pull request command implementation.

use clap::Subcommand;

use crate::app::api::{self, PrReadyOptions, ReadyOutcome};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum PrCommands {
    /// Mark a draft pull request as ready for review
    Ready {
        /// Pull request number, URL, or branch (default: current branch)
        selector: Option<String>,
        /// Base repository in OWNER/REPO form
        #[arg(short = 'R', long)]
        repo: Option<String>,
    },
}

pub fn run_pr(command: PrCommands) -> Result<(), AppError> {
    match command {
        PrCommands::Ready { selector, repo } => run_ready(selector, repo),
    }
}

fn run_ready(selector: Option<String>, repo: Option<String>) -> Result<(), AppError> {
    let outcome = api::pr_ready(PrReadyOptions { selector, repo })?;
    match outcome {
        ReadyOutcome::Marked { .. } => eprintln!("✅ {}", outcome.status_line()),
        ReadyOutcome::AlreadyReady { .. } => eprintln!("⚠️ {}", outcome.status_line()),
    }
    Ok(())
}
