//! ghpr CLI entrypoint.

mod cli;

use clap::{CommandFactory, Parser, Subcommand};
use ghpr::error::Error;
use ghpr::types::{MergeMethod, SortKey, StateFilter};
use std::process::ExitCode;

/// Interact with a GitHub repository's pull requests from the terminal.
#[derive(Parser)]
#[command(name = "ghpr")]
#[command(about = "List and merge GitHub pull requests")]
#[command(version)]
struct Cli {
    /// Repository to operate on, as `user/repo` or a github.com URL
    #[arg(short, long, global = true, env = "GHPR_REPO")]
    repo: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pull requests
    List {
        /// Filter by pull request state
        #[arg(long, value_enum, default_value_t = StateFilter::Open)]
        state: StateFilter,

        /// What to sort results by
        #[arg(long, value_enum, default_value_t = SortKey::Created)]
        sort: SortKey,

        /// Amount of results to return per page
        #[arg(
            long = "per-page",
            default_value_t = 30,
            value_parser = clap::value_parser!(u8).range(1..=100)
        )]
        per_page: u8,
    },

    /// Merge a pull request, eg: `ghpr merge 21`
    Merge {
        /// Pull request number; prompted for when omitted
        number: Option<String>,

        /// Merge method to use
        #[arg(long, value_enum)]
        method: Option<MergeMethod>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    ghpr::style::init();
    let args = Cli::parse();

    let result = match args.command {
        Commands::List {
            state,
            sort,
            per_page,
        } => {
            cli::list::run(
                args.repo.as_deref(),
                &ghpr::types::ListFilter {
                    state,
                    sort,
                    per_page,
                },
            )
            .await
        }
        Commands::Merge { number, method } => {
            cli::merge::run(
                args.repo.as_deref(),
                ghpr::merge::MergeArgs { number, method },
            )
            .await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if matches!(error, Error::MissingRepo) {
                let _ = Cli::command().print_help();
            }
            ExitCode::FAILURE
        }
    }
}
