//! List command - page through a repository's pull requests

use crate::cli::{report, require_repo};
use anstream::eprintln;
use ghpr::console::Console;
use ghpr::error::Result;
use ghpr::list::run_list;
use ghpr::platform::GitHubService;
use ghpr::types::ListFilter;

/// Run the list command.
///
/// Listing is unauthenticated, so a rate-limit failure also prints the
/// per-hour quota hints.
pub async fn run(repo: Option<&str>, filter: &ListFilter) -> Result<()> {
    let result = list_action(repo, filter).await;

    if let Err(error) = &result {
        report(error);
        if error.is_rate_limit() {
            eprintln!("Unauthenticated users are limited to 60 requests per hour");
            eprintln!("Authenticated users get 5000 requests an hour");
        }
    }

    result
}

async fn list_action(repo: Option<&str>, filter: &ListFilter) -> Result<()> {
    let repo = require_repo(repo)?;
    let client = GitHubService::new(repo.clone(), None)?;
    let mut console = Console::stdio();
    run_list(&mut console, &client, &repo, filter).await
}
