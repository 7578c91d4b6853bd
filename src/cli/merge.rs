//! Merge command - interactively merge one pull request

use crate::cli::{report, require_repo};
use anstream::println;
use ghpr::auth;
use ghpr::console::Console;
use ghpr::error::Result;
use ghpr::merge::{run_merge, MergeArgs};
use ghpr::platform::GitHubService;
use ghpr::style::{self, Stylize};

/// Run the merge command.
pub async fn run(repo: Option<&str>, args: MergeArgs) -> Result<()> {
    let result = merge_action(repo, args).await;

    if let Err(error) = &result {
        report(error);
    }

    result
}

async fn merge_action(repo: Option<&str>, args: MergeArgs) -> Result<()> {
    let repo = require_repo(repo)?;

    let url = repo.web_url();
    println!(
        "{}",
        format!("Merging pull request into {}", style::link(&url, &url)).success()
    );

    // Ask for credentials up front; the flow's first stage verifies them.
    let credentials = auth::prompt_credentials()?;
    let mut client = GitHubService::new(repo, Some(credentials))?;

    let mut console = Console::stdio();
    run_merge(&mut console, &mut client, &args).await?;
    Ok(())
}
