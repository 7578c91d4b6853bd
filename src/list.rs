//! Pull request listing
//!
//! Pages through a repository's pull requests one fetch at a time,
//! pausing for Enter between pages.

use crate::console::Console;
use crate::error::Result;
use crate::humanize;
use crate::platform::PullRequestClient;
use crate::style::{self, Stylize};
use crate::types::{ListFilter, PullRequestSummary, RepoId};
use std::io::{BufRead, Write};

/// Run the listing loop against `client`, printing through `console`.
///
/// Stops at the first page with zero items or fewer than
/// `filter.per_page`; an empty first page prints `No results.` instead.
#[allow(clippy::future_not_send)]
pub async fn run_list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &dyn PullRequestClient,
    repo: &RepoId,
    filter: &ListFilter,
) -> Result<()> {
    let url = repo.web_url();
    console.line(format!("Listing pull requests for {}", style::link(&url, &url)).success())?;

    for page in 1u32.. {
        let fetched = client.list_pull_requests(filter, page).await?;

        for pr in &fetched.items {
            console.line(render_summary(pr))?;
        }

        // A short or empty page is the last one.
        if fetched.items.is_empty() || fetched.items.len() != usize::from(filter.per_page) {
            if fetched.items.is_empty() && page == 1 {
                console.line("No results.")?;
            }
            break;
        }

        // More pages coming. Give the user a chance to bail out first.
        let progress = match fetched.last_page {
            Some(last) => format!("Page {page} of {last}..."),
            None => format!("Page {page}..."),
        };
        console.print(progress.muted())?;
        console.wait_for_enter()?;
    }

    Ok(())
}

fn render_summary(pr: &PullRequestSummary) -> String {
    format!(
        "#{} {} by {} Last Updated {}",
        pr.number,
        pr.title.emphasis(),
        pr.author,
        humanize::relative(pr.updated_at)
    )
}
