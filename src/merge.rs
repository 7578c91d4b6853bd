//! Interactive merge flow
//!
//! The flow is a small state machine, one stage per user-visible step.
//! Each stage either yields the next stage or ends the session, so the
//! order of prompts and API calls is fixed in one place.

use crate::console::Console;
use crate::error::{Error, Result};
use crate::platform::PullRequestClient;
use crate::style::Stylize;
use crate::types::{Account, MergeMethod, MergeRequest, PullRequestDetails};
use std::io::{BufRead, Write};
use tracing::debug;

/// Target and method for one merge session.
#[derive(Debug, Clone, Default)]
pub struct MergeArgs {
    /// Pull request number as given on the command line; prompted for
    /// when absent.
    pub number: Option<String>,
    /// Merge method; `None` lets the service apply its default.
    pub method: Option<MergeMethod>,
}

/// How a merge session ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeCompletion {
    /// The merge was submitted and acknowledged.
    Merged,
    /// The user declined at the confirmation step.
    Aborted,
}

/// Stages of the merge flow, in order.
enum MergeStage {
    Authenticate,
    ResolveTarget,
    Fetch { number: u64 },
    Confirm { details: PullRequestDetails },
    Compose { details: PullRequestDetails },
    Execute { request: MergeRequest },
}

/// Drive a merge session from authentication through execution.
///
/// Declining the confirmation is a normal completion, not an error.
#[allow(clippy::future_not_send)]
pub async fn run_merge<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &mut dyn PullRequestClient,
    args: &MergeArgs,
) -> Result<MergeCompletion> {
    let mut stage = MergeStage::Authenticate;

    loop {
        stage = match stage {
            MergeStage::Authenticate => {
                let account = authenticate(console, client).await?;
                debug!(login = %account.login, "authenticated");
                console.line(format!("Authenticated as {}.", account.login).muted())?;
                MergeStage::ResolveTarget
            }
            MergeStage::ResolveTarget => {
                let number = resolve_target(console, args.number.as_deref())?;
                MergeStage::Fetch { number }
            }
            MergeStage::Fetch { number } => {
                let details = client.get_pull_request(number).await?;
                MergeStage::Confirm { details }
            }
            MergeStage::Confirm { details } => {
                if confirm_merge(console, &details)? {
                    MergeStage::Compose { details }
                } else {
                    console.line("Aborting merge.")?;
                    return Ok(MergeCompletion::Aborted);
                }
            }
            MergeStage::Compose { details } => {
                console.line("Please enter a commit message for the merge (or leave blank):")?;
                let message = console.read_commit_message()?;
                MergeStage::Execute {
                    request: MergeRequest {
                        number: details.number,
                        message,
                        method: args.method,
                    },
                }
            }
            MergeStage::Execute { request } => {
                let outcome = client.merge_pull_request(request).await?;
                console.line(outcome.message.unwrap_or_default())?;
                return Ok(MergeCompletion::Merged);
            }
        };
    }
}

/// Establish the authenticated session.
///
/// On a two-factor challenge, prompt once for a code, attach it, and
/// retry the identity call exactly once. Any further failure is fatal.
async fn authenticate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    client: &mut dyn PullRequestClient,
) -> Result<Account> {
    match client.current_user().await {
        Err(Error::TwoFactorRequired) => {
            let otp = console.prompt("\nGitHub OTP: ")?;
            client.apply_otp(otp.trim())?;
            client.current_user().await
        }
        result => result,
    }
}

/// Resolve the pull request number from the argument or by prompting.
///
/// The prompt loops until a non-blank line arrives; a value that then
/// fails to parse is fatal rather than re-prompted.
fn resolve_target<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    arg: Option<&str>,
) -> Result<u64> {
    let raw = match arg {
        Some(value) => value.to_string(),
        None => console.prompt_nonempty("Enter the pull request number to merge: ")?,
    };
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| Error::InvalidPullNumber(trimmed.to_string()))
}

fn confirm_merge<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    details: &PullRequestDetails,
) -> Result<bool> {
    console.confirm(&format!(
        "Merge #{} {} by {}? [y/n] ",
        details.number,
        details.title.emphasis(),
        details.author
    ))
}
