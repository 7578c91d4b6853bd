//! CLI command wiring
//!
//! Argument parsing lives in main; the modules here prepare a client
//! for each command, hand off to the flow in the library crate, and
//! report failures on stderr.

pub mod list;
pub mod merge;

use anstream::eprintln;
use ghpr::error::{Error, Result};
use ghpr::humanize;
use ghpr::platform;
use ghpr::style::Stylize;
use ghpr::types::RepoId;

/// Resolve the repository argument, required by every command.
pub fn require_repo(arg: Option<&str>) -> Result<RepoId> {
    let raw = arg.ok_or(Error::MissingRepo)?;
    platform::parse_repo_spec(raw)
}

/// Print `error` to stderr in the command-line format.
///
/// Rate limiting gets a quota line under the headline so the user can
/// see when the window resets.
pub fn report(error: &Error) {
    match error {
        Error::RateLimited(quota) => {
            eprintln!("{}", "Error: Rate limit exceeded".error());
            eprintln!(
                "rate-limit:{}, remaining:{}, rate-limit resets {}",
                quota.limit,
                quota.remaining,
                humanize::relative(quota.reset)
            );
        }
        Error::GitHubApi(message) => {
            eprintln!("{}", "Error: unhandled api failure".error());
            eprintln!("{}", message.error());
        }
        other => eprintln!("{}", format!("Error: {other}").error()),
    }
}
