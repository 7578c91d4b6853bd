//! GitHub client seam for the interactive flows
//!
//! The flows talk to the API through `PullRequestClient`, so tests can
//! substitute a recording mock for the real service.

mod github;

pub use github::GitHubService;

use crate::error::{Error, Result};
use crate::types::{
    Account, ListFilter, MergeOutcome, MergeRequest, PullRequestDetails, PullRequestPage, RepoId,
};
use async_trait::async_trait;

/// Remote operations the list and merge flows depend on
///
/// One production implementation (`GitHubService`); the calls are issued
/// strictly one at a time and awaited to completion.
#[async_trait]
pub trait PullRequestClient: Send + Sync {
    /// Fetch one page of pull request summaries matching `filter`.
    ///
    /// Pages are numbered from 1. A page with fewer than `filter.per_page`
    /// items is the last one.
    async fn list_pull_requests(&self, filter: &ListFilter, page: u32) -> Result<PullRequestPage>;

    /// Identify the authenticated account.
    ///
    /// Fails with [`Error::TwoFactorRequired`] when the account is
    /// 2FA-protected and the session carries no one-time password yet.
    async fn current_user(&self) -> Result<Account>;

    /// Fetch one pull request by number.
    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails>;

    /// Merge a pull request. The request is consumed by the call.
    ///
    /// The outcome carries the service's confirmation message.
    async fn merge_pull_request(&self, request: MergeRequest) -> Result<MergeOutcome>;

    /// Attach a one-time password to the session.
    ///
    /// Every subsequent call sends it alongside the basic-auth credentials.
    fn apply_otp(&mut self, otp: &str) -> Result<()>;
}

/// Parse a repository argument into its owner and name.
///
/// Accepts `owner/repo` directly, or any github.com URL form: when the
/// input contains `github.com/`, everything up to and including the first
/// occurrence is stripped first. The remainder must split on `/` into
/// exactly two non-empty parts.
pub fn parse_repo_spec(input: &str) -> Result<RepoId> {
    let spec = match input.find("github.com/") {
        Some(idx) => &input[idx + "github.com/".len()..],
        None => input,
    };

    let parts: Vec<&str> = spec.split('/').collect();
    match parts.as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepoId {
            owner: (*owner).to_string(),
            name: (*name).to_string(),
        }),
        _ => Err(Error::InvalidRepoFormat(input.to_string())),
    }
}
