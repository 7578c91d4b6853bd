//! Core types for ghpr

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoId {
    /// Web URL for the repository, with a trailing slash.
    pub fn web_url(&self) -> String {
        format!("https://github.com/{}/{}/", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Basic-auth credentials for one merge session
///
/// Held in memory only for the lifetime of the session. The one-time
/// password is filled in lazily when the account turns out to be
/// 2FA-protected.
#[derive(Clone)]
pub struct Credentials {
    /// Account login name
    pub username: String,
    /// Account password
    pub password: String,
    /// One-time password for 2FA-protected accounts
    pub otp: Option<String>,
}

// Secrets stay out of debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("otp", &self.otp.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// =============================================================================
// Listing types (for ghpr list command)
// =============================================================================

/// PR state filter for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StateFilter {
    /// Only open PRs
    Open,
    /// Only closed PRs
    Closed,
    /// All PRs regardless of state
    All,
}

impl std::fmt::Display for StateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Sort order for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// By creation time
    Created,
    /// By last update time
    Updated,
    /// By comment count
    Popularity,
    /// Oldest open PRs with recent activity first
    LongRunning,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Popularity => write!(f, "popularity"),
            Self::LongRunning => write!(f, "long-running"),
        }
    }
}

/// Filter and page-size settings for one listing session
#[derive(Debug, Clone, Copy)]
pub struct ListFilter {
    /// State filter
    pub state: StateFilter,
    /// Sort order
    pub sort: SortKey,
    /// Items per page (1..=100)
    pub per_page: u8,
}

/// One pull request line in a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestSummary {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Login of the PR author
    pub author: String,
    /// When the PR was last updated
    pub updated_at: DateTime<Utc>,
}

/// One page of pull request summaries
#[derive(Debug, Clone, Default)]
pub struct PullRequestPage {
    /// Summaries in the order the service returned them
    pub items: Vec<PullRequestSummary>,
    /// Last page number, when the response's pagination metadata names one
    pub last_page: Option<u32>,
}

// =============================================================================
// Merge types (for ghpr merge command)
// =============================================================================

/// The authenticated account, as reported by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account login name
    pub login: String,
}

/// PR details shown at the merge confirmation step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Login of the PR author
    pub author: String,
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MergeMethod {
    /// Create a merge commit
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto base branch
    Rebase,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

/// Everything the merge call needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// PR number to merge
    pub number: u64,
    /// Commit message ("" lets the service compose one)
    pub message: String,
    /// Merge method (None lets the service apply its default)
    pub method: Option<MergeMethod>,
}

/// Result of a merge operation
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Whether the merge was successful
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Confirmation message from the merge operation
    pub message: Option<String>,
}

// =============================================================================
// Rate limiting
// =============================================================================

/// Quota envelope reported when the API rate limit is exhausted
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimit {
    /// Requests allowed per window
    pub limit: u32,
    /// Requests remaining in the current window
    pub remaining: u32,
    /// When the current window resets
    #[serde(with = "chrono::serde::ts_seconds")]
    pub reset: DateTime<Utc>,
}
