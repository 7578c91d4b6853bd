//! Error types for ghpr

use crate::types::RateLimit;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All the ways a ghpr command can fail
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository input was not `owner/repo` or a github.com URL
    #[error("Bad repository supplied. Should be of format `user/repo`")]
    InvalidRepoFormat(String),

    /// No repository was supplied via `--repo` or `GHPR_REPO`
    #[error("The --repo flag is required")]
    MissingRepo,

    /// The API rate limit is exhausted
    #[error("Rate limit exceeded")]
    RateLimited(RateLimit),

    /// The account is 2FA-protected and no one-time password was sent
    #[error("two-factor authentication code required")]
    TwoFactorRequired,

    /// The service rejected the supplied credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The merge target could not be parsed as a pull request number
    #[error("{0} is not a valid pull request number.")]
    InvalidPullNumber(String),

    /// Any other GitHub API failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Console read or write failure
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error carries the rate-limit quota envelope.
    pub const fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}
