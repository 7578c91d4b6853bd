//! Shared fixtures for the test suites

#![allow(dead_code)]

pub mod mock_client;

pub use mock_client::MockClient;

use chrono::{Duration, Utc};
use ghpr::types::{
    ListFilter, PullRequestPage, PullRequestSummary, RateLimit, RepoId, SortKey, StateFilter,
};

/// The repository most tests run against
pub fn test_repo() -> RepoId {
    RepoId {
        owner: "octo".to_string(),
        name: "repo".to_string(),
    }
}

/// Default listing settings: open PRs, creation order, 30 per page
pub fn default_filter() -> ListFilter {
    ListFilter {
        state: StateFilter::Open,
        sort: SortKey::Created,
        per_page: 30,
    }
}

/// A summary last updated `hours_ago` hours in the past
pub fn make_summary(number: u64, title: &str, author: &str, hours_ago: i64) -> PullRequestSummary {
    PullRequestSummary {
        number,
        title: title.to_string(),
        author: author.to_string(),
        updated_at: Utc::now() - Duration::hours(hours_ago),
    }
}

/// A page of `count` summaries numbered upward from `start`
pub fn make_page(start: u64, count: u64, last_page: Option<u32>) -> PullRequestPage {
    PullRequestPage {
        items: (0..count)
            .map(|i| make_summary(start + i, &format!("Change {}", start + i), "alice", 2))
            .collect(),
        last_page,
    }
}

/// An exhausted quota envelope resetting one hour from now
pub fn exhausted_quota() -> RateLimit {
    RateLimit {
        limit: 60,
        remaining: 0,
        reset: Utc::now() + Duration::hours(1),
    }
}
