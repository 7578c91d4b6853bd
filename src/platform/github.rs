//! GitHub client implementation
//!
//! Typed pull-request endpoints go through octocrab; the two protocol-level
//! calls it does not surface (the 2FA challenge on `/user`, the quota
//! envelope on `/rate_limit`) are raw reqwest requests.

use crate::error::{Error, Result};
use crate::platform::PullRequestClient;
use crate::types::{
    Account, Credentials, ListFilter, MergeMethod, MergeOutcome, MergeRequest, PullRequestDetails,
    PullRequestPage, PullRequestSummary, RateLimit, RepoId, SortKey, StateFilter,
};
use async_trait::async_trait;
use chrono::Utc;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default API base for github.com.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// Header carrying the one-time password, and the 2FA challenge marker.
const OTP_HEADER: &str = "x-github-otp";

/// GitHub client holding one session's credentials
pub struct GitHubService {
    client: Octocrab,
    repo: RepoId,
    credentials: Option<Credentials>,
    /// HTTP client for raw requests (2FA detection, quota envelope)
    http_client: Client,
    /// API base URL for raw requests, without a trailing slash
    api_base: String,
}

impl GitHubService {
    /// Create a client against api.github.com.
    ///
    /// `credentials` is `None` for the unauthenticated list session.
    pub fn new(repo: RepoId, credentials: Option<Credentials>) -> Result<Self> {
        Self::with_api_base(repo, credentials, GITHUB_API_BASE)
    }

    /// Create a client against an explicit API base URL.
    pub fn with_api_base(
        repo: RepoId,
        credentials: Option<Credentials>,
        api_base: &str,
    ) -> Result<Self> {
        let api_base = api_base.trim_end_matches('/').to_string();
        let client = build_octocrab(credentials.as_ref(), &api_base)?;

        let http_client = Client::builder()
            .user_agent("ghpr")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            repo,
            credentials,
            http_client,
            api_base,
        })
    }

    /// Start a raw GET request with the standard GitHub headers and the
    /// session's auth attached.
    fn api_get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self
            .http_client
            .get(format!("{}{path}", self.api_base))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        self.with_session_auth(request)
    }

    fn with_session_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let Some(ref credentials) = self.credentials else {
            return request;
        };
        let mut request = request.basic_auth(&credentials.username, Some(&credentials.password));
        if let Some(ref otp) = credentials.otp {
            request = request.header(OTP_HEADER, otp);
        }
        request
    }

    /// Convert an octocrab failure into the domain error, resolving the
    /// quota envelope when the failure is rate limiting.
    async fn map_api_error(&self, err: octocrab::Error) -> Error {
        if is_rate_limit(&err) {
            return self.rate_limit_exhausted().await;
        }
        Error::GitHubApi(err.to_string())
    }

    /// Build the rate-limited error, with the quota envelope when the
    /// (quota-exempt) `/rate_limit` endpoint can supply one.
    async fn rate_limit_exhausted(&self) -> Error {
        match self.fetch_rate_limit().await {
            Ok(rate) => Error::RateLimited(rate),
            Err(err) => err,
        }
    }

    /// Fetch the current quota envelope.
    pub async fn fetch_rate_limit(&self) -> Result<RateLimit> {
        #[derive(Deserialize)]
        struct RateLimitResponse {
            rate: RateLimit,
        }

        debug!("fetching rate limit quota");
        let response = self
            .api_get("/rate_limit")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch rate limit: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "rate limit endpoint returned {}",
                response.status()
            )));
        }

        let parsed: RateLimitResponse = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse rate limit: {e}")))?;

        debug!(
            limit = parsed.rate.limit,
            remaining = parsed.rate.remaining,
            "fetched rate limit quota"
        );
        Ok(parsed.rate)
    }
}

/// Build an octocrab client carrying the session's basic auth and, once
/// known, the one-time password header.
fn build_octocrab(credentials: Option<&Credentials>, api_base: &str) -> Result<Octocrab> {
    let mut builder = Octocrab::builder()
        .base_uri(api_base)
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    if let Some(credentials) = credentials {
        builder = builder.basic_auth(credentials.username.clone(), credentials.password.clone());
        if let Some(ref otp) = credentials.otp {
            builder = builder.add_header(
                reqwest::header::HeaderName::from_static(OTP_HEADER),
                otp.clone(),
            );
        }
    }

    builder.build().map_err(|e| Error::GitHubApi(e.to_string()))
}

/// Whether an octocrab failure is GitHub refusing the call over quota.
fn is_rate_limit(err: &octocrab::Error) -> bool {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            source.status_code.as_u16() == 429
                || (source.status_code.as_u16() == 403
                    && source.message.to_lowercase().contains("rate limit"))
        }
        _ => false,
    }
}

/// Extract a page number from a pagination link URI.
fn page_from_link<U: std::fmt::Display>(uri: &U) -> Option<u32> {
    url::Url::parse(&uri.to_string())
        .ok()?
        .query_pairs()
        .find_map(|(key, value)| (key == "page").then_some(value))
        .and_then(|value| value.parse().ok())
}

/// Pull the service's error message out of a raw response body.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| status.to_string(), ToString::to_string),
        Err(_) => status.to_string(),
    }
}

const fn state_param(state: StateFilter) -> octocrab::params::State {
    match state {
        StateFilter::Open => octocrab::params::State::Open,
        StateFilter::Closed => octocrab::params::State::Closed,
        StateFilter::All => octocrab::params::State::All,
    }
}

const fn sort_param(sort: SortKey) -> octocrab::params::pulls::Sort {
    match sort {
        SortKey::Created => octocrab::params::pulls::Sort::Created,
        SortKey::Updated => octocrab::params::pulls::Sort::Updated,
        SortKey::Popularity => octocrab::params::pulls::Sort::Popularity,
        SortKey::LongRunning => octocrab::params::pulls::Sort::LongRunning,
    }
}

const fn merge_method_param(method: MergeMethod) -> octocrab::params::pulls::MergeMethod {
    match method {
        MergeMethod::Merge => octocrab::params::pulls::MergeMethod::Merge,
        MergeMethod::Squash => octocrab::params::pulls::MergeMethod::Squash,
        MergeMethod::Rebase => octocrab::params::pulls::MergeMethod::Rebase,
    }
}

/// Helper to convert an octocrab PR to a listing summary
fn summary_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequestSummary {
    PullRequestSummary {
        number: pr.number,
        title: pr.title.as_deref().unwrap_or_default().to_string(),
        author: pr
            .user
            .as_ref()
            .map(|user| user.login.clone())
            .unwrap_or_default(),
        updated_at: pr.updated_at.or(pr.created_at).unwrap_or_else(Utc::now),
    }
}

#[async_trait]
impl PullRequestClient for GitHubService {
    async fn list_pull_requests(&self, filter: &ListFilter, page: u32) -> Result<PullRequestPage> {
        debug!(page, per_page = filter.per_page, "listing pull requests");

        let fetched = match self
            .client
            .pulls(&self.repo.owner, &self.repo.name)
            .list()
            .state(state_param(filter.state))
            .sort(sort_param(filter.sort))
            .per_page(filter.per_page)
            .page(page)
            .send()
            .await
        {
            Ok(fetched) => fetched,
            Err(err) => return Err(self.map_api_error(err).await),
        };

        let last_page = fetched.last.as_ref().and_then(page_from_link);
        let items: Vec<PullRequestSummary> =
            fetched.items.iter().map(summary_from_octocrab).collect();

        debug!(count = items.len(), ?last_page, "listed pull requests");
        Ok(PullRequestPage { items, last_page })
    }

    async fn current_user(&self) -> Result<Account> {
        debug!("fetching authenticated user");

        let response = self
            .api_get("/user")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch user: {e}")))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            // A 2FA-protected account answers 401 with an x-github-otp
            // challenge header until the code is supplied.
            let challenged = response
                .headers()
                .get(OTP_HEADER)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("required"));
            if challenged {
                debug!("two-factor challenge received");
                return Err(Error::TwoFactorRequired);
            }
            return Err(Error::AuthenticationFailed(error_message(response).await));
        }

        if !response.status().is_success() {
            return Err(Error::GitHubApi(error_message(response).await));
        }

        let account: Account = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse user: {e}")))?;

        debug!(login = %account.login, "fetched authenticated user");
        Ok(account)
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails> {
        debug!(number, "getting pull request");

        let pr = match self
            .client
            .pulls(&self.repo.owner, &self.repo.name)
            .get(number)
            .await
        {
            Ok(pr) => pr,
            Err(err) => return Err(self.map_api_error(err).await),
        };

        let details = PullRequestDetails {
            number: pr.number,
            title: pr.title.clone().unwrap_or_default(),
            author: pr
                .user
                .as_ref()
                .map(|user| user.login.clone())
                .unwrap_or_default(),
        };

        debug!(number, "got pull request");
        Ok(details)
    }

    async fn merge_pull_request(&self, request: MergeRequest) -> Result<MergeOutcome> {
        debug!(
            number = request.number,
            method = ?request.method,
            "merging pull request"
        );

        let pulls = self.client.pulls(&self.repo.owner, &self.repo.name);
        let mut builder = pulls.merge(request.number);
        if !request.message.is_empty() {
            builder = builder.message(&request.message);
        }
        if let Some(method) = request.method {
            builder = builder.method(merge_method_param(method));
        }

        let result = match builder.send().await {
            Ok(result) => result,
            Err(err) => return Err(self.map_api_error(err).await),
        };

        let outcome = MergeOutcome {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            number = request.number,
            merged = outcome.merged,
            "merge complete"
        );
        Ok(outcome)
    }

    fn apply_otp(&mut self, otp: &str) -> Result<()> {
        let Some(credentials) = self.credentials.as_mut() else {
            return Err(Error::AuthenticationFailed(
                "no credentials in session".to_string(),
            ));
        };
        credentials.otp = Some(otp.to_string());
        self.client = build_octocrab(self.credentials.as_ref(), &self.api_base)?;
        debug!("one-time password attached to session");
        Ok(())
    }
}
