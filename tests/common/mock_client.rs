//! Mock pull request client for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use ghpr::error::{Error, Result};
use ghpr::platform::PullRequestClient;
use ghpr::types::{
    Account, ListFilter, MergeOutcome, MergeRequest, PullRequestDetails, PullRequestPage,
    RateLimit,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Simple mock client for testing
///
/// This manually implements `PullRequestClient` so response maps and call
/// records stay plain data the tests can poke at directly.
///
/// Features:
/// - Configurable responses per page / PR number
/// - Call tracking for verification
/// - Error injection for failure path testing
/// - A two-factor challenge that holds until a code is applied
#[derive(Default)]
pub struct MockClient {
    // Responses
    account: Mutex<Option<Account>>,
    page_responses: Mutex<HashMap<u32, PullRequestPage>>,
    details_responses: Mutex<HashMap<u64, PullRequestDetails>>,
    merge_responses: Mutex<HashMap<u64, MergeOutcome>>,
    // Two-factor simulation
    requires_otp: Mutex<bool>,
    otp: Mutex<Option<String>>,
    // Call tracking
    current_user_calls: Mutex<u32>,
    list_calls: Mutex<Vec<u32>>,
    details_calls: Mutex<Vec<u64>>,
    merge_calls: Mutex<Vec<MergeRequest>>,
    apply_otp_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
    rate_limit: Mutex<Option<RateLimit>>,
}

impl MockClient {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    // === Response configuration ===

    /// Set the account returned by `current_user`
    pub fn set_account(&self, login: &str) {
        *self.account.lock().unwrap() = Some(Account {
            login: login.to_string(),
        });
    }

    /// Demand a two-factor code: `current_user` fails until `apply_otp` runs
    pub fn require_otp(&self) {
        *self.requires_otp.lock().unwrap() = true;
    }

    /// Set the response for `list_pull_requests` for a specific page
    ///
    /// Unconfigured pages come back empty.
    pub fn set_page_response(&self, page: u32, response: PullRequestPage) {
        self.page_responses.lock().unwrap().insert(page, response);
    }

    /// Set the response for `get_pull_request` for a specific PR
    pub fn set_details_response(&self, number: u64, details: PullRequestDetails) {
        self.details_responses.lock().unwrap().insert(number, details);
    }

    /// Set the response for `merge_pull_request` for a specific PR
    pub fn set_merge_response(&self, number: u64, outcome: MergeOutcome) {
        self.merge_responses.lock().unwrap().insert(number, outcome);
    }

    /// Helper to set up a PR that can be fetched and merged
    pub fn setup_pull_request(&self, number: u64, title: &str, author: &str) {
        self.set_details_response(
            number,
            PullRequestDetails {
                number,
                title: title.to_string(),
                author: author.to_string(),
            },
        );
        self.set_merge_response(
            number,
            MergeOutcome {
                merged: true,
                sha: Some(format!("merged_sha_{number}")),
                message: Some("Pull Request successfully merged".to_string()),
            },
        );
    }

    // === Error injection methods ===

    /// Make `list_pull_requests` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pull_request` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_pull_requests` fail as rate limited with this quota
    pub fn exhaust_rate_limit(&self, quota: RateLimit) {
        *self.rate_limit.lock().unwrap() = Some(quota);
    }

    // === Call verification methods ===

    /// Number of `current_user` calls made
    pub fn current_user_call_count(&self) -> u32 {
        *self.current_user_calls.lock().unwrap()
    }

    /// Pages that `list_pull_requests` was called with, in order
    pub fn get_list_calls(&self) -> Vec<u32> {
        self.list_calls.lock().unwrap().clone()
    }

    /// PR numbers that `get_pull_request` was called with
    pub fn get_details_calls(&self) -> Vec<u64> {
        self.details_calls.lock().unwrap().clone()
    }

    /// Get all `merge_pull_request` calls
    pub fn get_merge_calls(&self) -> Vec<MergeRequest> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Codes passed to `apply_otp`, in order
    pub fn get_apply_otp_calls(&self) -> Vec<String> {
        self.apply_otp_calls.lock().unwrap().clone()
    }

    /// Get count of `merge_pull_request` calls
    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Assert that `merge_pull_request` was called for a specific PR
    pub fn assert_merge_called(&self, number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.number == number),
            "Expected merge_pull_request({number}) but got: {calls:?}"
        );
    }

    /// Assert that `merge_pull_request` was never called
    pub fn assert_merge_not_called(&self) {
        let calls = self.get_merge_calls();
        assert!(
            calls.is_empty(),
            "Expected no merge_pull_request calls but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PullRequestClient for MockClient {
    async fn list_pull_requests(&self, _filter: &ListFilter, page: u32) -> Result<PullRequestPage> {
        self.list_calls.lock().unwrap().push(page);

        // Check for injected errors
        if let Some(quota) = self.rate_limit.lock().unwrap().as_ref() {
            return Err(Error::RateLimited(*quota));
        }
        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.page_responses.lock().unwrap();
        Ok(responses.get(&page).cloned().unwrap_or_default())
    }

    async fn current_user(&self) -> Result<Account> {
        *self.current_user_calls.lock().unwrap() += 1;

        if *self.requires_otp.lock().unwrap() && self.otp.lock().unwrap().is_none() {
            return Err(Error::TwoFactorRequired);
        }

        let account = self.account.lock().unwrap();
        account
            .clone()
            .ok_or_else(|| Error::AuthenticationFailed("Bad credentials".to_string()))
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails> {
        self.details_calls.lock().unwrap().push(number);

        let responses = self.details_responses.lock().unwrap();
        responses.get(&number).cloned().ok_or_else(|| {
            Error::GitHubApi(format!(
                "get_pull_request: no response configured for PR #{number}"
            ))
        })
    }

    async fn merge_pull_request(&self, request: MergeRequest) -> Result<MergeOutcome> {
        let number = request.number;
        self.merge_calls.lock().unwrap().push(request);

        // Check for injected error
        if let Some(msg) = self.error_on_merge.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.merge_responses.lock().unwrap();
        responses.get(&number).cloned().ok_or_else(|| {
            Error::GitHubApi(format!(
                "merge_pull_request: no response configured for PR #{number}"
            ))
        })
    }

    fn apply_otp(&mut self, otp: &str) -> Result<()> {
        self.apply_otp_calls.lock().unwrap().push(otp.to_string());
        *self.otp.lock().unwrap() = Some(otp.to_string());
        Ok(())
    }
}
