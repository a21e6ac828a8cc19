//! HTTP client for the analytics backend.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::{ApiClientError, Result};
use crate::models::{LoginAck, PortfolioSnapshot, UserProfile};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Backend API surface, as a trait so services can be tested against mocks.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Syncs the identity-provider profile with the backend user table.
    async fn login(&self, profile: &UserProfile) -> Result<LoginAck>;

    /// Fetches the latest snapshot for the bearer token's user.
    ///
    /// Returns `Ok(None)` when the backend has no snapshot yet (the user has
    /// not uploaded a statement); `Err` on transport or status failures so
    /// the caller can run its cache fallback.
    async fn fetch_portfolio(&self, id_token: &str) -> Result<Option<PortfolioSnapshot>>;
}

/// Reqwest-backed client for the FundLens backend.
#[derive(Clone)]
pub struct PortfolioApiClient {
    client: Client,
    base_url: String,
}

impl PortfolioApiClient {
    /// Create a client against the given base URL (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PortfolioApi for PortfolioApiClient {
    async fn login(&self, profile: &UserProfile) -> Result<LoginAck> {
        let url = self.endpoint("/auth/login");
        debug!("Syncing login for {}", profile.email);

        let response = self.client.post(&url).json(profile).send().await?;

        if !response.status().is_success() {
            return Err(ApiClientError::Status {
                code: response.status().as_u16(),
            });
        }

        response
            .json::<LoginAck>()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    async fn fetch_portfolio(&self, id_token: &str) -> Result<Option<PortfolioSnapshot>> {
        let url = self.endpoint("/portfolio/");
        debug!("Fetching portfolio snapshot");

        let response = self
            .client
            .get(&url)
            .bearer_auth(id_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiClientError::Status {
                code: response.status().as_u16(),
            });
        }

        // The backend answers 200 with JSON `null` when the user exists but
        // has no snapshot yet.
        response
            .json::<Option<PortfolioSnapshot>>()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))
    }
}
