//! Remote endpoint calls

use crate::config::RemoteConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RemoteResponse};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Candidate list endpoint, relative to the API root
pub const CANDIDATE_LIST_PATH: &str = "candidate/list";

/// Opening detail endpoint, relative to the API root
pub const OPENING_GET_PATH: &str = "opening/get";

/// Opening list endpoint, relative to the API root
pub const OPENING_LIST_PATH: &str = "opening/list";

/// Calls against the hiring platform
#[async_trait]
pub trait HiringApi: Send + Sync {
    /// Every candidate of an opening, as the raw JSON body
    ///
    /// The status code is not checked; callers must cope with a body that
    /// lacks the keys they expect.
    async fn fetch_candidates_by_stage(&self, opening_id: &str, token: &str) -> Result<Value>;

    /// Opening detail (description, stage stats)
    async fn fetch_opening_detail(&self, opening_id: &str, token: &str) -> Result<RemoteResponse>;

    /// All openings visible to the token
    async fn fetch_opening_list(&self, token: &str) -> Result<RemoteResponse>;
}

/// [`HiringApi`] over HTTP
#[derive(Debug, Clone)]
pub struct BaseHiringClient {
    http: HttpClient,
    page_size: String,
}

impl BaseHiringClient {
    /// Build a client from remote settings
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let mut http_config = HttpClientConfig::builder()
            .base_url(&config.base_url)
            .header("Accept", "application/json");
        if let Some(timeout) = config.timeout() {
            http_config = http_config.timeout(timeout);
        }
        let http = HttpClient::with_config(http_config.build())?;

        Ok(Self::with_http(http, config.page_size))
    }

    /// Wrap an existing transport
    pub fn with_http(http: HttpClient, page_size: u32) -> Self {
        Self {
            http,
            page_size: page_size.to_string(),
        }
    }
}

#[async_trait]
impl HiringApi for BaseHiringClient {
    async fn fetch_candidates_by_stage(&self, opening_id: &str, token: &str) -> Result<Value> {
        debug!(opening_id, "fetching candidates");
        self.http
            .post_form_json(
                CANDIDATE_LIST_PATH,
                &[
                    ("access_token", token),
                    ("opening_id", opening_id),
                    ("num_per_page", self.page_size.as_str()),
                ],
            )
            .await
    }

    async fn fetch_opening_detail(&self, opening_id: &str, token: &str) -> Result<RemoteResponse> {
        debug!(opening_id, "fetching opening detail");
        self.http
            .post_form(OPENING_GET_PATH, &[("access_token", token), ("id", opening_id)])
            .await
    }

    async fn fetch_opening_list(&self, token: &str) -> Result<RemoteResponse> {
        debug!("fetching opening list");
        self.http
            .post_form(OPENING_LIST_PATH, &[("access_token", token)])
            .await
    }
}
