//! Search collaborator client: the only place that talks to the remote job-matching API.
//!
//! The remote API is opaque. We POST `{"query": ...}` and expect
//! `{"similarJobs": [...]}` back. Any non-2xx status is a generic failure; the
//! error body is never parsed.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::posting::JobPosting;

pub mod sample;

pub const DEFAULT_SEARCH_API_URL: &str = "http://127.0.0.1:8000/api/search";

/// A failed search. The `Display` text is what the page shows the user.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to fetch search results")]
    Status { status: u16 },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// The search collaborator seam. `AppState` carries an `Arc<dyn SearchCollaborator>`,
/// so the HTTP client, the offline sample backend and test doubles are interchangeable.
#[async_trait]
pub trait SearchCollaborator: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, SearchError>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "similarJobs")]
    similar_jobs: Vec<JobPosting>,
}

/// HTTP client for the remote search API. No timeout and no retries: a hung request
/// simply never resolves.
#[derive(Clone)]
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchCollaborator for HttpSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, SearchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search API returned {status} for query {query:?}");
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        debug!(
            "Search for {query:?} returned {} postings",
            parsed.similar_jobs.len()
        );

        Ok(parsed.similar_jobs)
    }
}
