//! Thin async transport for compiled search query documents.
//!
//! Owns the HTTP connection to the search engine and submits
//! [`CompiledQuery`] documents built by `marlin-query`. Deliberately thin:
//! no pooling beyond `reqwest`'s own, no retries, no timeouts — callers
//! layer their own policy on top.
//!
//! # Examples
//!
//! ```rust,no_run
//! use marlin_client::{ClientConfig, SearchClient};
//! use marlin_query::SearchRequest;
//! use serde_json::json;
//!
//! # async fn example() -> marlin_client::Result<()> {
//! let client = SearchClient::new(ClientConfig::resolve(None));
//! let query = SearchRequest::from_value(&json!({ "where": { "user_id": 616 } })).compile();
//! let response = client.execute("observations", "observation", &query).await?;
//! println!("{} hits", response.hits.total);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod response;

pub use config::{ClientConfig, DEFAULT_HOST, HOST_ENV_VAR};
pub use error::{Error, Result};
pub use response::{Hit, Hits, SearchResponse};

use marlin_query::CompiledQuery;
use serde_json::Value;
use tracing::debug;

/// Async client for executing compiled query documents.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client from resolved configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a compiled query against `index`/`doc_type`.
    pub async fn execute(
        &self,
        index: &str,
        doc_type: &str,
        query: &CompiledQuery,
    ) -> Result<SearchResponse> {
        self.execute_raw(index, doc_type, &serde_json::to_value(query)?)
            .await
    }

    /// Execute an arbitrary query document against `index`/`doc_type`.
    pub async fn execute_raw(
        &self,
        index: &str,
        doc_type: &str,
        body: &Value,
    ) -> Result<SearchResponse> {
        let url = format!("{}/{}/{}/_search", self.base_url, index, doc_type);
        debug!(%url, "executing search");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Engine {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }
}
