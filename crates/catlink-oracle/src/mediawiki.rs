use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use catlink_core::config::OracleConfig;
use catlink_core::traits::SearchOracle;
use catlink_core::types::SearchResult;

use crate::error::{OracleError, Result};

/// Full-text search against a MediaWiki `api.php` endpoint
/// (`action=query&list=search`). Snippets keep their
/// `<span class="searchmatch">` markup.
pub struct MediaWikiOracle {
    client: Client,
    endpoint: String,
    limit: usize,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<QueryBlock>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct QueryBlock {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

impl MediaWikiOracle {
    pub fn new(config: &OracleConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(OracleError::Transport)?;
        Ok(Self { client, endpoint: config.endpoint.clone(), limit: config.limit, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> OracleError {
        if err.is_timeout() {
            OracleError::Timeout(self.timeout)
        } else {
            OracleError::Transport(err)
        }
    }
}

#[async_trait]
impl SearchOracle for MediaWikiOracle {
    type Error = OracleError;

    async fn search(&self, term: &str) -> Result<Vec<SearchResult>> {
        let limit = self.limit.to_string();
        debug!(endpoint = %self.endpoint, term = %term, "→ search request");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", term),
                ("srlimit", limit.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                OracleError::Timeout(self.timeout)
            } else {
                OracleError::Decode(e.to_string())
            }
        })?;
        if let Some(err) = body.error {
            return Err(OracleError::Decode(format!("{}: {}", err.code, err.info)));
        }
        let query = body.query.ok_or_else(|| OracleError::Decode("missing `query` block".to_string()))?;
        Ok(query
            .search
            .into_iter()
            .map(|hit| SearchResult { title: hit.title, snippet: hit.snippet })
            .collect())
    }
}
