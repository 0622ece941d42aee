use std::collections::HashMap;
use std::convert::Infallible;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;

use catlink_core::traits::SearchOracle;
use catlink_core::types::SearchResult;

/// In-memory oracle keyed by exact search term. Unknown terms have no results.
///
/// The JSON form is an object mapping each term to its ranked results:
/// `{"Marie Curie": [{"title": "Marie Curie", "snippet": "..."}]}`.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    responses: HashMap<String, Vec<SearchResult>>,
}

impl StaticOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, term: impl Into<String>, results: Vec<SearchResult>) -> Self {
        self.responses.insert(term.into(), results);
        self
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let responses: HashMap<String, Vec<SearchResult>> =
            serde_json::from_str(json).context("fixture oracle JSON must map terms to result lists")?;
        Ok(Self { responses })
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read fixtures {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[async_trait]
impl SearchOracle for StaticOracle {
    type Error = Infallible;

    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, Infallible> {
        Ok(self.responses.get(term).cloned().unwrap_or_default())
    }
}
