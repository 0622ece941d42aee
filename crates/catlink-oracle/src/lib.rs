//! Search oracle adapters.
//!
//! `lookup` is the boundary the pipeline calls: whatever the oracle reports,
//! a failure comes back as an empty candidate list so one bad query never
//! holds up its siblings.

use tracing::{debug, warn};

use catlink_core::traits::SearchOracle;
use catlink_core::types::SearchResult;

pub mod error;
pub mod fixture;
pub mod mediawiki;

pub use error::OracleError;
pub use fixture::StaticOracle;
pub use mediawiki::MediaWikiOracle;

pub async fn lookup<O: SearchOracle + ?Sized>(oracle: &O, term: &str) -> Vec<SearchResult> {
    match oracle.search(term).await {
        Ok(results) => {
            debug!(term = %term, count = results.len(), "oracle results");
            results
        }
        Err(err) => {
            warn!(term = %term, error = %err, "oracle query failed, treating as no results");
            Vec::new()
        }
    }
}
