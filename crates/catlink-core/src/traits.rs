use async_trait::async_trait;

use crate::types::{Annotation, SearchResult};

/// External search service: query string in, ranked candidates out.
///
/// Implementations report failures; callers in the pipeline go through
/// `catlink_oracle::lookup`, which turns any failure into "no results".
#[async_trait]
pub trait SearchOracle: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn search(&self, term: &str) -> Result<Vec<SearchResult>, Self::Error>;
}

/// Receives accepted annotations for the presentation layer.
pub trait AnnotationSink {
    fn record(&mut self, annotation: Annotation);
}

impl AnnotationSink for Vec<Annotation> {
    fn record(&mut self, annotation: Annotation) {
        self.push(annotation);
    }
}
