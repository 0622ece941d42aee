use once_cell::sync::Lazy;
use regex::Regex;

use catlink_core::types::SearchResult;

static CITATION_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\{\{\s*cite",
        r"ISBN",
        r"Retrieved",
        r"\bpp?\.",
        r"(?i)\bvol\.",
        r"(?i)edition",
        r"(?i)publisher",
        r"</span>\s*\}\}",
        r"\b\d{4}\)\.",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("citation marker pattern"))
    .collect()
});

/// True when the snippet reads like a bibliography entry rather than prose.
pub fn is_citation_like(snippet: &str) -> bool {
    CITATION_MARKERS.iter().any(|re| re.is_match(snippet))
}

/// Drop citation-like candidates, keeping the oracle's order. Falls back to
/// the unfiltered list when every candidate would be removed.
pub fn filter_candidates(results: &[SearchResult]) -> Vec<SearchResult> {
    let kept: Vec<SearchResult> = results.iter().filter(|r| !is_citation_like(&r.snippet)).cloned().collect();
    if kept.is_empty() {
        results.to_vec()
    } else {
        kept
    }
}
