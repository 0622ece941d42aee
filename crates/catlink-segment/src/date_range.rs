use once_cell::sync::Lazy;
use regex::Regex;

use catlink_core::types::Span;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("year pattern"));

/// Every standalone 4-digit run, left to right.
pub fn extract_years(text: &str) -> Vec<String> {
    YEAR.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Find each year in `text` starting at `from`. The cursor moves past every
/// consumed occurrence, so a repeated year maps to successive positions.
/// Years that cannot be found after the cursor are skipped.
pub fn locate_years(text: &str, from: usize, years: &[String]) -> Vec<(String, Span)> {
    let mut cursor = from.min(text.len());
    let mut located = Vec::with_capacity(years.len());
    for year in years {
        if let Some(pos) = text[cursor..].find(year.as_str()) {
            let start = cursor + pos;
            let end = start + year.len();
            located.push((year.clone(), start..end));
            cursor = end;
        }
    }
    located
}
