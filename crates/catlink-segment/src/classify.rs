use once_cell::sync::Lazy;
use regex::Regex;

use catlink_core::error::{Error, Result};
use catlink_core::types::Span;

/// Digits, whitespace and the punctuation seen in date ranges
/// (hyphen variants, period, comma, slash).
const DATE_CHARS: &str = r"[\d\s\-\u{2010}-\u{2015}.,/]";

static TRAILING_PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<main>.*?)\s*\((?P<qual>[^()]*)\)\s*$").expect("parenthetical pattern"));

static TRAILING_COMMA_DATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?P<main>.*),\s*(?P<qual>{DATE_CHARS}*\d{{4}}{DATE_CHARS}*)$")).expect("comma date pattern")
});

static ONLY_DATE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{DATE_CHARS}+$")).expect("date class pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualifierKind {
    DateRange,
    Acronym,
}

/// A component split into its main text and trailing qualifier. Ranges are
/// relative to the text passed to `split_qualifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifierSplit {
    pub main: Span,
    pub qualifier: Span,
}

impl QualifierSplit {
    pub fn main_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.main.clone()]
    }

    pub fn qualifier_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.qualifier.clone()]
    }
}

/// Split off a trailing `(…)` group, or failing that a trailing
/// `, <dates>` suffix.
///
/// Only the last group is taken; earlier groups stay in `main`. A text that
/// ends in `)` without a well-formed, non-nested, non-empty final group is
/// reported as malformed so the caller can fall back to a plain search.
pub fn split_qualifier(text: &str) -> Result<Option<QualifierSplit>> {
    if let Some(caps) = TRAILING_PARENTHETICAL.captures(text) {
        let (Some(main), Some(qual)) = (caps.name("main"), caps.name("qual")) else {
            return Ok(None);
        };
        let qualifier = trim_range(text, qual.range());
        if qualifier.is_empty() {
            return Err(Error::MalformedComponent(format!("empty parenthetical in {text:?}")));
        }
        return Ok(Some(QualifierSplit { main: trim_range(text, main.range()), qualifier }));
    }
    if text.trim_end().ends_with(')') {
        return Err(Error::MalformedComponent(format!("unbalanced or nested parenthetical in {text:?}")));
    }
    if let Some(caps) = TRAILING_COMMA_DATES.captures(text) {
        if let (Some(main), Some(qual)) = (caps.name("main"), caps.name("qual")) {
            return Ok(Some(QualifierSplit {
                main: trim_range(text, main.range()),
                qualifier: trim_range(text, qual.range()),
            }));
        }
    }
    Ok(None)
}

/// Text before the first `(`, for a second lookup when a subject still
/// carries a group the first split did not remove (nested or repeated
/// groups). `None` unless that `(` is closed later in the text, or when
/// nothing would remain.
pub fn strip_parenthetical(text: &str) -> Option<&str> {
    let (head, rest) = text.split_once('(')?;
    if !rest.contains(')') {
        return None;
    }
    let head = head.trim_end();
    (!head.is_empty()).then_some(head)
}

pub fn classify_qualifier(qualifier: &str) -> QualifierKind {
    if ONLY_DATE_CHARS.is_match(qualifier) {
        QualifierKind::DateRange
    } else {
        QualifierKind::Acronym
    }
}

/// Exactly one comma and no digits.
pub fn looks_like_person_name(text: &str) -> bool {
    text.matches(',').count() == 1 && !text.chars().any(|c| c.is_ascii_digit())
}

/// Narrow `range` so that it excludes surrounding whitespace in `text`.
pub(crate) fn trim_range(text: &str, range: Span) -> Span {
    let slice = &text[range.clone()];
    let start = range.start + (slice.len() - slice.trim_start().len());
    let end = range.end - (slice.len() - slice.trim_end().len());
    if start >= end {
        start..start
    } else {
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_range_handles_blank_slices() {
        assert_eq!(trim_range("a   b", 1..4), 4..4);
        assert_eq!(trim_range("  ab  ", 0..6), 2..4);
    }

    #[test]
    fn strip_takes_text_before_first_group() {
        assert_eq!(strip_parenthetical("Mercury (planet (astronomy))"), Some("Mercury"));
        assert_eq!(strip_parenthetical("Paris (France)"), Some("Paris"));
        assert_eq!(strip_parenthetical("(1945)"), None);
        assert_eq!(strip_parenthetical("Cooking"), None);
    }

    #[test]
    fn strip_requires_a_closed_group() {
        assert_eq!(strip_parenthetical("Foo (bar"), None);
        assert_eq!(strip_parenthetical("Foo ) (bar"), None);
        assert_eq!(strip_parenthetical("Foo (bar) (baz"), Some("Foo"));
    }
}
