//! Tiered acceptance chains.
//!
//! Each tier is a pure function over `(query, candidates, thresholds)` that
//! returns the title it accepts. Chains are evaluated in order and the first
//! tier that accepts wins; later tiers are never consulted and nothing is
//! re-scored.

use std::collections::HashSet;

use catlink_core::config::MatchingConfig;
use catlink_core::types::{NameParts, SearchResult};

use crate::similarity::similarity;
use crate::text::{strip_markup, tokenize};

pub type Tier<Q> = fn(&Q, &[SearchResult], &MatchingConfig) -> Option<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierMatch {
    pub tier: &'static str,
    pub title: String,
}

/// Run `tiers` in order and return the first acceptance.
pub fn decide<Q>(
    tiers: &[(&'static str, Tier<Q>)],
    query: &Q,
    candidates: &[SearchResult],
    cfg: &MatchingConfig,
) -> Option<TierMatch> {
    if candidates.is_empty() {
        return None;
    }
    tiers
        .iter()
        .find_map(|&(tier, f)| f(query, candidates, cfg).map(|title| TierMatch { tier, title }))
}

// ---------------------------------------------------------------------------
// Person names
// ---------------------------------------------------------------------------

/// Lower-cased view of `NameParts` used by the name tiers.
#[derive(Debug, Clone)]
pub struct NameQuery {
    last_name: String,
    first_and_middle: String,
    /// `{last-name words} ∪ {given-name words longer than one char}`, split
    /// with the same rule as snippet tokens so the two can be compared.
    parts: Vec<String>,
}

impl NameQuery {
    pub fn new(name: &NameParts) -> Self {
        let last_name = name.last_name.trim().to_lowercase();
        let first_and_middle = name.first_and_middle_names.trim().to_lowercase();
        let given = tokenize(&first_and_middle).into_iter().filter(|w| w.chars().count() > 1);
        let mut parts: Vec<String> = Vec::new();
        for word in tokenize(&last_name).into_iter().chain(given) {
            if !parts.contains(&word) {
                parts.push(word);
            }
        }
        Self { last_name, first_and_middle, parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    fn initials(&self) -> HashSet<char> {
        self.first_and_middle.chars().filter(|c| c.is_alphabetic()).collect()
    }

    fn title_has_part(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.parts.iter().any(|p| title.contains(p.as_str()))
    }
}

pub const NAME_TIERS: [(&str, Tier<NameQuery>); 6] = [
    ("title_full_name", title_full_name),
    ("title_initials", title_initials),
    ("snippet_proximity", snippet_proximity),
    ("snippet_fuzzy_proximity", snippet_fuzzy_proximity),
    ("snippet_contains_parts", snippet_contains_parts),
    ("snippet_fuzzy_parts", snippet_fuzzy_parts),
];

fn title_full_name(q: &NameQuery, candidates: &[SearchResult], _: &MatchingConfig) -> Option<String> {
    candidates
        .iter()
        .find(|c| {
            let title = c.title.to_lowercase();
            title.contains(&q.last_name) && title.contains(&q.first_and_middle)
        })
        .map(|c| c.title.clone())
}

fn title_initials(q: &NameQuery, candidates: &[SearchResult], _: &MatchingConfig) -> Option<String> {
    let initials = q.initials();
    candidates
        .iter()
        .find(|c| {
            let title = c.title.to_lowercase();
            if !title.contains(&q.last_name) {
                return false;
            }
            let hits = title
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .filter(|ch| initials.contains(ch))
                .count();
            hits >= initials.len()
        })
        .map(|c| c.title.clone())
}

/// Positions of tokens matching each name part, or `None` when some part has
/// no match at all.
fn part_positions<F>(q: &NameQuery, tokens: &[String], matches: F) -> Option<Vec<usize>>
where
    F: Fn(&str, &str) -> bool,
{
    let mut all = Vec::new();
    for part in &q.parts {
        let found: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| matches(t, part))
            .map(|(i, _)| i)
            .collect();
        if found.is_empty() {
            return None;
        }
        all.extend(found);
    }
    all.sort_unstable();
    Some(all)
}

fn within_gap(positions: &[usize], max_gap: usize) -> bool {
    positions.windows(2).all(|w| w[1] - w[0] <= max_gap)
}

fn proximity_tier<F>(q: &NameQuery, candidates: &[SearchResult], cfg: &MatchingConfig, matches: F) -> Option<String>
where
    F: Fn(&str, &str) -> bool,
{
    let first = candidates.first()?;
    let tokens = tokenize(&strip_markup(&first.snippet));
    let positions = part_positions(q, &tokens, matches)?;
    if within_gap(&positions, cfg.proximity_max_gap) && q.title_has_part(&first.title) {
        Some(first.title.clone())
    } else {
        None
    }
}

fn fuzzy_token_match(token: &str, part: &str, cfg: &MatchingConfig) -> bool {
    token.chars().count() >= cfg.min_fuzzy_token_len && similarity(token, part) >= cfg.name_fuzzy_similarity
}

fn snippet_proximity(q: &NameQuery, candidates: &[SearchResult], cfg: &MatchingConfig) -> Option<String> {
    proximity_tier(q, candidates, cfg, |token, part| token == part)
}

fn snippet_fuzzy_proximity(q: &NameQuery, candidates: &[SearchResult], cfg: &MatchingConfig) -> Option<String> {
    proximity_tier(q, candidates, cfg, |token, part| fuzzy_token_match(token, part, cfg))
}

fn snippet_contains_parts(q: &NameQuery, candidates: &[SearchResult], _: &MatchingConfig) -> Option<String> {
    let first = candidates.first()?;
    let snippet = strip_markup(&first.snippet).to_lowercase();
    if q.parts.iter().all(|p| snippet.contains(p.as_str())) && q.title_has_part(&first.title) {
        Some(first.title.clone())
    } else {
        None
    }
}

fn snippet_fuzzy_parts(q: &NameQuery, candidates: &[SearchResult], cfg: &MatchingConfig) -> Option<String> {
    let first = candidates.first()?;
    let tokens = tokenize(&strip_markup(&first.snippet));
    let every_part_found = q
        .parts
        .iter()
        .all(|p| tokens.iter().any(|t| fuzzy_token_match(t, p, cfg)));
    if !every_part_found {
        return None;
    }
    let title_tokens = tokenize(&first.title);
    let title_close = title_tokens
        .iter()
        .any(|t| q.parts.iter().any(|p| similarity(t, p) >= cfg.name_fuzzy_similarity));
    title_close.then(|| first.title.clone())
}

// ---------------------------------------------------------------------------
// Years and acronyms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ExactQuery {
    pub term: String,
}

impl ExactQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

pub const EXACT_TIERS: [(&str, Tier<ExactQuery>); 1] = [("title_equals", title_equals)];

fn title_equals(q: &ExactQuery, candidates: &[SearchResult], _: &MatchingConfig) -> Option<String> {
    candidates.iter().find(|c| c.title == q.term).map(|c| c.title.clone())
}

// ---------------------------------------------------------------------------
// Plain subjects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SubjectQuery {
    lower: String,
}

impl SubjectQuery {
    pub fn new(term: &str) -> Self {
        Self { lower: term.trim().to_lowercase() }
    }
}

pub const SUBJECT_TIERS: [(&str, Tier<SubjectQuery>); 5] = [
    ("title_equals_ignore_case", title_equals_ignore_case),
    ("title_similar", title_similar),
    ("title_contains_query", title_contains_query),
    ("query_contains_title", query_contains_title),
    ("first_title_loosely_similar", first_title_loosely_similar),
];

fn first_title_where<F>(candidates: &[SearchResult], pred: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    candidates
        .iter()
        .find(|c| pred(&c.title.to_lowercase()))
        .map(|c| c.title.clone())
}

fn title_equals_ignore_case(q: &SubjectQuery, candidates: &[SearchResult], _: &MatchingConfig) -> Option<String> {
    first_title_where(candidates, |t| t == q.lower)
}

fn title_similar(q: &SubjectQuery, candidates: &[SearchResult], cfg: &MatchingConfig) -> Option<String> {
    first_title_where(candidates, |t| similarity(&q.lower, t) >= cfg.subject_similarity)
}

fn title_contains_query(q: &SubjectQuery, candidates: &[SearchResult], _: &MatchingConfig) -> Option<String> {
    first_title_where(candidates, |t| t.contains(q.lower.as_str()))
}

fn query_contains_title(q: &SubjectQuery, candidates: &[SearchResult], _: &MatchingConfig) -> Option<String> {
    first_title_where(candidates, |t| !t.is_empty() && q.lower.contains(t))
}

fn first_title_loosely_similar(q: &SubjectQuery, candidates: &[SearchResult], cfg: &MatchingConfig) -> Option<String> {
    let first = candidates.first()?;
    (similarity(&q.lower, &first.title.to_lowercase()) >= cfg.subject_fallback_similarity).then(|| first.title.clone())
}
