//! Domain types shared by the segmenter, the matcher and the engine.

use serde::{Deserialize, Serialize};
use std::ops::Range;

pub type ComponentId = String;

/// Byte range into the text of the owning `FieldText`.
pub type Span = Range<usize>;

/// Hint supplied by the host about what a field holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Subject,
}

/// One raw catalog text value to analyze.
///
/// `id` is opaque to the core and is used as the prefix of every component id
/// derived from this field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldText {
    pub id: String,
    pub kind: FieldKind,
    pub text: String,
}

impl FieldText {
    pub fn new(id: impl Into<String>, kind: FieldKind, text: impl Into<String>) -> Self {
        Self { id: id.into(), kind, text: text.into() }
    }
}

/// "Last, First Middle" split into the two halves used for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub last_name: String,
    pub first_and_middle_names: String,
}

impl NameParts {
    /// Search form: `first_and_middle_names + " " + last_name`, or the last
    /// name alone when there are no given names.
    pub fn query(&self) -> String {
        if self.first_and_middle_names.is_empty() {
            self.last_name.clone()
        } else {
            format!("{} {}", self.first_and_middle_names, self.last_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    PersonName(NameParts),
    PlainSubject,
    /// A single year taken from a date-range qualifier.
    DateRange,
    Acronym,
}

/// A classified leaf segment of a `FieldText`. Every component receives
/// exactly one `MatchDecision`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub span: Span,
    pub text: String,
    pub role: Role,
}

impl Component {
    /// The string sent to the oracle for this component.
    pub fn search_term(&self) -> String {
        match &self.role {
            Role::PersonName(parts) => parts.query(),
            Role::PlainSubject | Role::DateRange | Role::Acronym => self.text.clone(),
        }
    }
}

/// One candidate returned by the search oracle. `snippet` may contain
/// `<span class="searchmatch">` highlight markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self { title: title.into(), snippet: snippet.into() }
    }
}

/// Outcome for one component. Set once, never revised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDecision {
    pub accepted: bool,
    pub canonical_title: Option<String>,
}

impl MatchDecision {
    pub fn accept(title: impl Into<String>) -> Self {
        Self { accepted: true, canonical_title: Some(title.into()) }
    }

    pub fn reject() -> Self {
        Self::default()
    }
}

impl From<Option<String>> for MatchDecision {
    fn from(title: Option<String>) -> Self {
        title.map_or_else(Self::reject, Self::accept)
    }
}

/// An accepted decision bound to the span it was made for, plus the styling
/// names the presentation layer applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub field_id: String,
    pub component_id: ComponentId,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub canonical_title: String,
    pub class_name: String,
    pub title_attribute: String,
}

impl Annotation {
    pub fn span(&self) -> Span {
        self.start..self.end
    }
}
