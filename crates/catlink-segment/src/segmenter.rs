use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use catlink_core::types::{Component, FieldKind, FieldText, Role, Span};

use crate::classify::{classify_qualifier, looks_like_person_name, split_qualifier, trim_range, QualifierKind};
use crate::date_range::{extract_years, locate_years};
use crate::name::parse_name;

static SUBJECT_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*--\s*").expect("delimiter pattern"));

/// One raw piece of a field between `--` delimiters, with the exact
/// delimiter text that followed it (empty for the last piece).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub span: Span,
    pub separator: String,
    pub components: Vec<Component>,
}

/// A field decomposed into ordered segments and their leaf components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub field: FieldText,
    pub segments: Vec<Segment>,
}

impl Segmentation {
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.segments.iter().flat_map(|s| s.components.iter())
    }

    pub fn segment_text(&self, segment: &Segment) -> &str {
        &self.field.text[segment.span.clone()]
    }

    /// Segments concatenated with their original delimiters. Always equal to
    /// the field text.
    pub fn rejoin(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("{}{}", self.segment_text(s), s.separator))
            .collect()
    }
}

/// Split subject text on `--` (surrounding whitespace belongs to the
/// delimiter). Returns each piece's span and the delimiter that follows it.
pub fn split_subject(text: &str) -> Vec<(Span, &str)> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for m in SUBJECT_DELIMITER.find_iter(text) {
        pieces.push((start..m.start(), m.as_str()));
        start = m.end();
    }
    pieces.push((start..text.len(), ""));
    pieces
}

/// Decompose one field into classified components.
///
/// Name fields with exactly one comma become a single person-name component;
/// any other name field is handled as a subject heading.
pub fn segment(field: &FieldText) -> Segmentation {
    if field.kind == FieldKind::Name {
        if field.text.matches(',').count() == 1 {
            let span = trim_range(&field.text, 0..field.text.len());
            let components = if span.is_empty() {
                Vec::new()
            } else {
                vec![person_name(format!("{}/0", field.id), &field.text, span)]
            };
            return Segmentation {
                field: field.clone(),
                segments: vec![Segment { span: 0..field.text.len(), separator: String::new(), components }],
            };
        }
        debug!(field = %field.id, "name field without a single comma, treating as subject");
    }

    let segments = split_subject(&field.text)
        .into_iter()
        .enumerate()
        .map(|(i, (span, separator))| Segment {
            components: classify_segment(&format!("{}/{}", field.id, i), &field.text, span.clone()),
            span,
            separator: separator.to_string(),
        })
        .collect();
    Segmentation { field: field.clone(), segments }
}

fn person_name(id: String, text: &str, span: Span) -> Component {
    let raw = &text[span.clone()];
    Component { id, role: Role::PersonName(parse_name(raw)), text: raw.to_string(), span }
}

fn plain(id: String, text: &str, span: Span) -> Component {
    Component { id, role: Role::PlainSubject, text: text[span.clone()].to_string(), span }
}

/// Name-or-subject decision for text that carries no qualifier.
fn classify_main(id: String, text: &str, span: Span) -> Component {
    if looks_like_person_name(&text[span.clone()]) {
        person_name(id, text, span)
    } else {
        plain(id, text, span)
    }
}

/// Components for the segment at `span` of `text`. Spans in the returned
/// components are absolute offsets into `text`.
fn classify_segment(id: &str, text: &str, span: Span) -> Vec<Component> {
    let span = trim_range(text, span);
    if span.is_empty() {
        return Vec::new();
    }
    let offset = span.start;
    let raw = &text[span.clone()];

    let split = match split_qualifier(raw) {
        Ok(Some(split)) => split,
        Ok(None) => return vec![classify_main(id.to_string(), text, span)],
        Err(err) => {
            debug!(component = %id, error = %err, "falling back to plain subject");
            return vec![plain(id.to_string(), text, span)];
        }
    };

    let shift = |r: &Span| (r.start + offset)..(r.end + offset);
    let main = shift(&split.main);
    let qualifier = shift(&split.qualifier);

    let mut components = Vec::new();
    if !main.is_empty() {
        components.push(classify_main(format!("{id}/main"), text, main));
    }

    let qualifier_text = &text[qualifier.clone()];
    match classify_qualifier(qualifier_text) {
        QualifierKind::Acronym => components.push(Component {
            id: format!("{id}/qualifier"),
            span: qualifier.clone(),
            text: qualifier_text.to_string(),
            role: Role::Acronym,
        }),
        QualifierKind::DateRange => {
            let years = extract_years(qualifier_text);
            if years.is_empty() {
                components.push(plain(format!("{id}/qualifier"), text, qualifier));
            } else {
                for (k, (year, year_span)) in locate_years(text, qualifier.start, &years).into_iter().enumerate() {
                    components.push(Component {
                        id: format!("{id}/qualifier/{k}"),
                        span: year_span,
                        text: year,
                        role: Role::DateRange,
                    });
                }
            }
        }
    }
    components
}
