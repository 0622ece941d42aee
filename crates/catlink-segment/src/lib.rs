//! catlink-segment
//!
//! Splits catalog field text into classified components: subject heading
//! parts, trailing qualifiers, date-range years, acronyms and person names.

pub mod classify;
pub mod date_range;
pub mod name;
pub mod segmenter;

pub use classify::{classify_qualifier, looks_like_person_name, split_qualifier, strip_parenthetical, QualifierKind, QualifierSplit};
pub use date_range::{extract_years, locate_years};
pub use name::{normalize_query, parse_name};
pub use segmenter::{segment, split_subject, Segment, Segmentation};
