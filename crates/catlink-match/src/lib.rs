//! catlink-match
//!
//! Similarity metric, citation filtering and the tiered first-win decision
//! chains that pick a canonical title from oracle candidates.

pub mod decision;
pub mod filter;
pub mod similarity;
pub mod text;

pub use decision::{decide, ExactQuery, NameQuery, SubjectQuery, Tier, TierMatch, EXACT_TIERS, NAME_TIERS, SUBJECT_TIERS};
pub use filter::{filter_candidates, is_citation_like};
pub use similarity::{distance, similarity};
