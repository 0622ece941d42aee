use futures::future::join_all;
use tracing::{debug, info};

use catlink_core::config::Settings;
use catlink_core::traits::{AnnotationSink, SearchOracle};
use catlink_core::types::{Component, FieldText, MatchDecision, Role, SearchResult};
use catlink_match::{decide, filter_candidates, ExactQuery, NameQuery, SubjectQuery, TierMatch, EXACT_TIERS, NAME_TIERS, SUBJECT_TIERS};
use catlink_oracle::lookup;
use catlink_segment::{segment, strip_parenthetical, Segmentation};

use crate::emitter::AnnotationEmitter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDecision {
    pub component: Component,
    pub decision: MatchDecision,
}

/// A field's segmentation together with one decision per component, in
/// component order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub segmentation: Segmentation,
    pub decisions: Vec<ComponentDecision>,
}

impl FieldOutcome {
    pub fn accepted(&self) -> impl Iterator<Item = &ComponentDecision> {
        self.decisions.iter().filter(|d| d.decision.accepted)
    }
}

/// Entry point of the engine. Owns the oracle and the settings it runs with;
/// there is no other state.
pub struct Linker<O> {
    oracle: O,
    settings: Settings,
}

impl<O: SearchOracle> Linker<O> {
    pub fn new(oracle: O, settings: Settings) -> Self {
        Self { oracle, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    async fn candidates(&self, term: &str) -> Vec<SearchResult> {
        filter_candidates(&lookup(&self.oracle, term).await)
    }

    async fn decide_subject(&self, term: &str) -> Option<TierMatch> {
        let matching = &self.settings.matching;
        let found = decide(&SUBJECT_TIERS, &SubjectQuery::new(term), &self.candidates(term).await, matching);
        if found.is_some() {
            return found;
        }
        let stripped = strip_parenthetical(term)?;
        debug!(term = %term, retry = %stripped, "retrying subject without parenthetical");
        decide(&SUBJECT_TIERS, &SubjectQuery::new(stripped), &self.candidates(stripped).await, matching)
    }

    /// One lookup (two for a subject retry) and one decision. Never fails:
    /// an unreachable oracle simply yields a rejection.
    pub async fn decide_component(&self, component: &Component) -> MatchDecision {
        let matching = &self.settings.matching;
        let term = component.search_term();
        let found = match &component.role {
            Role::PersonName(parts) => {
                let results = self.candidates(&term).await;
                decide(&NAME_TIERS, &NameQuery::new(parts), &results, matching)
            }
            Role::DateRange | Role::Acronym => {
                let results = self.candidates(&term).await;
                decide(&EXACT_TIERS, &ExactQuery::new(term.as_str()), &results, matching)
            }
            Role::PlainSubject => self.decide_subject(&term).await,
        };
        match found {
            Some(m) => {
                debug!(component = %component.id, tier = m.tier, title = %m.title, "accepted");
                MatchDecision::accept(m.title)
            }
            None => {
                debug!(component = %component.id, "no match");
                MatchDecision::reject()
            }
        }
    }

    /// Segment a field and decide all its components concurrently; resolves
    /// once every component has a decision.
    pub async fn link_field(&self, field: &FieldText) -> FieldOutcome {
        let segmentation = segment(field);
        let components: Vec<Component> = segmentation.components().cloned().collect();
        let decisions = join_all(components.iter().map(|c| self.decide_component(c))).await;
        FieldOutcome {
            decisions: components
                .into_iter()
                .zip(decisions)
                .map(|(component, decision)| ComponentDecision { component, decision })
                .collect(),
            segmentation,
        }
    }

    /// Join over all fields of a document, preserving input order.
    pub async fn link_document(&self, fields: &[FieldText]) -> Vec<FieldOutcome> {
        let outcomes = join_all(fields.iter().map(|f| self.link_field(f))).await;
        let components: usize = outcomes.iter().map(|o| o.decisions.len()).sum();
        let accepted: usize = outcomes.iter().map(|o| o.accepted().count()).sum();
        info!(fields = fields.len(), components, accepted, "document linked");
        outcomes
    }

    /// Link a document and record every accepted decision in `sink`.
    pub async fn annotate<S: AnnotationSink + ?Sized>(&self, fields: &[FieldText], sink: &mut S) -> Vec<FieldOutcome> {
        let outcomes = self.link_document(fields).await;
        let emitter = AnnotationEmitter::new(&self.settings.presentation);
        for outcome in &outcomes {
            emitter.emit_outcome(outcome, sink);
        }
        outcomes
    }
}
