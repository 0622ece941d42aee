use catlink_core::config::PresentationConfig;
use catlink_core::traits::AnnotationSink;
use catlink_core::types::{Annotation, Component, MatchDecision};

use crate::pipeline::FieldOutcome;

/// Turns accepted decisions into annotations. Rejections produce nothing.
pub struct AnnotationEmitter<'a> {
    presentation: &'a PresentationConfig,
}

impl<'a> AnnotationEmitter<'a> {
    pub fn new(presentation: &'a PresentationConfig) -> Self {
        Self { presentation }
    }

    /// Returns whether an annotation was recorded.
    pub fn emit<S: AnnotationSink + ?Sized>(
        &self,
        field_id: &str,
        component: &Component,
        decision: &MatchDecision,
        sink: &mut S,
    ) -> bool {
        let Some(title) = decision.canonical_title.as_ref().filter(|_| decision.accepted) else {
            return false;
        };
        sink.record(Annotation {
            field_id: field_id.to_string(),
            component_id: component.id.clone(),
            start: component.span.start,
            end: component.span.end,
            text: component.text.clone(),
            canonical_title: title.clone(),
            class_name: self.presentation.class_name.clone(),
            title_attribute: self.presentation.title_attribute.clone(),
        });
        true
    }

    /// Emit every accepted decision of a field, in component order.
    pub fn emit_outcome<S: AnnotationSink + ?Sized>(&self, outcome: &FieldOutcome, sink: &mut S) -> usize {
        let field_id = &outcome.segmentation.field.id;
        let mut recorded = 0;
        for d in &outcome.decisions {
            if self.emit(field_id, &d.component, &d.decision, sink) {
                recorded += 1;
            }
        }
        recorded
    }
}
