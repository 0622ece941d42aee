//! catlink-engine
//!
//! Runs every component of every field through lookup, filtering and the
//! decision tiers, joins the results per field and per document, and hands
//! accepted decisions to an annotation sink.

pub mod emitter;
pub mod pipeline;
pub mod render;

pub use emitter::AnnotationEmitter;
pub use pipeline::{ComponentDecision, FieldOutcome, Linker};
pub use render::render_html;
