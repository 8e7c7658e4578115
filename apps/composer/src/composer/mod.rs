// Résumé composition: trigger policy, document building, redaction.

pub mod document;
pub mod pipeline;
pub mod redact;
pub mod trigger;

pub use pipeline::{compose, ComposeOutcome, ComposedDocuments, SkipReason};
