//! Composition pipeline: trigger check, document build, redaction.
//!
//! `compose` is pure and synchronous: it inspects the two record images and
//! returns either the freshly built documents or the reason nothing needs to
//! be written. Persistence and binary rendering stay with the caller.

use crate::profile::ProfileRecord;

use super::document::build_resume;
use super::redact::Redactor;
use super::trigger::{changed_fields, should_regenerate};

/// Why a write event produced no new documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Generated output exists and no tracked field changed.
    UpToDate,
    /// Every contributing field was empty; there is nothing to persist.
    EmptyDocument,
}

/// Text outputs of one generation pass. The redacted copy is always derived
/// from `resume` in the same pass, never from the record directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocuments {
    pub resume: String,
    pub redacted: String,
}

/// Result of running the composer against one write event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    Generated {
        documents: ComposedDocuments,
        /// Tracked fields that differed from the prior image. Empty on
        /// inserts and on regenerations forced by missing output.
        changed: Vec<&'static str>,
    },
    Skipped(SkipReason),
}

pub fn compose(record: &ProfileRecord, prior: Option<&ProfileRecord>) -> ComposeOutcome {
    if !should_regenerate(record, prior) {
        return ComposeOutcome::Skipped(SkipReason::UpToDate);
    }
    let resume = build_resume(record);
    if resume.is_empty() {
        return ComposeOutcome::Skipped(SkipReason::EmptyDocument);
    }
    let redacted = Redactor::for_profile(record).apply(&resume);
    let changed = prior
        .map(|prior| changed_fields(record, prior))
        .unwrap_or_default();
    ComposeOutcome::Generated {
        documents: ComposedDocuments { resume, redacted },
        changed,
    }
}
