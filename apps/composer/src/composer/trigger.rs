//! Change-trigger policy: decides whether a profile write needs a fresh
//! render.
//!
//! Regeneration happens when the record carries no generated output yet, when
//! there is no prior image to compare against (inserts), or when any tracked
//! source field differs between the prior and new images. Derived fields are
//! not tracked, so the composer's own write-back never re-triggers itself.

use crate::profile::fields;
use crate::profile::ProfileRecord;

/// True when this write event requires a fresh render.
pub fn should_regenerate(record: &ProfileRecord, prior: Option<&ProfileRecord>) -> bool {
    if record.text(fields::GENERATED_RESUME).is_empty() {
        return true;
    }
    match prior {
        None => true,
        Some(prior) => !changed_fields(record, prior).is_empty(),
    }
}

/// Tracked source fields whose values differ between the two record images,
/// in declaration order. Values compare by deep JSON equality, so reordering
/// a list counts as a change.
pub fn changed_fields(record: &ProfileRecord, prior: &ProfileRecord) -> Vec<&'static str> {
    fields::TRACKED_FIELDS
        .iter()
        .copied()
        .filter(|field| record.get(field) != prior.get(field))
        .collect()
}
