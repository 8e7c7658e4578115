//! Normalization of repeated-value fields.
//!
//! Profiles were written by several generations of client code, so every
//! list-typed field arrives in one of two representations: a true JSON array,
//! or a string holding either serialized JSON or a comma-delimited list. This
//! module is the single place that flattens both into ordered sequences; the
//! builder only ever sees the normalized view.

use serde_json::{Map, Value};

use crate::profile::fields;

/// The literal rendered in place of an end date for ongoing positions.
pub const PRESENT: &str = "Present";

/// Flattens a repeated-value field into its item sequence.
///
/// Arrays pass through. Strings are parsed as JSON first; only a successful
/// parse *to an array* counts, anything else falls back to a comma split with
/// trimmed, non-empty segments. Every other shape reads as empty.
pub fn parse_repeatable(raw: &Value) -> Vec<Value> {
    match raw {
        Value::Array(items) => items.clone(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Vec::new();
            }
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(s) {
                return items;
            }
            s.split(',')
                .map(str::trim)
                .filter(|seg| !seg.is_empty())
                .map(|seg| Value::String(seg.to_string()))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// String items of a repeated field (skills, languages). Non-string items are
/// dropped rather than coerced.
pub fn string_items(raw: &Value) -> Vec<String> {
    parse_repeatable(raw)
        .iter()
        .filter_map(|item| item.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Renders `"{start} - {end}"`, with `Present` standing in for the end date
/// whenever the ongoing flag is set, even when an end date was also stored.
/// A single present side renders alone; two absent sides render nothing.
pub fn format_date_range(start: &str, end: &str, is_current: bool) -> Option<String> {
    let end = if is_current { PRESENT } else { end };
    match (start.is_empty(), end.is_empty()) {
        (false, false) => Some(format!("{start} - {end}")),
        (false, true) => Some(start.to_string()),
        (true, false) => Some(end.to_string()),
        (true, true) => None,
    }
}

// ── Structured entry views ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkEntry {
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub issued_date: String,
    pub credential_url: String,
}

impl WorkEntry {
    fn from_item(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        Some(Self {
            role: obj_text(obj, fields::ENTRY_ROLE),
            company: obj_text(obj, fields::ENTRY_COMPANY),
            start_date: obj_text(obj, fields::ENTRY_START_DATE),
            end_date: obj_text(obj, fields::ENTRY_END_DATE),
            is_current: obj_bool(obj, fields::ENTRY_IS_CURRENT),
            description: obj_text(obj, fields::ENTRY_DESCRIPTION),
        })
    }
}

impl EducationEntry {
    fn from_item(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        Some(Self {
            school: obj_text(obj, fields::ENTRY_SCHOOL),
            degree: obj_text(obj, fields::ENTRY_DEGREE),
            field_of_study: obj_text(obj, fields::ENTRY_FIELD_OF_STUDY),
            start_date: obj_text(obj, fields::ENTRY_START_DATE),
            end_date: obj_text(obj, fields::ENTRY_END_DATE),
            is_current: obj_bool(obj, fields::ENTRY_IS_CURRENT),
            description: obj_text(obj, fields::ENTRY_DESCRIPTION),
        })
    }
}

impl CertificationEntry {
    fn from_item(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        Some(Self {
            name: obj_text(obj, fields::ENTRY_NAME),
            issuer: obj_text(obj, fields::ENTRY_ISSUER),
            issued_date: obj_text(obj, fields::ENTRY_ISSUED_DATE),
            credential_url: obj_text(obj, fields::ENTRY_CREDENTIAL_URL),
        })
    }
}

/// Work-history entries in stored order; non-object items are dropped.
pub fn work_entries(raw: &Value) -> Vec<WorkEntry> {
    parse_repeatable(raw)
        .iter()
        .filter_map(WorkEntry::from_item)
        .collect()
}

pub fn education_entries(raw: &Value) -> Vec<EducationEntry> {
    parse_repeatable(raw)
        .iter()
        .filter_map(EducationEntry::from_item)
        .collect()
}

pub fn certification_entries(raw: &Value) -> Vec<CertificationEntry> {
    parse_repeatable(raw)
        .iter()
        .filter_map(CertificationEntry::from_item)
        .collect()
}

fn obj_text(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

fn obj_bool(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}
