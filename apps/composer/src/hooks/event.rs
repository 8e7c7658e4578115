//! Row-image payloads delivered by the database webhook on profile writes.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::profile::ProfileRecord;

/// One profile write event. Inserts carry only the new row image; updates
/// carry the prior image as well.
#[derive(Debug, Deserialize)]
pub struct ProfileChangeEvent {
    pub table: String,
    pub record: Map<String, Value>,
    #[serde(default)]
    pub old_record: Option<Map<String, Value>>,
}

impl ProfileChangeEvent {
    /// The new row image.
    pub fn new_image(&self) -> ProfileRecord {
        ProfileRecord::new(self.record.clone())
    }

    /// The prior row image, when the event carries one.
    pub fn prior_image(&self) -> Option<ProfileRecord> {
        self.old_record.clone().map(ProfileRecord::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_payload_has_no_prior_image() {
        let event: ProfileChangeEvent = serde_json::from_value(json!({
            "table": "profiles",
            "record": { "id": "0a4ad8f1-5b2e-4c3f-9d10-21f6a1a0e9b7", "first_name": "Ada" }
        }))
        .unwrap();
        assert_eq!(event.table, "profiles");
        assert!(event.prior_image().is_none());
        assert_eq!(event.new_image().text("first_name"), "Ada");
    }

    #[test]
    fn test_update_payload_carries_both_images() {
        let event: ProfileChangeEvent = serde_json::from_value(json!({
            "table": "profiles",
            "record": { "first_name": "Augusta" },
            "old_record": { "first_name": "Ada" }
        }))
        .unwrap();
        assert_eq!(event.new_image().text("first_name"), "Augusta");
        assert_eq!(
            event.prior_image().map(|p| p.text("first_name").to_string()),
            Some("Ada".to_string())
        );
    }

    #[test]
    fn test_null_old_record_reads_as_absent() {
        let event: ProfileChangeEvent = serde_json::from_value(json!({
            "table": "profiles",
            "record": {},
            "old_record": null
        }))
        .unwrap();
        assert!(event.prior_image().is_none());
    }

    #[test]
    fn test_extra_dispatcher_fields_are_tolerated() {
        // Webhook dispatchers decorate payloads with operation metadata.
        let event: ProfileChangeEvent = serde_json::from_value(json!({
            "type": "UPDATE",
            "schema": "public",
            "table": "profiles",
            "record": { "first_name": "Ada" },
            "old_record": { "first_name": "Ada" }
        }))
        .unwrap();
        assert_eq!(event.table, "profiles");
        assert_eq!(event.new_image().text("first_name"), "Ada");
    }
}
