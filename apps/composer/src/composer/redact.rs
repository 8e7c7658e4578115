//! Redactor: derives the PII-scrubbed copy of a generated résumé.
//!
//! Rules run in a fixed order: full name, first name, last name, email
//! shapes, phone shapes, URL shapes, country. Each rule replaces every
//! case-insensitive occurrence with the placeholder token. Name and country
//! values are escaped before compilation so record data can never inject
//! pattern syntax.

use std::sync::OnceLock;

use regex::Regex;

use crate::profile::fields;
use crate::profile::ProfileRecord;

/// Placeholder token substituted for every redacted span.
pub const REDACTED: &str = "[REDACTED]";

/// Ordered redaction rules built for one profile.
pub struct Redactor {
    rules: Vec<Regex>,
}

impl Redactor {
    /// Builds the rule list from the profile's name and country values.
    /// Literal rules for empty fields are skipped; the shape rules (email,
    /// phone, URL) always apply.
    pub fn for_profile(profile: &ProfileRecord) -> Self {
        let first = profile.text(fields::FIRST_NAME);
        let last = profile.text(fields::LAST_NAME);
        let country = profile.text(fields::COUNTRY);

        let mut rules: Vec<Regex> = Vec::new();
        if !first.is_empty() && !last.is_empty() {
            rules.push(literal_rule(&format!("{first} {last}")));
        }
        if !first.is_empty() {
            rules.push(literal_rule(first));
        }
        if !last.is_empty() {
            rules.push(literal_rule(last));
        }
        rules.push(email_rule().clone());
        rules.push(phone_rule().clone());
        rules.push(url_rule().clone());
        if !country.is_empty() {
            rules.push(literal_rule(country));
        }
        Self { rules }
    }

    /// Applies every rule in order and returns a new string; the input is
    /// never modified.
    pub fn apply(&self, document: &str) -> String {
        let mut redacted = document.to_string();
        for rule in &self.rules {
            redacted = rule.replace_all(&redacted, REDACTED).into_owned();
        }
        redacted
    }
}

/// Case-insensitive literal match on an escaped record value.
fn literal_rule(value: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(value))).expect("escaped literal pattern")
}

fn email_rule() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").expect("email pattern")
    })
}

/// A run of 9+ digits with at most two spaces, dots, hyphens, or parentheses
/// between neighbours, optionally prefixed with `+`. Two separators admit
/// `) ` inside `(080) 1234…` while the three-character ` - ` keeps rendered
/// date ranges like `2019 - 2022` out.
fn phone_rule() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"\+?\d(?:[\s().-]{0,2}\d){8,}").expect("phone pattern"))
}

fn url_rule() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"(?i)https?://\S+").expect("url pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn redactor(value: serde_json::Value) -> Redactor {
        match value {
            serde_json::Value::Object(map) => Redactor::for_profile(&ProfileRecord::new(map)),
            _ => panic!("fixture must be a JSON object"),
        }
    }

    #[test]
    fn test_scrubs_names_contacts_and_country() {
        let r = redactor(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "country": "Nigeria"
        }));
        let out = r.apply(
            "Ada Lovelace lives in Nigeria, reach her at ada@example.com \
             or +234 801 234 5678, portfolio https://ada.dev",
        );
        assert!(!out.to_lowercase().contains("ada"));
        assert!(!out.to_lowercase().contains("lovelace"));
        assert!(!out.to_lowercase().contains("nigeria"));
        assert!(!out.contains("ada@example.com"));
        assert!(!out.contains("+234 801 234 5678"));
        assert!(!out.contains("https://ada.dev"));
        assert!(out.contains(REDACTED));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let r = redactor(json!({ "first_name": "Ada", "last_name": "Lovelace" }));
        let out = r.apply("ADA LOVELACE, also known as ada lovelace");
        assert_eq!(out, "[REDACTED], also known as [REDACTED]");
    }

    #[test]
    fn test_full_name_replaced_as_single_span() {
        let r = redactor(json!({ "first_name": "Ada", "last_name": "Lovelace" }));
        assert_eq!(r.apply("Ada Lovelace"), REDACTED);
    }

    #[test]
    fn test_first_and_last_names_replaced_alone() {
        let r = redactor(json!({ "first_name": "Ada", "last_name": "Lovelace" }));
        assert_eq!(r.apply("Ada wrote it; Lovelace signed it"), "[REDACTED] wrote it; [REDACTED] signed it");
    }

    #[test]
    fn test_name_metacharacters_are_escaped() {
        let r = redactor(json!({ "first_name": "A.d(a", "last_name": "L+l" }));
        let out = r.apply("A.d(a and L+l but not Abda");
        assert_eq!(out, "[REDACTED] and [REDACTED] but not Abda");
    }

    #[test]
    fn test_email_shape_redacted_without_name_overlap() {
        let r = redactor(json!({}));
        assert_eq!(
            r.apply("contact: recruiting@example.co.uk today"),
            "contact: [REDACTED] today"
        );
    }

    #[test]
    fn test_phone_shapes_redacted() {
        let r = redactor(json!({}));
        assert_eq!(r.apply("call +234 801 234 5678 now"), "call [REDACTED] now");
        assert_eq!(r.apply("call (080) 1234-5678 now"), "call ([REDACTED] now");
        assert_eq!(r.apply("call 080.1234.5678 now"), "call [REDACTED] now");
    }

    #[test]
    fn test_short_digit_runs_and_date_ranges_survive() {
        let r = redactor(json!({}));
        assert_eq!(r.apply("2019 - 2022"), "2019 - 2022");
        assert_eq!(r.apply("order 12345678"), "order 12345678");
    }

    #[test]
    fn test_urls_redacted_http_and_https() {
        let r = redactor(json!({}));
        assert_eq!(
            r.apply("see https://ada.dev and http://example.org/x"),
            "see [REDACTED] and [REDACTED]"
        );
    }

    #[test]
    fn test_country_value_redacted_last() {
        let r = redactor(json!({ "country": "Nigeria" }));
        assert_eq!(r.apply("Based in Nigeria."), "Based in [REDACTED].");
    }

    #[test]
    fn test_empty_name_fields_add_no_rules() {
        let r = redactor(json!({ "first_name": "", "last_name": "  " }));
        assert_eq!(r.apply("Ada Lovelace stays"), "Ada Lovelace stays");
    }

    #[test]
    fn test_input_document_is_untouched() {
        let r = redactor(json!({ "first_name": "Ada" }));
        let original = "Ada wrote this".to_string();
        let out = r.apply(&original);
        assert_eq!(original, "Ada wrote this");
        assert_eq!(out, "[REDACTED] wrote this");
    }
}
