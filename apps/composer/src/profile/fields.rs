//! Recognized profile field names.
//!
//! The backing store owns the `profiles` collection; this module pins down the
//! exact set of fields the composer reads and writes, so nothing else in the
//! crate touches row images by ad-hoc string keys.

// ── Source fields (read by the builder, watched by the trigger) ─────────────

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const HEADLINE: &str = "headline";
pub const BIO: &str = "bio";
pub const COUNTRY: &str = "country";
pub const SENIORITY: &str = "seniority";
pub const LINKEDIN_URL: &str = "linkedin_url";
pub const PORTFOLIO_URL: &str = "portfolio_url";
pub const SKILLS: &str = "skills";
pub const LANGUAGES: &str = "languages";
pub const WORK_EXPERIENCE: &str = "work_experience";
pub const EDUCATION: &str = "education";
pub const CERTIFICATIONS: &str = "certifications";

/// The fixed set of source fields whose change forces regeneration.
///
/// Derived fields are deliberately absent: the write-back we perform after a
/// generation pass must not re-trigger on the follow-up update event.
pub const TRACKED_FIELDS: &[&str] = &[
    FIRST_NAME,
    LAST_NAME,
    HEADLINE,
    BIO,
    COUNTRY,
    SENIORITY,
    LINKEDIN_URL,
    PORTFOLIO_URL,
    SKILLS,
    LANGUAGES,
    WORK_EXPERIENCE,
    EDUCATION,
    CERTIFICATIONS,
];

// ── Derived fields (written back after a generation pass) ───────────────────

pub const GENERATED_RESUME: &str = "generated_resume";
pub const GENERATED_RESUME_REDACTED: &str = "generated_resume_redacted";
/// Object-store key of the rendered PDF artifact, or null when no artifact
/// exists for the current document revision.
pub const GENERATED_RESUME_PDF: &str = "generated_resume_pdf";
pub const RESUME_GENERATED_AT: &str = "resume_generated_at";

// ── Entry-level keys inside the structured list fields ──────────────────────

pub const ENTRY_ROLE: &str = "role";
pub const ENTRY_COMPANY: &str = "company";
pub const ENTRY_SCHOOL: &str = "school";
pub const ENTRY_DEGREE: &str = "degree";
pub const ENTRY_FIELD_OF_STUDY: &str = "field_of_study";
pub const ENTRY_START_DATE: &str = "start_date";
pub const ENTRY_END_DATE: &str = "end_date";
pub const ENTRY_IS_CURRENT: &str = "is_current";
pub const ENTRY_DESCRIPTION: &str = "description";
pub const ENTRY_NAME: &str = "name";
pub const ENTRY_ISSUER: &str = "issuer";
pub const ENTRY_ISSUED_DATE: &str = "issued_date";
pub const ENTRY_CREDENTIAL_URL: &str = "credential_url";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_fields_cover_all_source_fields() {
        // Every source field above must be tracked, and nothing else.
        assert_eq!(TRACKED_FIELDS.len(), 13);
        for field in [SKILLS, LANGUAGES, WORK_EXPERIENCE, EDUCATION, CERTIFICATIONS] {
            assert!(TRACKED_FIELDS.contains(&field));
        }
    }

    #[test]
    fn test_derived_fields_are_not_tracked() {
        for field in [
            GENERATED_RESUME,
            GENERATED_RESUME_REDACTED,
            GENERATED_RESUME_PDF,
            RESUME_GENERATED_AT,
        ] {
            assert!(
                !TRACKED_FIELDS.contains(&field),
                "derived field {field} must not re-trigger generation"
            );
        }
    }

    #[test]
    fn test_tracked_fields_have_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for field in TRACKED_FIELDS {
            assert!(seen.insert(field), "duplicate tracked field {field}");
        }
    }
}
