//! Document Builder: renders a profile into a structured Markdown résumé.
//!
//! Section order and per-section formatting are fixed; a section is emitted
//! only when it has content, and the whole document collapses to the empty
//! string when every contributing field is empty. Rendering is deterministic:
//! the same field values always produce byte-identical output.

use crate::profile::fields;
use crate::profile::normalize::{
    certification_entries, education_entries, format_date_range, string_items, work_entries,
    CertificationEntry, EducationEntry, WorkEntry,
};
use crate::profile::ProfileRecord;

/// Renders the full résumé document for one profile.
///
/// Callers must treat an empty return value as "nothing to persist": it means
/// every contributing source field was empty.
pub fn build_resume(profile: &ProfileRecord) -> String {
    let mut sections: Vec<String> = Vec::new();

    push_nonempty(&mut sections, title_line(profile));
    push_nonempty(&mut sections, headline_line(profile));
    push_nonempty(&mut sections, meta_line(profile));
    push_nonempty(&mut sections, links_line(profile));
    push_nonempty(&mut sections, summary_section(profile));
    push_nonempty(
        &mut sections,
        bullet_section("Skills", &string_items(profile.get(fields::SKILLS))),
    );
    push_nonempty(
        &mut sections,
        bullet_section("Languages", &string_items(profile.get(fields::LANGUAGES))),
    );
    push_nonempty(&mut sections, work_section(profile));
    push_nonempty(&mut sections, education_section(profile));
    push_nonempty(&mut sections, certifications_section(profile));

    sections.join("\n\n").trim().to_string()
}

// ── Header block ────────────────────────────────────────────────────────────

fn title_line(profile: &ProfileRecord) -> String {
    let name = join_nonempty(
        &[profile.text(fields::FIRST_NAME), profile.text(fields::LAST_NAME)],
        " ",
    );
    if name.is_empty() {
        String::new()
    } else {
        format!("# {name}")
    }
}

fn headline_line(profile: &ProfileRecord) -> String {
    let headline = profile.text(fields::HEADLINE);
    if headline.is_empty() {
        String::new()
    } else {
        format!("*{headline}*")
    }
}

fn meta_line(profile: &ProfileRecord) -> String {
    join_nonempty(
        &[profile.text(fields::COUNTRY), profile.text(fields::SENIORITY)],
        " · ",
    )
}

fn links_line(profile: &ProfileRecord) -> String {
    join_nonempty(
        &[
            profile.text(fields::LINKEDIN_URL),
            profile.text(fields::PORTFOLIO_URL),
        ],
        " | ",
    )
}

fn summary_section(profile: &ProfileRecord) -> String {
    let bio = profile.text(fields::BIO);
    if bio.is_empty() {
        String::new()
    } else {
        format!("## Summary\n{bio}")
    }
}

// ── List sections ───────────────────────────────────────────────────────────

fn bullet_section(heading: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let bullets: Vec<String> = items.iter().map(|item| format!("- {item}")).collect();
    format!("## {heading}\n{}", bullets.join("\n"))
}

fn work_section(profile: &ProfileRecord) -> String {
    let rendered: Vec<String> = work_entries(profile.get(fields::WORK_EXPERIENCE))
        .iter()
        .map(render_work_entry)
        .collect();
    entry_section("Work Experience", rendered)
}

fn education_section(profile: &ProfileRecord) -> String {
    let rendered: Vec<String> = education_entries(profile.get(fields::EDUCATION))
        .iter()
        .map(render_education_entry)
        .collect();
    entry_section("Education", rendered)
}

fn certifications_section(profile: &ProfileRecord) -> String {
    let rendered: Vec<String> = certification_entries(profile.get(fields::CERTIFICATIONS))
        .iter()
        .map(render_certification_entry)
        .collect();
    entry_section("Certifications", rendered)
}

/// Heading plus entries separated by blank lines. Entries that rendered empty
/// are dropped first, so a list of hollow records never leaves a bare heading
/// behind.
fn entry_section(heading: &str, rendered: Vec<String>) -> String {
    let rendered: Vec<String> = rendered.into_iter().filter(|e| !e.is_empty()).collect();
    if rendered.is_empty() {
        return String::new();
    }
    format!("## {heading}\n{}", rendered.join("\n\n"))
}

fn render_work_entry(entry: &WorkEntry) -> String {
    let mut lines: Vec<String> = Vec::new();
    let header = join_nonempty(&[&entry.role, &entry.company], " — ");
    if !header.is_empty() {
        lines.push(format!("**{header}**"));
    }
    if let Some(range) = format_date_range(&entry.start_date, &entry.end_date, entry.is_current) {
        lines.push(range);
    }
    if !entry.description.is_empty() {
        lines.push(entry.description.clone());
    }
    lines.join("\n")
}

/// School first on its own emphasized line, then degree/field, then dates,
/// then description.
fn render_education_entry(entry: &EducationEntry) -> String {
    let mut lines: Vec<String> = Vec::new();
    if !entry.school.is_empty() {
        lines.push(format!("**{}**", entry.school));
    }
    let degree_line = join_nonempty(&[&entry.degree, &entry.field_of_study], " — ");
    if !degree_line.is_empty() {
        lines.push(degree_line);
    }
    if let Some(range) = format_date_range(&entry.start_date, &entry.end_date, entry.is_current) {
        lines.push(range);
    }
    if !entry.description.is_empty() {
        lines.push(entry.description.clone());
    }
    lines.join("\n")
}

fn render_certification_entry(entry: &CertificationEntry) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut head = join_nonempty(&[&entry.name, &entry.issuer], " — ");
    if !entry.issued_date.is_empty() {
        if head.is_empty() {
            head = format!("({})", entry.issued_date);
        } else {
            head = format!("{head} ({})", entry.issued_date);
        }
    }
    if !head.is_empty() {
        lines.push(format!("- {head}"));
    }
    if !entry.credential_url.is_empty() {
        lines.push(format!("  {}", entry.credential_url));
    }
    lines.join("\n")
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn join_nonempty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

fn push_nonempty(sections: &mut Vec<String>, section: String) {
    if !section.is_empty() {
        sections.push(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(value: serde_json::Value) -> ProfileRecord {
        match value {
            serde_json::Value::Object(map) => ProfileRecord::new(map),
            _ => panic!("fixture must be a JSON object"),
        }
    }

    // ── empty-output guarantee ──────────────────────────────────────────────

    #[test]
    fn test_empty_profile_renders_empty_string() {
        assert_eq!(build_resume(&profile(json!({}))), "");
    }

    #[test]
    fn test_all_blank_fields_render_empty_string() {
        let p = profile(json!({
            "first_name": "  ",
            "last_name": "",
            "headline": null,
            "skills": [],
            "work_experience": "[]"
        }));
        assert_eq!(build_resume(&p), "");
    }

    #[test]
    fn test_hollow_entries_leave_no_bare_heading() {
        let p = profile(json!({ "work_experience": [{}, {"role": "", "company": ""}] }));
        assert_eq!(build_resume(&p), "");
    }

    // ── title / header block ────────────────────────────────────────────────

    #[test]
    fn test_name_only_profile_is_single_heading() {
        let p = profile(json!({ "first_name": "Ada", "last_name": "Lovelace" }));
        let doc = build_resume(&p);
        assert_eq!(doc, "# Ada Lovelace");
        assert!(!doc.contains("##"));
    }

    #[test]
    fn test_partial_name_renders_present_part() {
        let first_only = profile(json!({ "first_name": "Ada" }));
        assert_eq!(build_resume(&first_only), "# Ada");
        let last_only = profile(json!({ "last_name": "Lovelace" }));
        assert_eq!(build_resume(&last_only), "# Lovelace");
    }

    #[test]
    fn test_headline_rendered_in_emphasis() {
        let p = profile(json!({ "first_name": "Ada", "headline": "Analyst & Metaphysician" }));
        let doc = build_resume(&p);
        assert_eq!(doc, "# Ada\n\n*Analyst & Metaphysician*");
    }

    #[test]
    fn test_meta_line_joins_with_middle_dot() {
        let p = profile(json!({ "country": "Nigeria", "seniority": "Senior" }));
        assert_eq!(build_resume(&p), "Nigeria · Senior");
    }

    #[test]
    fn test_meta_line_single_side() {
        assert_eq!(build_resume(&profile(json!({ "country": "Nigeria" }))), "Nigeria");
        assert_eq!(build_resume(&profile(json!({ "seniority": "Senior" }))), "Senior");
    }

    #[test]
    fn test_links_line_joins_with_pipe() {
        let p = profile(json!({
            "linkedin_url": "https://linkedin.com/in/ada",
            "portfolio_url": "https://ada.dev"
        }));
        assert_eq!(
            build_resume(&p),
            "https://linkedin.com/in/ada | https://ada.dev"
        );
    }

    // ── list sections ───────────────────────────────────────────────────────

    #[test]
    fn test_skills_from_delimited_string() {
        let p = profile(json!({ "skills": "Go, Rust , TypeScript" }));
        assert_eq!(build_resume(&p), "## Skills\n- Go\n- Rust\n- TypeScript");
    }

    #[test]
    fn test_languages_section_bullets() {
        let p = profile(json!({ "languages": ["English", "French"] }));
        assert_eq!(build_resume(&p), "## Languages\n- English\n- French");
    }

    #[test]
    fn test_summary_section_present_only_with_bio() {
        let p = profile(json!({ "bio": "Wrote the first program." }));
        assert_eq!(build_resume(&p), "## Summary\nWrote the first program.");
        assert!(!build_resume(&profile(json!({ "bio": "  " }))).contains("Summary"));
    }

    // ── work experience ─────────────────────────────────────────────────────

    #[test]
    fn test_work_entry_role_only_renders_header_alone() {
        let p = profile(json!({ "work_experience": [{ "role": "Engineer" }] }));
        assert_eq!(build_resume(&p), "## Work Experience\n**Engineer**");
    }

    #[test]
    fn test_work_entry_full_lines_in_order() {
        let p = profile(json!({ "work_experience": [{
            "role": "Engineer",
            "company": "Initech",
            "start_date": "2019",
            "end_date": "2022",
            "description": "Owned the TPS pipeline."
        }]}));
        assert_eq!(
            build_resume(&p),
            "## Work Experience\n**Engineer — Initech**\n2019 - 2022\nOwned the TPS pipeline."
        );
    }

    #[test]
    fn test_work_entries_separated_by_blank_line() {
        let p = profile(json!({ "work_experience": [
            { "role": "Engineer" },
            { "role": "Manager" }
        ]}));
        assert_eq!(
            build_resume(&p),
            "## Work Experience\n**Engineer**\n\n**Manager**"
        );
    }

    #[test]
    fn test_work_entry_current_renders_present() {
        let p = profile(json!({ "work_experience": [{
            "role": "Engineer",
            "start_date": "2021",
            "end_date": "2024",
            "is_current": true
        }]}));
        let doc = build_resume(&p);
        assert!(doc.contains("2021 - Present"));
        assert!(!doc.contains("2024"));
    }

    // ── education ───────────────────────────────────────────────────────────

    #[test]
    fn test_education_school_line_before_degree_line() {
        let p = profile(json!({ "education": [{
            "school": "University of London",
            "degree": "BSc",
            "field_of_study": "Mathematics",
            "start_date": "1833",
            "end_date": "1836",
            "description": "Tutored by De Morgan."
        }]}));
        assert_eq!(
            build_resume(&p),
            "## Education\n**University of London**\nBSc — Mathematics\n1833 - 1836\nTutored by De Morgan."
        );
    }

    #[test]
    fn test_education_degree_only() {
        let p = profile(json!({ "education": [{ "degree": "BSc" }] }));
        assert_eq!(build_resume(&p), "## Education\nBSc");
    }

    // ── certifications ──────────────────────────────────────────────────────

    #[test]
    fn test_certification_bullet_with_issued_date() {
        let p = profile(json!({ "certifications": [{
            "name": "CKA",
            "issuer": "CNCF",
            "issued_date": "2021"
        }]}));
        assert_eq!(build_resume(&p), "## Certifications\n- CKA — CNCF (2021)");
    }

    #[test]
    fn test_certification_omits_empty_parenthetical() {
        let p = profile(json!({ "certifications": [{ "name": "CKA", "issuer": "CNCF" }] }));
        assert_eq!(build_resume(&p), "## Certifications\n- CKA — CNCF");
    }

    #[test]
    fn test_certification_url_indented_on_next_line() {
        let p = profile(json!({ "certifications": [{
            "name": "CKA",
            "credential_url": "https://example.org/cka/123"
        }]}));
        assert_eq!(
            build_resume(&p),
            "## Certifications\n- CKA\n  https://example.org/cka/123"
        );
    }

    #[test]
    fn test_certification_url_alone_still_contributes() {
        let p = profile(json!({ "certifications": [{
            "credential_url": "https://example.org/cka/123"
        }]}));
        assert_eq!(
            build_resume(&p),
            "## Certifications\n  https://example.org/cka/123"
        );
    }

    // ── whole-document behavior ─────────────────────────────────────────────

    #[test]
    fn test_sections_in_fixed_order() {
        let p = profile(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "headline": "Analyst",
            "country": "UK",
            "seniority": "Senior",
            "linkedin_url": "https://linkedin.com/in/ada",
            "bio": "First programmer.",
            "skills": ["Analysis"],
            "languages": ["English"],
            "work_experience": [{ "role": "Analyst", "company": "Analytical Engine" }],
            "education": [{ "school": "Home tutoring" }],
            "certifications": [{ "name": "Bernoulli numbers" }]
        }));
        let doc = build_resume(&p);
        let order = [
            "# Ada Lovelace",
            "*Analyst*",
            "UK · Senior",
            "https://linkedin.com/in/ada",
            "## Summary",
            "## Skills",
            "## Languages",
            "## Work Experience",
            "## Education",
            "## Certifications",
        ];
        let mut last = 0;
        for marker in order {
            let at = doc.find(marker).unwrap_or_else(|| panic!("missing {marker}"));
            assert!(at >= last, "{marker} out of order");
            last = at;
        }
        assert!(doc.starts_with("# Ada Lovelace"));
        assert!(!doc.ends_with('\n'));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let p = profile(json!({
            "first_name": "Ada",
            "skills": "Go, Rust",
            "work_experience": [{ "role": "Engineer", "is_current": true }]
        }));
        assert_eq!(build_resume(&p), build_resume(&p));
    }
}
