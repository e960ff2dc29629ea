//! Shared fixtures for integrity tests.

use mend::{sections_for, DocumentType};

/// A well-formed document of the given type, with a table in every
/// table-validated section and prose elsewhere. Doubles as the repair
/// template in tests.
pub fn well_formed(doc_type: DocumentType) -> String {
    let title = match doc_type {
        DocumentType::Evaluation => "# Evaluation Report",
        DocumentType::Improvement => "# Improvement Report",
        DocumentType::Prompt => "# Prompt",
    };
    let mut doc = format!("{title}\n\nHand-written introduction.\n");
    for section in sections_for(doc_type) {
        let body = if section.validate_tables {
            "| item | value |\n| --- | --- |\n| generated | 1 |"
        } else {
            "Generated prose content."
        };
        doc.push_str(&format!(
            "\n{}\n{}\n{}\n",
            section.start_marker, body, section.end_marker
        ));
    }
    doc.push_str("\nHand-written closing note.\n");
    doc
}

/// Remove one section's marker lines entirely, leaving its body orphaned.
pub fn drop_markers(doc: &str, doc_type: DocumentType, section_id: &str) -> String {
    let section = mend::registry::find_section(doc_type, section_id).unwrap();
    doc.replace(&format!("{}\n", section.start_marker), "")
        .replace(&format!("{}\n", section.end_marker), "")
}
