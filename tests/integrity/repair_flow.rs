//! End-to-end repair behavior against a well-formed template.

use mend::{repair_report_markdown, sections_for, validate_document, DocumentType, IssueCode};

use super::helpers::*;

#[test]
fn test_repair_converges_on_corrupted_document() {
    let template = well_formed(DocumentType::Improvement);
    // Corrupt three sections in different ways.
    let doc = template
        .replace(
            "<!-- AUTO-IMPROVEMENT-LIST-START -->",
            "<!-- AUTO-IMPROVEMENT-LIST-START -->\n<!-- AUTO-IMPROVEMENT-LIST-START -->",
        )
        .replace("<!-- AUTO-SUMMARY-END -->\n", "")
        .replacen("| generated | 1 |", "| generated |", 1);

    let result = repair_report_markdown(&doc, &template, DocumentType::Improvement);
    assert!(result.changed);
    assert!(!result.issues_before.is_empty());
    assert!(result.issues_after.is_empty(), "{:?}", result.issues_after);

    // Marker count invariant: every marker literal appears exactly once.
    for section in sections_for(DocumentType::Improvement) {
        assert_eq!(result.content.matches(section.start_marker).count(), 1);
        assert_eq!(result.content.matches(section.end_marker).count(), 1);
    }
}

#[test]
fn test_repair_preserves_user_prose() {
    let template = well_formed(DocumentType::Evaluation);
    let doc = drop_markers(&template, DocumentType::Evaluation, "detail");
    let result = repair_report_markdown(&doc, &template, DocumentType::Evaluation);
    assert!(result.issues_after.is_empty());
    assert!(result.content.contains("Hand-written introduction."));
    assert!(result.content.contains("Hand-written closing note."));
}

#[test]
fn test_repair_locality() {
    let template = well_formed(DocumentType::Evaluation);
    let marked = template.replacen(
        "Generated prose content.",
        "edited tldr body that must not move",
        1,
    );
    let doc = marked.replace("<!-- AUTO-TREND-END -->\n", "");
    let result = repair_report_markdown(&doc, &template, DocumentType::Evaluation);
    assert!(result.issues_after.is_empty());
    // tldr had no issues, so its edited body survives repair.
    assert!(result.content.contains("edited tldr body that must not move"));
}

#[test]
fn test_repair_noop_on_clean_document() {
    let template = well_formed(DocumentType::Evaluation);
    let result = repair_report_markdown(&template, &template, DocumentType::Evaluation);
    assert!(!result.changed);
    assert!(result.issues_before.is_empty());
    assert_eq!(result.content, template);
}

#[test]
fn test_repair_empty_document_yields_template() {
    let template = well_formed(DocumentType::Improvement);
    let result = repair_report_markdown("", &template, DocumentType::Improvement);
    assert!(result.changed);
    assert!(result.issues_after.is_empty());
    assert_eq!(result.content, template);
}

#[test]
fn test_repair_keeps_crlf() {
    let template = well_formed(DocumentType::Evaluation);
    let doc = drop_markers(&template, DocumentType::Evaluation, "score").replace('\n', "\r\n");
    let result = repair_report_markdown(&doc, &template, DocumentType::Evaluation);
    assert!(result.issues_after.is_empty());
    assert!(result.content.contains("\r\n"));
    assert!(!result.content.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_prompt_content_never_altered() {
    let result = repair_report_markdown(
        "# Title\nno checklist at all",
        "# Template",
        DocumentType::Prompt,
    );
    assert!(!result.changed);
    assert_eq!(result.content, "# Title\nno checklist at all");
    assert!(result
        .issues_before
        .iter()
        .any(|i| i.code == IssueCode::PromptChecklistSectionMissing));
}

#[test]
fn test_repaired_document_validates_clean() {
    let template = well_formed(DocumentType::Improvement);
    let doc = drop_markers(&template, DocumentType::Improvement, "feature-list");
    let result = repair_report_markdown(&doc, &template, DocumentType::Improvement);
    assert!(validate_document(&result.content, DocumentType::Improvement).is_empty());
}
