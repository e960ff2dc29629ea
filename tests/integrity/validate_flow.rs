//! Validation behavior across document types.

use mend::{validate_document, DocumentType, IssueCode};

use super::helpers::*;

#[test]
fn test_well_formed_documents_are_clean() {
    for doc_type in [DocumentType::Evaluation, DocumentType::Improvement] {
        let doc = well_formed(doc_type);
        assert!(
            validate_document(&doc, doc_type).is_empty(),
            "{doc_type} fixture should be clean"
        );
    }
}

#[test]
fn test_validation_does_not_mutate() {
    let doc = drop_markers(
        &well_formed(DocumentType::Improvement),
        DocumentType::Improvement,
        "optimization",
    );
    let before = doc.clone();
    let first = validate_document(&doc, DocumentType::Improvement);
    let second = validate_document(&doc, DocumentType::Improvement);
    assert_eq!(doc, before);
    assert_eq!(first, second);
}

#[test]
fn test_each_document_type_uses_its_own_registry() {
    // An evaluation document is not a valid improvement document: the
    // improvement-only sections are all missing.
    let doc = well_formed(DocumentType::Evaluation);
    let issues = validate_document(&doc, DocumentType::Improvement);
    assert!(issues
        .iter()
        .any(|i| i.section_id == "error-exploration" && i.code == IssueCode::MissingStartMarker));
}

#[test]
fn test_crlf_document_validates_like_lf() {
    let doc = well_formed(DocumentType::Evaluation);
    let crlf = doc.replace('\n', "\r\n");
    assert_eq!(
        validate_document(&doc, DocumentType::Evaluation),
        validate_document(&crlf, DocumentType::Evaluation)
    );
}

#[test]
fn test_table_mismatch_boundary() {
    let doc = well_formed(DocumentType::Evaluation).replacen(
        "| item | value |\n| --- | --- |\n| generated | 1 |",
        "| a | b |\n| c |",
        1,
    );
    let issues = validate_document(&doc, DocumentType::Evaluation);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, IssueCode::TableColumnMismatch);

    let equal = well_formed(DocumentType::Evaluation).replacen(
        "| item | value |\n| --- | --- |\n| generated | 1 |",
        "| a | b |\n| c | d |",
        1,
    );
    assert!(validate_document(&equal, DocumentType::Evaluation).is_empty());
}
