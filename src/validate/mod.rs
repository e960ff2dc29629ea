//! Document validation dispatch.
//!
//! `validate_document` is the single read-only entry point: it routes the
//! prompt document to the heading/checklist rules and the report documents
//! through their registered marker sections. Validation never mutates its
//! input and never fails partially; the complete issue list is always
//! returned.

pub mod markers;
pub mod prompt;
pub mod tables;

use crate::issue::Issue;
use crate::lines::normalize_newlines;
use crate::registry::{sections_for, DocumentType};

pub use markers::validate_marker_pair;
pub use prompt::{validate_prompt_markdown, FINAL_COMPLETION_MESSAGE};
pub use tables::validate_table_groups;

/// Validate a document of the given type, returning every detected issue.
pub fn validate_document(content: &str, doc_type: DocumentType) -> Vec<Issue> {
    if doc_type == DocumentType::Prompt {
        return validate_prompt_markdown(content);
    }

    let (normalized, _) = normalize_newlines(content);
    let lines: Vec<&str> = normalized.lines().collect();
    let mut issues = Vec::new();

    for section in sections_for(doc_type) {
        issues.extend(validate_marker_pair(&normalized, section));

        if section.validate_tables {
            // Table rules apply to the lines strictly between the markers,
            // and only when a span can be located at all.
            if let Some((start, end)) = markers::find_span(&lines, section) {
                if end > start + 1 {
                    issues.extend(validate_table_groups(&lines[start + 1..end], section.id));
                }
            }
        }
    }

    issues
}
