//! Repair engine for marker-section report documents.
//!
//! Repair replaces each broken section with the matching block from a
//! well-formed template of the same document type. The replacement span in
//! the current document is deliberately the *widest* one (first start
//! marker line through last end marker line after it), so duplicate and
//! stray marker lines trapped in between are healed by the same replace.
//! When no valid span exists, every stray marker line is stripped and a
//! fresh block is inserted at the earliest stray position (or at document
//! end), padded with single blank lines where it would touch non-blank
//! content. Everything outside the affected spans is preserved byte for
//! byte.

use serde::Serialize;
use tracing::debug;

use crate::issue::Issue;
use crate::lines::{is_blank, normalize_newlines, LineBuffer};
use crate::registry::{sections_for, DocumentType, ManagedSection};
use crate::validate::markers::{find_span, find_widest_span};
use crate::validate::validate_document;

/// Outcome of one repair call.
///
/// If `issues_after` is non-empty for a section, that section must not be
/// treated as fixed, regardless of `changed`.
#[derive(Debug, Clone, Serialize)]
pub struct RepairResult {
    pub content: String,
    pub changed: bool,
    pub issues_before: Vec<Issue>,
    pub issues_after: Vec<Issue>,
}

/// Repair a report document against a template of the same type.
///
/// Prompt documents are never altered: their issues are returned unchanged
/// for the caller to route elsewhere. Sections with zero issues are left
/// byte-identical aside from global newline normalization.
pub fn repair_report_markdown(
    content: &str,
    template: &str,
    doc_type: DocumentType,
) -> RepairResult {
    if doc_type == DocumentType::Prompt {
        let issues = validate_document(content, doc_type);
        return RepairResult {
            content: content.to_string(),
            changed: false,
            issues_before: issues.clone(),
            issues_after: issues,
        };
    }

    // An empty document is replaced by the template wholesale.
    if content.trim().is_empty() {
        let (normalized_template, _) = normalize_newlines(template);
        let changed = !normalized_template.trim().is_empty();
        let issues_after = validate_document(&normalized_template, doc_type);
        return RepairResult {
            content: normalized_template,
            changed,
            issues_before: validate_document(content, doc_type),
            issues_after,
        };
    }

    let issues_before = validate_document(content, doc_type);
    let mut buffer = LineBuffer::parse(content);
    let original_normalized = buffer.normalized();
    let template_buffer = LineBuffer::parse(template);

    for section in sections_for(doc_type) {
        if !issues_before.iter().any(|i| i.section_id == section.id) {
            continue;
        }
        let Some(block) = template_block(&template_buffer.lines, section) else {
            debug!(section = section.id, "template has no block for section, skipping");
            continue;
        };
        repair_section(&mut buffer.lines, section, &block);
    }

    let changed = buffer.normalized() != original_normalized;
    let content = buffer.render();
    let issues_after = validate_document(&content, doc_type);

    RepairResult {
        content,
        changed,
        issues_before,
        issues_after,
    }
}

/// Extract a section's block (marker lines inclusive) from the template.
fn template_block(template_lines: &[String], section: &ManagedSection) -> Option<Vec<String>> {
    let (start, end) = find_span(template_lines, section)?;
    Some(template_lines[start..=end].to_vec())
}

fn repair_section(lines: &mut Vec<String>, section: &ManagedSection, block: &[String]) {
    if let Some((start, end)) = find_widest_span(lines, section) {
        debug!(
            section = section.id,
            start, end, "replacing widest marker span"
        );
        lines.splice(start..=end, block.iter().cloned());
    } else {
        debug!(section = section.id, "no valid span, stripping strays and inserting");
        strip_and_insert(lines, section, block);
    }
}

/// Remove every line containing either marker literal, then insert the
/// template block at the position of the earliest stray line (or at the
/// end of the document if there was none).
fn strip_and_insert(lines: &mut Vec<String>, section: &ManagedSection, block: &[String]) {
    let mut first_stray: Option<usize> = None;
    let mut kept: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines.drain(..) {
        if line.contains(section.start_marker) || line.contains(section.end_marker) {
            if first_stray.is_none() {
                first_stray = Some(kept.len());
            }
        } else {
            kept.push(line);
        }
    }

    let insert_at = first_stray.unwrap_or(kept.len());
    let mut insertion: Vec<String> = Vec::with_capacity(block.len() + 2);
    if insert_at > 0 && !is_blank(&kept[insert_at - 1]) {
        insertion.push(String::new());
    }
    insertion.extend(block.iter().cloned());
    if insert_at < kept.len() && !is_blank(&kept[insert_at]) {
        insertion.push(String::new());
    }

    kept.splice(insert_at..insert_at, insertion);
    *lines = kept;
}
