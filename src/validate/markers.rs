//! Marker-pair integrity checks for managed sections.

use crate::issue::{Issue, IssueCode};
use crate::registry::ManagedSection;

/// Validate the start/end marker pair of one managed section.
///
/// Counts are independent: a section can be both missing its start marker
/// and carrying duplicate end markers, and both issues are reported.
/// Ordering is only checked when at least one start marker exists: if no
/// end marker occurs after the first start marker while one exists
/// elsewhere in the document, the pair is misordered.
pub fn validate_marker_pair(content: &str, section: &ManagedSection) -> Vec<Issue> {
    let mut issues = Vec::new();
    let starts = content.matches(section.start_marker).count();
    let ends = content.matches(section.end_marker).count();

    if starts == 0 {
        issues.push(Issue::new(
            IssueCode::MissingStartMarker,
            section.id,
            format!("start marker `{}` not found", section.start_marker),
        ));
    }
    if ends == 0 {
        issues.push(Issue::new(
            IssueCode::MissingEndMarker,
            section.id,
            format!("end marker `{}` not found", section.end_marker),
        ));
    }
    if starts > 1 {
        issues.push(Issue::new(
            IssueCode::DuplicateStartMarker,
            section.id,
            format!("start marker `{}` appears {starts} times", section.start_marker),
        ));
    }
    if ends > 1 {
        issues.push(Issue::new(
            IssueCode::DuplicateEndMarker,
            section.id,
            format!("end marker `{}` appears {ends} times", section.end_marker),
        ));
    }

    if let Some(start_pos) = content.find(section.start_marker) {
        let after_start = &content[start_pos + section.start_marker.len()..];
        if !after_start.contains(section.end_marker) && ends >= 1 {
            issues.push(Issue::new(
                IssueCode::MisorderedMarkers,
                section.id,
                format!(
                    "end marker `{}` exists but none occurs after the first start marker",
                    section.end_marker
                ),
            ));
        }
    }

    issues
}

/// Locate the section's primary span: the first line containing the start
/// marker and the first line after it containing the end marker. Returns
/// inclusive line indices.
pub fn find_span<S: AsRef<str>>(lines: &[S], section: &ManagedSection) -> Option<(usize, usize)> {
    let start = lines
        .iter()
        .position(|l| l.as_ref().contains(section.start_marker))?;
    let end = lines[start + 1..]
        .iter()
        .position(|l| l.as_ref().contains(section.end_marker))?;
    Some((start, start + 1 + end))
}

/// Locate the widest repairable span: the first line containing the start
/// marker and the *last* line containing the end marker after it. The wide
/// span deliberately engulfs any duplicate or stray marker lines caught
/// between the two, so replacing it heals duplication in one step.
pub fn find_widest_span<S: AsRef<str>>(
    lines: &[S],
    section: &ManagedSection,
) -> Option<(usize, usize)> {
    let start = lines
        .iter()
        .position(|l| l.as_ref().contains(section.start_marker))?;
    let end = lines[start + 1..]
        .iter()
        .rposition(|l| l.as_ref().contains(section.end_marker))?;
    Some((start, start + 1 + end))
}
