//! Structural checks for the prompt document.
//!
//! The prompt document has no marker-pair sections. Its contract is
//! positional: a title on the first non-blank line, an execution checklist
//! whose identifiers cross-reference per-item headings, and a final
//! completion section that must close the document with a fixed sentence.
//! The whole file must also be free of Hangul, since the prompt is required
//! to be written in English only.

use regex::Regex;

use crate::issue::{Issue, IssueCode};
use crate::lines::{is_blank, normalize_newlines};

/// Exact sentence that must appear under the final completion heading.
pub const FINAL_COMPLETION_MESSAGE: &str =
    "All checklist items above have been executed and verified.";

/// Unicode block of precomposed Hangul syllables (U+AC00..=U+D7A3).
const HANGUL_SYLLABLES: std::ops::RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// Validate the prompt document. Returns the complete issue list; an empty
/// list means the prompt is structurally sound.
pub fn validate_prompt_markdown(content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if content.chars().any(|c| HANGUL_SYLLABLES.contains(&c)) {
        issues.push(Issue::new(
            IssueCode::PromptContainsHangul,
            "prompt",
            "prompt contains Hangul characters; it must be written in English",
        ));
    }

    let (normalized, _) = normalize_newlines(content);
    let lines: Vec<&str> = normalized.lines().collect();

    check_title(&lines, &mut issues);
    check_checklist(&lines, &mut issues);
    check_final_section(&lines, &mut issues);

    issues
}

fn check_title(lines: &[&str], issues: &mut Vec<Issue>) {
    let first = lines.iter().find(|l| !is_blank(l));
    if !matches!(first, Some(line) if line.starts_with("# ")) {
        issues.push(Issue::new(
            IssueCode::PromptMissingTitle,
            "prompt",
            "first non-blank line must be a `# ` title",
        ));
    }
}

fn check_checklist(lines: &[&str], issues: &mut Vec<Issue>) {
    let heading_re = Regex::new(r"^##\s+Execution Checklist").expect("Invalid regex pattern");
    let Some(heading_idx) = lines.iter().position(|l| heading_re.is_match(l)) else {
        issues.push(Issue::new(
            IssueCode::PromptChecklistSectionMissing,
            "prompt",
            "`## Execution Checklist` section not found",
        ));
        return;
    };

    // The checklist span runs until a horizontal rule or the next level-2
    // heading, whichever comes first.
    let span_end = lines[heading_idx + 1..]
        .iter()
        .position(|l| is_horizontal_rule(l) || l.starts_with("## "))
        .map(|offset| heading_idx + 1 + offset)
        .unwrap_or(lines.len());

    let ids = collect_checklist_ids(&lines[heading_idx + 1..span_end]);
    if ids.is_empty() {
        issues.push(Issue::new(
            IssueCode::PromptMissingChecklist,
            "prompt",
            "execution checklist contains no PROMPT/OPT identifiers",
        ));
        return;
    }

    for id in ids {
        let heading = format!("### [{id}]");
        if !lines.iter().any(|l| l.starts_with(&heading)) {
            issues.push(Issue::new(
                IssueCode::PromptChecklistItemSectionMissing,
                id.clone(),
                format!("checklist item `{id}` has no `### [{id}]` section"),
            ));
        }
    }
}

/// Distinct checklist identifiers from the second column of pipe-table
/// rows, in first-seen order.
fn collect_checklist_ids(span: &[&str]) -> Vec<String> {
    let id_re = Regex::new(r"^(PROMPT-\d{3}|OPT-\d+)$").expect("Invalid regex pattern");
    let mut ids: Vec<String> = Vec::new();
    for line in span {
        let Some(cells) = table_cells(line) else {
            continue;
        };
        let Some(cell) = cells.get(1) else {
            continue;
        };
        if id_re.is_match(cell) && !ids.iter().any(|known| known == cell) {
            ids.push(cell.clone());
        }
    }
    ids
}

fn check_final_section(lines: &[&str], issues: &mut Vec<Issue>) {
    let Some(final_idx) = lines.iter().position(|l| l.starts_with("## Final Completion")) else {
        issues.push(Issue::new(
            IssueCode::PromptFinalCompletionSectionMissing,
            "prompt",
            "`## Final Completion` section not found",
        ));
        return;
    };

    let last_h2 = lines
        .iter()
        .rposition(|l| l.starts_with("## "))
        .unwrap_or(final_idx);
    if final_idx < last_h2 {
        issues.push(Issue::new(
            IssueCode::PromptFinalCompletionNotLast,
            "prompt",
            "`## Final Completion` must be the last level-2 section",
        ));
    }

    let tail = lines[final_idx + 1..].join("\n");
    if !tail.contains(FINAL_COMPLETION_MESSAGE) {
        issues.push(Issue::new(
            IssueCode::PromptFinalCompletionMessageMissing,
            "prompt",
            format!("final section must contain the sentence `{FINAL_COMPLETION_MESSAGE}`"),
        ));
    }
}

/// Cells of a pipe-table row, trimmed, or `None` for non-table lines.
fn table_cells(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix('|')?;
    if !rest.contains('|') {
        return None;
    }
    let inner = rest.strip_suffix('|').unwrap_or(rest);
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

fn is_horizontal_rule(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3
        && (trimmed.chars().all(|c| c == '-')
            || trimmed.chars().all(|c| c == '*')
            || trimmed.chars().all(|c| c == '_'))
}
