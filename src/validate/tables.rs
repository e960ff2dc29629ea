//! Pipe-table shape checks for managed section content.

use crate::issue::{Issue, IssueCode};

/// Check column consistency of the pipe tables in a section body.
///
/// `lines` is the slice strictly between a section's markers. Contiguous
/// runs of table rows are checked independently: the first row of a run
/// fixes the expected column count, and the first divergent row in that run
/// produces one [`IssueCode::TableColumnMismatch`]. The rest of the run is
/// not re-checked, so one broken table yields one issue. Separator rows are
/// ordinary rows here and must match the header's column count.
pub fn validate_table_groups<S: AsRef<str>>(lines: &[S], section_id: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut expected: Option<usize> = None;
    let mut run_flagged = false;

    for line in lines {
        match table_column_count(line.as_ref()) {
            Some(columns) => match expected {
                None => {
                    expected = Some(columns);
                    run_flagged = false;
                }
                Some(want) => {
                    if columns != want && !run_flagged {
                        issues.push(Issue::new(
                            IssueCode::TableColumnMismatch,
                            section_id,
                            format!("table row has {columns} columns, expected {want}"),
                        ));
                        run_flagged = true;
                    }
                }
            },
            None => {
                // A non-table line ends the run; the next row starts fresh.
                expected = None;
            }
        }
    }

    issues
}

/// Column count of a pipe-table row, or `None` if the line is not one.
///
/// A row starts with `|` after trimming and contains at least one more `|`.
/// Cells are obtained by stripping one leading and one trailing `|` and
/// splitting on `|`; cell content is not inspected.
fn table_column_count(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix('|')?;
    if !rest.contains('|') {
        return None;
    }
    let inner = rest.strip_suffix('|').unwrap_or(rest);
    Some(inner.split('|').count())
}
