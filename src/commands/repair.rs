//! Repair command: rebuild broken managed sections from a template.
//! Usage: mend repair <file> --template <file> --doc-type <...> [--write]

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::registry::DocumentType;
use crate::repair::repair_report_markdown;

/// Execute the repair command.
///
/// Without `--write` the repaired document goes to stdout and the summary
/// to stderr, so the output can be piped. With `--write` the file is saved
/// in place.
pub fn execute(
    path: PathBuf,
    template_path: PathBuf,
    doc_type: DocumentType,
    write: bool,
    json: bool,
) -> Result<()> {
    if !doc_type.has_managed_sections() {
        bail!("prompt documents are not auto-repaired; fix them by hand or regenerate");
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;

    let result = repair_report_markdown(&content, &template, doc_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if write {
        if result.changed {
            fs::write(&path, &result.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        print_summary(result.issues_before.len(), result.issues_after.len(), result.changed);
    } else {
        print!("{}", result.content);
        eprintln!(
            "{} {} issue(s) before, {} after{}",
            "→".cyan().bold(),
            result.issues_before.len(),
            result.issues_after.len(),
            if result.changed { "" } else { " (unchanged)" }
        );
    }

    if !result.issues_after.is_empty() {
        bail!("{} issue(s) remain after repair", result.issues_after.len());
    }
    Ok(())
}

fn print_summary(before: usize, after: usize, changed: bool) {
    if changed {
        println!(
            "{} repaired: {} issue(s) before, {} after",
            "✓".green().bold(),
            before,
            after
        );
    } else {
        println!("{} nothing to repair", "✓".green().bold());
    }
}
