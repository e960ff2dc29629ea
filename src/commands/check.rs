//! Check command: validate one managed document without touching it.
//! Usage: mend check <file> --doc-type <evaluation|improvement|prompt>

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::issue::Issue;
use crate::registry::DocumentType;
use crate::sensitive::scan_sensitive_paths;
use crate::validate::validate_document;

/// Execute the check command.
///
/// # Arguments
/// * `path` - Document to validate
/// * `doc_type` - Which rule set to apply
/// * `json` - Emit the issue list as JSON instead of human output
/// * `scan` - Extra workspace paths to screen for credential files
pub fn execute(path: PathBuf, doc_type: DocumentType, json: bool, scan: Vec<String>) -> Result<()> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut issues = validate_document(&content, doc_type);
    issues.extend(scan_sensitive_paths(&scan));

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else {
        print_issues(&path, &issues);
    }

    if !issues.is_empty() {
        bail!("{} issue(s) found in {}", issues.len(), path.display());
    }
    Ok(())
}

fn print_issues(path: &std::path::Path, issues: &[Issue]) {
    if issues.is_empty() {
        println!(
            "{} {} is clean",
            "✓".green().bold(),
            path.display().to_string().bold()
        );
        return;
    }

    println!("{}", "Issues Detected".bold());
    println!("{}", "─".repeat(40).dimmed());
    for issue in issues {
        println!(
            "{} [{}] {}",
            "✗".red().bold(),
            issue.section_id.yellow(),
            issue.message
        );
    }
}
