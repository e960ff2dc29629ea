//! Version-sync command: keep release docs aligned with the package version.
//! Usage: mend version-sync --package-version <v> --readme <file> --changelog <file>

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::version_sync::{fix_docs_version_sync, validate_docs_version_sync, DocsVersionInput};

/// Execute the version-sync command.
///
/// Validates every known version mention in the given docs; with `--fix`,
/// rewrites the readme and the changelog in place first.
pub fn execute(
    package_version: String,
    readme_path: PathBuf,
    changelog_path: PathBuf,
    ext_readme_path: Option<PathBuf>,
    fix: bool,
) -> Result<()> {
    let readme = read(&readme_path)?;
    let changelog = read(&changelog_path)?;
    let ext_readme = ext_readme_path.as_deref().map(read).transpose()?;

    let (readme, changelog) = if fix {
        let fixed = fix_docs_version_sync(&package_version, &readme, &changelog);
        if fixed.readme_changed {
            fs::write(&readme_path, &fixed.readme_content)
                .with_context(|| format!("Failed to write {}", readme_path.display()))?;
            println!("{} updated {}", "✓".green().bold(), readme_path.display());
        }
        if fixed.changelog_changed {
            fs::write(&changelog_path, &fixed.changelog_content)
                .with_context(|| format!("Failed to write {}", changelog_path.display()))?;
            println!("{} updated {}", "✓".green().bold(), changelog_path.display());
        }
        (fixed.readme_content, fixed.changelog_content)
    } else {
        (readme, changelog)
    };

    let issues = validate_docs_version_sync(&DocsVersionInput {
        package_version: &package_version,
        readme: &readme,
        ext_readme: ext_readme.as_deref(),
        changelog: &changelog,
    });

    if issues.is_empty() {
        println!(
            "{} docs agree with version {}",
            "✓".green().bold(),
            package_version.bold()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("{} [{}] {}", "✗".red().bold(), issue.section_id.yellow(), issue.message);
    }
    bail!("{} version mismatch(es) found", issues.len());
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
