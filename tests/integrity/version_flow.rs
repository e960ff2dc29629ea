//! Docs version-sync round trip.

use mend::{fix_docs_version_sync, validate_docs_version_sync, DocsVersionInput};

const README: &str = "\
# Report Tool

Current release: 1.2.0

![version](https://img.shields.io/badge/version-1.2.0-blue)

Download [report-tool-1.2.0.vsix](https://github.com/acme/report-tool/releases/download/v1.2.0/report-tool-1.2.0.vsix)
";

const CHANGELOG: &str = "# Changelog\n\n## [1.2.0] - 2026-07-01\n\n- previous release\n";

#[test]
fn test_stale_docs_report_multiple_mismatches() {
    let issues = validate_docs_version_sync(&DocsVersionInput {
        package_version: "1.2.3",
        readme: README,
        ext_readme: Some(README),
        changelog: CHANGELOG,
    });
    // Changelog heading, readme token, vsix filename and URL all drifted.
    assert!(issues.len() >= 2, "{issues:?}");
}

#[test]
fn test_fix_then_validate_is_clean() {
    let fix = fix_docs_version_sync("1.2.3", README, CHANGELOG);
    assert!(fix.readme_changed);
    assert!(fix.changelog_changed);

    let issues = validate_docs_version_sync(&DocsVersionInput {
        package_version: "1.2.3",
        readme: &fix.readme_content,
        ext_readme: Some(&fix.readme_content),
        changelog: &fix.changelog_content,
    });
    assert!(issues.is_empty(), "{issues:?}");
}

#[test]
fn test_fix_touches_only_version_mentions() {
    let fix = fix_docs_version_sync("1.2.3", README, CHANGELOG);
    assert!(fix.readme_content.contains("# Report Tool"));
    assert!(fix.changelog_content.contains("- previous release"));
    assert!(fix.changelog_content.contains("## [1.2.3] - 2026-07-01"));
    assert!(!fix.readme_content.contains("1.2.0"));
}
