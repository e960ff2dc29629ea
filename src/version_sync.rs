//! Version consistency checks across release documentation.
//!
//! The package manifest is the single source of truth for the version
//! string; the readme, the extended readme, and the changelog each mention
//! it in several shapes (bare token, packaged `.vsix` filename, release
//! download URL, version badge, changelog heading). The validator reports
//! every mention that drifted; the fixer rewrites them in place with literal
//! pattern substitution, preserving each input's newline convention.

use regex::Regex;
use serde::Serialize;

use crate::issue::{Issue, IssueCode};
use crate::lines::{normalize_newlines, restore_newlines};

const VERSION_TOKEN: &str = r"\d+\.\d+\.\d+";

/// Inputs to the docs version check. `ext_readme` is the marketplace-facing
/// readme variant, the only one that carries a version badge requirement.
#[derive(Debug, Clone, Copy)]
pub struct DocsVersionInput<'a> {
    pub package_version: &'a str,
    pub readme: &'a str,
    pub ext_readme: Option<&'a str>,
    pub changelog: &'a str,
}

/// Output of [`fix_docs_version_sync`]. The `changed` flags are true only
/// when the text differs after newline normalization.
#[derive(Debug, Clone, Serialize)]
pub struct DocsVersionFix {
    pub readme_content: String,
    pub changelog_content: String,
    pub readme_changed: bool,
    pub changelog_changed: bool,
}

/// Check every known version mention against `package_version`.
pub fn validate_docs_version_sync(input: &DocsVersionInput) -> Vec<Issue> {
    let mut issues = Vec::new();
    let version = input.package_version.trim();

    if version.is_empty() {
        issues.push(Issue::new(
            IssueCode::DocsVersionMismatch,
            "docs",
            "package version is empty; documentation cannot be checked",
        ));
        return issues;
    }

    check_changelog(input.changelog, version, &mut issues);
    check_readme(input.readme, version, "readme", false, &mut issues);
    if let Some(ext) = input.ext_readme {
        check_readme(ext, version, "readme-ext", true, &mut issues);
    }

    issues
}

fn check_changelog(changelog: &str, version: &str, issues: &mut Vec<Issue>) {
    let heading_re =
        Regex::new(&format!(r"(?m)^##\s?\[({VERSION_TOKEN})\]")).expect("Invalid regex pattern");
    let (normalized, _) = normalize_newlines(changelog);
    match heading_re.captures(&normalized) {
        None => issues.push(Issue::new(
            IssueCode::DocsVersionMismatch,
            "changelog",
            "changelog has no `## [x.y.z]` version heading",
        )),
        Some(caps) => {
            let found = &caps[1];
            if found != version {
                issues.push(Issue::new(
                    IssueCode::DocsVersionMismatch,
                    "changelog",
                    format!("changelog heading declares {found}, package version is {version}"),
                ));
            }
        }
    }
}

fn check_readme(text: &str, version: &str, label: &str, badge: bool, issues: &mut Vec<Issue>) {
    let token_re = Regex::new(VERSION_TOKEN).expect("Invalid regex pattern");
    if !token_re.find_iter(text).any(|m| m.as_str() == version) {
        issues.push(Issue::new(
            IssueCode::DocsVersionMismatch,
            label,
            format!("no mention of version {version} found"),
        ));
    }

    // Packaged artifact filenames, distinct offending versions only.
    let artifact_re =
        Regex::new(&format!(r"-({VERSION_TOKEN})\.vsix")).expect("Invalid regex pattern");
    let mut seen: Vec<String> = Vec::new();
    for caps in artifact_re.captures_iter(text) {
        let found = caps[1].to_string();
        if found != version && !seen.contains(&found) {
            issues.push(Issue::new(
                IssueCode::DocsVersionMismatch,
                label,
                format!(".vsix filename references {found}, package version is {version}"),
            ));
            seen.push(found);
        }
    }

    // Release download URLs: the path segment and the filename must agree
    // with the package version together.
    let url_re = Regex::new(&format!(
        r"releases/download/v({VERSION_TOKEN})/[^\s()]*-({VERSION_TOKEN})\.vsix"
    ))
    .expect("Invalid regex pattern");
    let mut seen_urls: Vec<(String, String)> = Vec::new();
    for caps in url_re.captures_iter(text) {
        let path_version = caps[1].to_string();
        let file_version = caps[2].to_string();
        if path_version == version && file_version == version {
            continue;
        }
        let pair = (path_version, file_version);
        if !seen_urls.contains(&pair) {
            issues.push(Issue::new(
                IssueCode::DocsVersionMismatch,
                label,
                format!(
                    "download URL references v{}/{}, package version is {version}",
                    pair.0, pair.1
                ),
            ));
            seen_urls.push(pair);
        }
    }

    if badge {
        let badge_re = Regex::new(&format!(
            r"img\.shields\.io/badge/version-({VERSION_TOKEN})-"
        ))
        .expect("Invalid regex pattern");
        if let Some(caps) = badge_re.captures(text) {
            let found = &caps[1];
            if found != version {
                issues.push(Issue::new(
                    IssueCode::DocsVersionMismatch,
                    label,
                    format!("version badge shows {found}, package version is {version}"),
                ));
            }
        }
    }
}

/// Rewrite drifted version mentions in the readme and the changelog.
///
/// Rewrites, in order: the first bare version token, every `.vsix` filename
/// version, every release download URL (path and filename together), and
/// the version badge where present. Each input keeps its own newline style.
pub fn fix_docs_version_sync(
    package_version: &str,
    readme: &str,
    changelog: &str,
) -> DocsVersionFix {
    let version = package_version.trim();

    let (readme_normalized, readme_style) = normalize_newlines(readme);
    let fixed_readme = rewrite_readme(&readme_normalized, version);
    let readme_changed = fixed_readme != readme_normalized;

    let (changelog_normalized, changelog_style) = normalize_newlines(changelog);
    let fixed_changelog = rewrite_changelog(&changelog_normalized, version);
    let changelog_changed = fixed_changelog != changelog_normalized;

    DocsVersionFix {
        readme_content: restore_newlines(&fixed_readme, readme_style),
        changelog_content: restore_newlines(&fixed_changelog, changelog_style),
        readme_changed,
        changelog_changed,
    }
}

fn rewrite_readme(text: &str, version: &str) -> String {
    let token_re = Regex::new(VERSION_TOKEN).expect("Invalid regex pattern");
    let mut out = token_re.replacen(text, 1, version).into_owned();

    let artifact_re =
        Regex::new(&format!(r"-{VERSION_TOKEN}\.vsix")).expect("Invalid regex pattern");
    out = artifact_re
        .replace_all(&out, format!("-{version}.vsix"))
        .into_owned();

    let url_path_re =
        Regex::new(&format!(r"releases/download/v{VERSION_TOKEN}/")).expect("Invalid regex pattern");
    out = url_path_re
        .replace_all(&out, format!("releases/download/v{version}/"))
        .into_owned();

    let badge_re = Regex::new(&format!(
        r"img\.shields\.io/badge/version-{VERSION_TOKEN}-"
    ))
    .expect("Invalid regex pattern");
    out = badge_re
        .replace_all(&out, format!("img.shields.io/badge/version-{version}-"))
        .into_owned();

    out
}

fn rewrite_changelog(text: &str, version: &str) -> String {
    let heading_re =
        Regex::new(&format!(r"(?m)^(##\s?)\[{VERSION_TOKEN}\]")).expect("Invalid regex pattern");
    heading_re
        .replacen(text, 1, format!("${{1}}[{version}]"))
        .into_owned()
}
