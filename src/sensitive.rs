//! Filename screen for secret-bearing files.
//!
//! The check command can be handed a list of workspace-relative paths and
//! flags any that look like credentials. Pure: the caller does the walking,
//! this module only matches names.

use crate::issue::{Issue, IssueCode};

/// File names that must never ship with a report bundle.
const SENSITIVE_FILE_NAMES: &[&str] = &["id_rsa", "id_ed25519", "credentials.json", ".npmrc"];

/// Extensions that indicate key material.
const SENSITIVE_EXTENSIONS: &[&str] = &["pem", "key", "p12", "pfx"];

/// Screen a set of paths for secret-bearing file names.
pub fn scan_sensitive_paths<S: AsRef<str>>(paths: &[S]) -> Vec<Issue> {
    paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| is_sensitive_path(path))
        .map(|path| {
            Issue::new(
                IssueCode::SensitiveFilePresent,
                path,
                format!("`{path}` looks like a credential file and must not be committed"),
            )
        })
        .collect()
}

fn is_sensitive_path(path: &str) -> bool {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if SENSITIVE_FILE_NAMES.contains(&name) || name == ".env" || name.starts_with(".env.") {
        return true;
    }
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && SENSITIVE_EXTENSIONS.contains(&ext))
}
