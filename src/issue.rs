//! Structural defect reports.
//!
//! Malformed documents are data, not errors: every detected defect is
//! reported as an [`Issue`] value and validation always returns the complete
//! list. An empty list means the document is clean.

use serde::{Deserialize, Serialize};

/// Closed set of defect codes the validators can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    MissingStartMarker,
    MissingEndMarker,
    DuplicateStartMarker,
    DuplicateEndMarker,
    MisorderedMarkers,
    TableColumnMismatch,
    DocsVersionMismatch,
    SensitiveFilePresent,
    PromptContainsHangul,
    PromptMissingTitle,
    PromptChecklistSectionMissing,
    PromptMissingChecklist,
    PromptChecklistItemSectionMissing,
    PromptFinalCompletionSectionMissing,
    PromptFinalCompletionNotLast,
    PromptFinalCompletionMessageMissing,
}

/// One detected structural defect.
///
/// Issues carry no severity; any non-empty issue list means "not clean".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    /// The managed-section id the issue belongs to, or a pseudo-id
    /// (`"prompt"`, `"docs"`, a checklist identifier, a file path) for
    /// issues that are not tied to a marker-pair section.
    pub section_id: String,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, section_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            section_id: section_id.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.section_id, self.message)
    }
}
