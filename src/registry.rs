//! Static registry of managed sections per document type.
//!
//! Each report document owns a fixed set of machine-generated regions
//! delimited by single-line HTML-comment markers. The registry is the single
//! source of truth for which markers a document must carry; it is fixed at
//! build time and never mutated.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The kinds of managed documents the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Evaluation report (`evaluation-report.md`).
    Evaluation,
    /// Improvement report (`improvement-report.md`).
    Improvement,
    /// Prompt document; structured by headings and a checklist table
    /// instead of marker pairs.
    Prompt,
}

impl DocumentType {
    /// Whether this document type is structured by marker-pair sections.
    pub fn has_managed_sections(self) -> bool {
        !matches!(self, DocumentType::Prompt)
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentType::Evaluation => "evaluation",
            DocumentType::Improvement => "improvement",
            DocumentType::Prompt => "prompt",
        };
        write!(f, "{name}")
    }
}

/// One managed section: a marker pair plus its structural rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedSection {
    /// Stable short name, used as `section_id` on issues.
    pub id: &'static str,
    /// Exact start-marker line, matched as a literal substring.
    pub start_marker: &'static str,
    /// Exact end-marker line, matched as a literal substring.
    pub end_marker: &'static str,
    /// Whether pipe tables between the markers must be column-consistent.
    pub validate_tables: bool,
}

/// Sections of the evaluation report, in document order.
pub const EVALUATION_SECTIONS: &[ManagedSection] = &[
    ManagedSection {
        id: "tldr",
        start_marker: "<!-- AUTO-TLDR-START -->",
        end_marker: "<!-- AUTO-TLDR-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "risk-summary",
        start_marker: "<!-- AUTO-RISK-SUMMARY-START -->",
        end_marker: "<!-- AUTO-RISK-SUMMARY-END -->",
        validate_tables: true,
    },
    ManagedSection {
        id: "overview",
        start_marker: "<!-- AUTO-OVERVIEW-START -->",
        end_marker: "<!-- AUTO-OVERVIEW-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "structure",
        start_marker: "<!-- AUTO-STRUCTURE-START -->",
        end_marker: "<!-- AUTO-STRUCTURE-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "score",
        start_marker: "<!-- AUTO-SCORE-START -->",
        end_marker: "<!-- AUTO-SCORE-END -->",
        validate_tables: true,
    },
    ManagedSection {
        id: "score-mapping",
        start_marker: "<!-- AUTO-SCORE-MAPPING-START -->",
        end_marker: "<!-- AUTO-SCORE-MAPPING-END -->",
        validate_tables: true,
    },
    ManagedSection {
        id: "detail",
        start_marker: "<!-- AUTO-DETAIL-START -->",
        end_marker: "<!-- AUTO-DETAIL-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "summary",
        start_marker: "<!-- AUTO-SUMMARY-START -->",
        end_marker: "<!-- AUTO-SUMMARY-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "trend",
        start_marker: "<!-- AUTO-TREND-START -->",
        end_marker: "<!-- AUTO-TREND-END -->",
        validate_tables: true,
    },
];

/// Sections of the improvement report, in document order.
pub const IMPROVEMENT_SECTIONS: &[ManagedSection] = &[
    ManagedSection {
        id: "overview",
        start_marker: "<!-- AUTO-OVERVIEW-START -->",
        end_marker: "<!-- AUTO-OVERVIEW-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "error-exploration",
        start_marker: "<!-- AUTO-ERROR-EXPLORATION-START -->",
        end_marker: "<!-- AUTO-ERROR-EXPLORATION-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "summary",
        start_marker: "<!-- AUTO-SUMMARY-START -->",
        end_marker: "<!-- AUTO-SUMMARY-END -->",
        validate_tables: false,
    },
    ManagedSection {
        id: "improvement-list",
        start_marker: "<!-- AUTO-IMPROVEMENT-LIST-START -->",
        end_marker: "<!-- AUTO-IMPROVEMENT-LIST-END -->",
        validate_tables: true,
    },
    ManagedSection {
        id: "optimization",
        start_marker: "<!-- AUTO-OPTIMIZATION-START -->",
        end_marker: "<!-- AUTO-OPTIMIZATION-END -->",
        validate_tables: true,
    },
    ManagedSection {
        id: "feature-list",
        start_marker: "<!-- AUTO-FEATURE-LIST-START -->",
        end_marker: "<!-- AUTO-FEATURE-LIST-END -->",
        validate_tables: true,
    },
];

/// Look up the managed sections for a document type.
///
/// Prompt documents have no marker-pair sections; they return an empty
/// slice and are validated by [`crate::validate::prompt`] instead.
pub fn sections_for(doc_type: DocumentType) -> &'static [ManagedSection] {
    match doc_type {
        DocumentType::Evaluation => EVALUATION_SECTIONS,
        DocumentType::Improvement => IMPROVEMENT_SECTIONS,
        DocumentType::Prompt => &[],
    }
}

/// Find a section by id within a document type's registry.
pub fn find_section(doc_type: DocumentType, id: &str) -> Option<&'static ManagedSection> {
    sections_for(doc_type).iter().find(|s| s.id == id)
}
