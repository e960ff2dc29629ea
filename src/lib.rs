pub mod commands;
pub mod issue;
pub mod lines;
pub mod registry;
pub mod repair;
pub mod sensitive;
pub mod validate;
pub mod version_sync;

pub use issue::{Issue, IssueCode};
pub use registry::{sections_for, DocumentType, ManagedSection};
pub use repair::{repair_report_markdown, RepairResult};
pub use validate::validate_document;
pub use version_sync::{
    fix_docs_version_sync, validate_docs_version_sync, DocsVersionFix, DocsVersionInput,
};
