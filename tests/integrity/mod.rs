//! Integration tests for the document integrity engine
//!
//! These tests exercise the public library API end to end: validation,
//! repair against a template, and the docs version-sync round trip.

pub mod cli_flow;
pub mod helpers;
pub mod repair_flow;
pub mod validate_flow;
pub mod version_flow;
