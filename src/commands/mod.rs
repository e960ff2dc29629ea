pub mod check;
pub mod repair;
pub mod version_sync;
