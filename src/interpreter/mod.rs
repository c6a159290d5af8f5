//! Interpreter for the text produced by the GitHub tool layer.
//!
//! Turns emoji-marked tool output back into typed listings:
//! - `protocol`: Marker table shared with `github::render`
//! - `classify`: Per-line role detection
//! - `repositories`: "list repositories" text -> `RepositoryListResult`
//! - `files`: "list files" text -> `FileListResult`
//!
//! Parsing never fails. Unknown lines are skipped and malformed numbers
//! leave their field absent. No state survives between calls.

pub mod classify;
pub mod files;
pub mod protocol;
pub mod repositories;

pub use files::parse_files;
pub use repositories::parse_repositories;
