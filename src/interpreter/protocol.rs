//! Marker vocabulary of the tool-text micro-protocol.
//!
//! `github::render` writes these markers and the parsers in this module
//! read them. Any change here changes both sides at once; bump
//! `PROTOCOL_VERSION` when a marker's meaning changes.

pub const PROTOCOL_VERSION: u32 = 1;

/// Starts a repository record; the rest of the line is the name.
pub const REPOSITORY: &str = "📦";
/// Starts a directory entry in a file listing.
pub const DIRECTORY: &str = "📁";
/// Starts a file entry in a file listing.
pub const FILE: &str = "📄";
/// Headers and confirmations. Never part of a record.
pub const CHECKMARK: &str = "✅";
/// Error lines emitted by the tool layer.
pub const ERROR: &str = "❌";

pub const STAR: &str = "⭐";
pub const FORK: &str = "🔱";
pub const ISSUES: &str = "🐛";
pub const COMMIT: &str = "📝";
pub const PRIVATE_ICON: &str = "🔒";
pub const PUBLIC_ICON: &str = "🌐";

/// Separates the segments of the metrics line (`⭐ stars | 🔱 forks | ...`).
pub const FIELD_SEPARATOR: char = '|';

pub const DESCRIPTION_LABEL: &str = "Descrição:";
pub const URL_LABEL: &str = "URL:";
pub const LANGUAGE_LABEL: &str = "Linguagem:";

pub const PRIVATE: &str = "Privado";
pub const PUBLIC: &str = "Público";

/// Present in every "nothing found" message of the repository listing.
pub const NO_RESULTS: &str = "Nenhum";

pub const SIZE_OPEN: char = '(';
pub const BYTES: &str = "bytes";
/// Left behind by wrapped size annotations; such lines carry no entry.
pub const SIZE_ARTIFACT: &str = "bytes)";
