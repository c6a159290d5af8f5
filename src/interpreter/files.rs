//! File-tree parser.
//!
//! Each directory or file line of a listing becomes one `FileNode`; lines
//! never depend on each other. A listing covers one directory level, so
//! nodes carry no children.

use tracing::debug;

use super::classify::{FileLine, classify_file_line};
use crate::models::{FileListResult, FileNode};

pub fn parse_files(text: Option<&str>, repository_name: &str) -> FileListResult {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return FileListResult::empty(repository_name);
    };

    let mut files: Vec<FileNode> = text
        .lines()
        .map(str::trim)
        .filter_map(|line| match classify_file_line(line) {
            FileLine::Entry {
                name,
                is_directory,
                size,
            } => Some(FileNode::listed(name, is_directory, size)),
            FileLine::Skip => None,
        })
        .collect();

    sort_directories_first(&mut files);
    debug!(repository = repository_name, count = files.len(), "parsed file listing");

    FileListResult::new(repository_name, files)
}

/// Sort: directories first, then files, each group by case-insensitive name.
/// Names equal up to case keep their listing order.
pub fn sort_directories_first(files: &mut [FileNode]) {
    files.sort_by_cached_key(|f| (!f.is_directory, f.name.to_lowercase()));
}
