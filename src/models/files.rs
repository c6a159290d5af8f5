//! File listing DTOs.
//!
//! - `FileNode`: Single file/directory entry of one listing level
//! - `FileListResult`: Sorted entries for a repository (FileList view)
//!
//! Used by: GET /api/v1/github/repositories/{name}/files

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub loaded: bool,
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Entry read from a flat listing: `path` is the name and no children
    /// are attached.
    pub fn listed(name: impl Into<String>, is_directory: bool, size: Option<u64>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            is_directory,
            size,
            loaded: true,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResult {
    repository_name: String,
    total_files: usize,
    files: Vec<FileNode>,
}

impl FileListResult {
    pub fn new(repository_name: impl Into<String>, files: Vec<FileNode>) -> Self {
        Self {
            repository_name: repository_name.into(),
            total_files: files.len(),
            files,
        }
    }

    pub fn empty(repository_name: impl Into<String>) -> Self {
        Self::new(repository_name, Vec::new())
    }

    pub fn repository_name(&self) -> &str {
        &self.repository_name
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn files(&self) -> &[FileNode] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_camel_case() {
        let result = FileListResult::new(
            "demo",
            vec![
                FileNode::listed("src", true, None),
                FileNode::listed("README.md", false, Some(1234)),
            ],
        );

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "repositoryName": "demo",
                "totalFiles": 2,
                "files": [
                    { "name": "src", "path": "src", "isDirectory": true, "loaded": true, "children": [] },
                    { "name": "README.md", "path": "README.md", "isDirectory": false, "size": 1234, "loaded": true, "children": [] }
                ]
            })
        );
    }
}
