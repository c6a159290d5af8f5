//! GitHub REST v3 payloads, reduced to the fields the tools render.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;

use crate::error::GitHubError;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
    #[serde(default)]
    pub private: bool,
}

impl ApiRepository {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

/// Entry of the contents API, either from a directory listing or a single file.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContent {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: u64,
    pub sha: String,
    pub content: Option<String>,
    pub encoding: Option<String>,
}

impl ApiContent {
    pub fn is_directory(&self) -> bool {
        self.kind == "dir"
    }

    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }

    /// Decoded file body. GitHub wraps base64 payloads at 60 columns.
    pub fn decoded(&self) -> Result<String, GitHubError> {
        let raw = self
            .content
            .as_deref()
            .ok_or_else(|| GitHubError::Content(format!("{} has no inline content", self.path)))?;

        match self.encoding.as_deref() {
            Some("base64") => {
                let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
                let bytes = BASE64
                    .decode(compact)
                    .map_err(|e| GitHubError::Content(format!("{}: {}", self.path, e)))?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            _ => Ok(raw.to_string()),
        }
    }
}

/// Body of `GET /repos/{owner}/{repo}/contents/{path}`: an object for a
/// file, an array when `path` names a directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiPath {
    File(ApiContent),
    Directory(Vec<ApiContent>),
}

impl ApiPath {
    /// The file, or `GitHubError::Content` naming `path` as a directory.
    pub fn into_file(self, path: &str) -> Result<ApiContent, GitHubError> {
        match self {
            ApiPath::File(content) => Ok(content),
            ApiPath::Directory(_) => Err(GitHubError::Content(format!("{} is a directory", path))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommit {
    pub sha: String,
    pub commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommitDetail {
    pub message: String,
    pub author: Option<ApiSignature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSignature {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiIssue {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub created_at: String,
    pub html_url: String,
    /// Present only when the issue is a pull request.
    pub pull_request: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_wrapped_base64() {
        let content: ApiContent = serde_json::from_value(json!({
            "name": "README.md",
            "path": "README.md",
            "type": "file",
            "size": 11,
            "sha": "abc",
            "content": "aGVsbG8g\nd29ybGQ=\n",
            "encoding": "base64"
        }))
        .unwrap();

        assert!(content.is_file());
        assert_eq!(content.decoded().unwrap(), "hello world");
    }

    #[test]
    fn directory_entries_have_no_body() {
        let content: ApiContent = serde_json::from_value(json!({
            "name": "src", "path": "src", "type": "dir", "size": 0, "sha": "def"
        }))
        .unwrap();

        assert!(content.is_directory());
        assert!(content.decoded().is_err());
    }

    #[test]
    fn search_matches_name_or_description() {
        let repo: ApiRepository = serde_json::from_value(json!({
            "name": "spring-api",
            "description": "REST service",
            "html_url": "https://github.com/u/spring-api"
        }))
        .unwrap();

        assert!(repo.matches("SPRING"));
        assert!(repo.matches("rest"));
        assert!(!repo.matches("rust"));
    }

    #[test]
    fn contents_body_is_a_file_or_a_listing() {
        let file: ApiPath = serde_json::from_value(json!({
            "name": "a.txt", "path": "a.txt", "type": "file", "size": 1, "sha": "1"
        }))
        .unwrap();
        assert!(matches!(file, ApiPath::File(ref c) if c.name == "a.txt"));

        let listing: ApiPath = serde_json::from_value(json!([
            { "name": "main.rs", "path": "src/main.rs", "type": "file", "size": 3, "sha": "2" }
        ]))
        .unwrap();
        assert!(matches!(listing, ApiPath::Directory(ref v) if v.len() == 1));

        let err = listing.into_file("src").unwrap_err();
        assert!(matches!(err, GitHubError::Content(ref m) if m == "src is a directory"));
    }
}
