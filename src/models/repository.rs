//! Repository listing DTOs.
//!
//! - `RepositorySummary`: One repository reconstructed from tool text
//! - `RepositoryListResult`: Sorted listing plus its count
//!
//! Used by: GET /api/v1/github/repositories

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

impl RepositorySummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            url: None,
            language: None,
            stars: None,
            forks: None,
            is_private: None,
        }
    }
}

/// Repository listing as returned to API clients.
///
/// `total` is derived from `repositories` on construction and cannot be
/// set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryListResult {
    total: usize,
    repositories: Vec<RepositorySummary>,
}

impl RepositoryListResult {
    pub fn new(repositories: Vec<RepositorySummary>) -> Self {
        Self {
            total: repositories.len(),
            repositories,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        &self.repositories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted() {
        let mut repo = RepositorySummary::named("demo-repo");
        repo.stars = Some(0);
        repo.is_private = Some(false);

        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(
            value,
            json!({ "name": "demo-repo", "stars": 0, "isPrivate": false })
        );
    }

    #[test]
    fn total_follows_the_sequence() {
        let result = RepositoryListResult::new(vec![
            RepositorySummary::named("a"),
            RepositorySummary::named("b"),
        ]);
        assert_eq!(result.total(), 2);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["repositories"].as_array().unwrap().len(), 2);
    }
}
