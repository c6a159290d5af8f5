//! Application error types and HTTP response mapping.
//!
//! - `GitHubError`: Failures of the GitHub REST collaborator
//! - `AssistantError`: Failures of the chat-completion collaborator. These
//!   never reach a route: the assistant folds them into its reply text
//! - `AppError`: Everything a route can return, with Axum's `IntoResponse`
//!   converting it to a status code and a JSON error body
//!
//! Error mappings:
//! - `InvalidRequest` → 400
//! - `GitHub(Status 404)` → 404
//! - `GitHub(NotConfigured)` → 503
//! - other `GitHub` → 502
//!
//! Text parsing has no error type: the interpreter always yields a result.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    #[error("GitHub API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected content: {0}")]
    Content(String),
}

impl GitHubError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Status { status, .. } => Some(*status),
            GitHubError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    #[error("Chat API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat API returned no choices")]
    EmptyCompletion,

    #[error("Tool round limit of {0} reached")]
    ToolRoundLimit(usize),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::GitHub(GitHubError::NotConfigured(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::GitHub(e) if e.status() == Some(404) => StatusCode::NOT_FOUND,
            AppError::GitHub(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let not_found = AppError::from(GitHubError::Status {
            status: 404,
            body: "Not Found".into(),
        });
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let unauthorized = AppError::from(GitHubError::Status {
            status: 401,
            body: "Bad credentials".into(),
        });
        assert_eq!(unauthorized.into_response().status(), StatusCode::BAD_GATEWAY);

        let missing = AppError::from(GitHubError::NotConfigured("github token"));
        assert_eq!(missing.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);

        let invalid = AppError::InvalidRequest("blank".into());
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
