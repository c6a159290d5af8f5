//! GitHub tool layer.
//!
//! Every operation returns human-readable tool text (see `render`) so the
//! same output can be handed to the assistant model or parsed by
//! `crate::interpreter`.

pub mod api;
pub mod client;
pub mod render;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GitHubError;

pub use client::GitHubClient;

pub type ToolResult = Result<String, GitHubError>;

#[async_trait]
pub trait GitHubTools: Send + Sync {
    async fn list_repositories(&self) -> ToolResult;

    async fn list_repository_files(&self, repository: &str) -> ToolResult;

    async fn list_repository_files_in_directory(
        &self,
        repository: &str,
        directory: &str,
    ) -> ToolResult;

    async fn read_file(&self, repository: &str, path: &str) -> ToolResult;

    async fn create_file(
        &self,
        repository: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> ToolResult;

    async fn update_file(
        &self,
        repository: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> ToolResult;

    async fn delete_file(&self, repository: &str, path: &str, message: &str) -> ToolResult;

    /// `limit` of `None` or zero means the default of 10.
    async fn list_commits(&self, repository: &str, limit: Option<u32>) -> ToolResult;

    async fn list_open_issues(&self, repository: &str) -> ToolResult;

    async fn search_repositories(&self, query: &str) -> ToolResult;
}

pub type SharedTools = Arc<dyn GitHubTools>;
