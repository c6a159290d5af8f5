use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::config::Config;
use crate::error::GitHubError;

use super::api::{ApiCommit, ApiContent, ApiIssue, ApiPath, ApiRepository};
use super::{GitHubTools, ToolResult, render};

const PER_PAGE: usize = 100;
const MAX_PAGES: usize = 10;
const DEFAULT_COMMIT_LIMIT: u32 = 10;

type Result<T> = std::result::Result<T, GitHubError>;

/// GitHub REST client acting for one configured user.
///
/// The HTTP client is built on first use. Concurrent first calls wait on
/// the same initialization, so at most one client is ever created.
pub struct GitHubClient {
    http: OnceCell<reqwest::Client>,
    api_url: String,
    token: Option<String>,
    username: Option<String>,
}

impl GitHubClient {
    pub fn new(
        api_url: impl Into<String>,
        token: Option<String>,
        username: Option<String>,
    ) -> Self {
        Self {
            http: OnceCell::new(),
            api_url: api_url.into(),
            token: token.filter(|t| !t.is_empty()),
            username: username.filter(|u| !u.is_empty()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.github_api_url.clone(),
            config.github_token.clone(),
            config.github_username.clone(),
        )
    }

    async fn http(&self) -> Result<&reqwest::Client> {
        self.http
            .get_or_try_init(|| async {
                let token = self
                    .token
                    .as_deref()
                    .ok_or(GitHubError::NotConfigured("github token"))?;
                let username = self.username()?;

                info!(username, "connecting to GitHub");

                let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| GitHubError::NotConfigured("github token"))?;
                auth.set_sensitive(true);

                let mut headers = HeaderMap::new();
                headers.insert(
                    ACCEPT,
                    HeaderValue::from_static("application/vnd.github+json"),
                );
                headers.insert(AUTHORIZATION, auth);
                headers.insert(USER_AGENT, HeaderValue::from_static("github-assistant"));

                let client = reqwest::Client::builder().default_headers(headers).build()?;
                Ok(client)
            })
            .await
    }

    fn username(&self) -> Result<&str> {
        self.username
            .as_deref()
            .ok_or(GitHubError::NotConfigured("github username"))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(&self.api_url).map_err(|e| GitHubError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `/repos/{username}/{repository}/{tail...}`
    fn repo_endpoint(&self, repository: &str, tail: &[&str]) -> Result<Url> {
        let username = self.username()?;
        let mut segments = vec!["repos", username, repository];
        segments.extend_from_slice(tail);
        self.endpoint(&segments)
    }

    fn contents_endpoint(&self, repository: &str, path: &str) -> Result<Url> {
        let mut tail = vec!["contents"];
        tail.extend(path.split('/').filter(|s| !s.is_empty()));
        self.repo_endpoint(repository, &tail)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> Result<T> {
        let response = self.http().await?.get(url).query(query).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn send_json(&self, method: Method, url: Url, body: serde_json::Value) -> Result<()> {
        let response = self
            .http()
            .await?
            .request(method, url)
            .json(&body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn repositories(&self) -> Result<Vec<ApiRepository>> {
        let username = self.username()?;
        let url = self.endpoint(&["users", username, "repos"])?;

        let mut repos = Vec::new();
        for page in 1..=MAX_PAGES {
            let batch: Vec<ApiRepository> = self
                .get_json(
                    url.clone(),
                    &[("per_page", PER_PAGE.to_string()), ("page", page.to_string())],
                )
                .await?;
            let last = batch.len() < PER_PAGE;
            repos.extend(batch);
            if last {
                break;
            }
        }
        Ok(repos)
    }

    pub async fn directory(&self, repository: &str, path: &str) -> Result<Vec<ApiContent>> {
        let url = self.contents_endpoint(repository, path)?;
        self.get_json(url, &[]).await
    }

    pub async fn content(&self, repository: &str, path: &str) -> Result<ApiPath> {
        let url = self.contents_endpoint(repository, path)?;
        self.get_json(url, &[]).await
    }

    pub async fn put_file(
        &self,
        repository: &str,
        path: &str,
        content: &str,
        message: &str,
        sha: Option<&str>,
    ) -> Result<()> {
        let url = self.contents_endpoint(repository, path)?;
        let mut body = json!({
            "message": message,
            "content": BASE64.encode(content),
        });
        if let Some(sha) = sha {
            body["sha"] = json!(sha);
        }
        self.send_json(Method::PUT, url, body).await
    }

    pub async fn remove_file(
        &self,
        repository: &str,
        path: &str,
        message: &str,
        sha: &str,
    ) -> Result<()> {
        let url = self.contents_endpoint(repository, path)?;
        self.send_json(Method::DELETE, url, json!({ "message": message, "sha": sha }))
            .await
    }

    /// Newest first, paging until `limit` commits or the history runs out.
    pub async fn commits(&self, repository: &str, limit: u32) -> Result<Vec<ApiCommit>> {
        let url = self.repo_endpoint(repository, &["commits"])?;
        let limit = limit as usize;
        let per_page = limit.min(PER_PAGE);

        let mut commits = Vec::new();
        let mut page = 1;
        while commits.len() < limit {
            let batch: Vec<ApiCommit> = self
                .get_json(
                    url.clone(),
                    &[("per_page", per_page.to_string()), ("page", page.to_string())],
                )
                .await?;
            let last = batch.len() < per_page;
            commits.extend(batch);
            if last {
                break;
            }
            page += 1;
        }
        commits.truncate(limit);
        Ok(commits)
    }

    pub async fn open_issues(&self, repository: &str) -> Result<Vec<ApiIssue>> {
        let url = self.repo_endpoint(repository, &["issues"])?;
        let issues: Vec<ApiIssue> = self
            .get_json(
                url,
                &[("state", "open".to_string()), ("per_page", PER_PAGE.to_string())],
            )
            .await?;
        Ok(issues
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .collect())
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GitHubError::Status {
        status: status.as_u16(),
        body,
    })
}

fn logged<T>(result: Result<T>, action: &str) -> Result<T> {
    if let Err(e) = &result {
        error!(error = %e, "failed to {}", action);
    }
    result
}

#[async_trait]
impl GitHubTools for GitHubClient {
    async fn list_repositories(&self) -> ToolResult {
        info!(username = ?self.username, "listing repositories");
        let repos = logged(self.repositories().await, "list repositories")?;
        Ok(render::repositories(&repos))
    }

    async fn list_repository_files(&self, repository: &str) -> ToolResult {
        info!(repository, "listing files");
        let contents = logged(self.directory(repository, "").await, "list files")?;
        Ok(render::directory(repository, None, &contents))
    }

    async fn list_repository_files_in_directory(
        &self,
        repository: &str,
        directory: &str,
    ) -> ToolResult {
        info!(repository, directory, "listing directory");
        let contents = logged(self.directory(repository, directory).await, "list directory")?;
        Ok(render::directory(repository, Some(directory), &contents))
    }

    async fn read_file(&self, repository: &str, path: &str) -> ToolResult {
        info!(repository, path, "reading file");
        let content = match logged(self.content(repository, path).await, "read file")? {
            ApiPath::File(content) if !content.is_directory() => content,
            _ => return Ok(render::is_a_directory(path)),
        };
        let body = content.decoded()?;
        Ok(render::file(path, &content, &body))
    }

    async fn create_file(
        &self,
        repository: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> ToolResult {
        info!(repository, path, "creating file");
        logged(
            self.put_file(repository, path, content, message, None).await,
            "create file",
        )?;
        Ok(render::created(path))
    }

    async fn update_file(
        &self,
        repository: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> ToolResult {
        info!(repository, path, "updating file");
        let existing = logged(
            self.content(repository, path).await.and_then(|c| c.into_file(path)),
            "update file",
        )?;
        logged(
            self.put_file(repository, path, content, message, Some(&existing.sha))
                .await,
            "update file",
        )?;
        Ok(render::updated(path))
    }

    async fn delete_file(&self, repository: &str, path: &str, message: &str) -> ToolResult {
        info!(repository, path, "deleting file");
        let existing = logged(
            self.content(repository, path).await.and_then(|c| c.into_file(path)),
            "delete file",
        )?;
        logged(
            self.remove_file(repository, path, message, &existing.sha).await,
            "delete file",
        )?;
        Ok(render::deleted(path))
    }

    async fn list_commits(&self, repository: &str, limit: Option<u32>) -> ToolResult {
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_COMMIT_LIMIT);
        info!(repository, limit, "listing commits");
        let commits = logged(self.commits(repository, limit).await, "list commits")?;
        Ok(render::commits(repository, &commits))
    }

    async fn list_open_issues(&self, repository: &str) -> ToolResult {
        info!(repository, "listing issues");
        let issues = logged(self.open_issues(repository).await, "list issues")?;
        Ok(render::issues(repository, &issues))
    }

    async fn search_repositories(&self, query: &str) -> ToolResult {
        info!(query, "searching repositories");
        let repos = logged(self.repositories().await, "search repositories")?;
        let matches: Vec<&ApiRepository> = repos.iter().filter(|r| r.matches(query)).collect();
        Ok(render::search(query, &matches))
    }
}
