//! Structured listing endpoints.
//!
//! - GET /api/v1/github/repositories
//!   Repository summaries, most starred first.
//!
//! - GET /api/v1/github/repositories/{name}/files?path=
//!   One directory level of a repository, directories first. A blank or
//!   missing `path` lists the root.
//!
//! Both fetch the tool text and hand it to `crate::interpreter`.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::interpreter::{parse_files, parse_repositories};
use crate::models::{FileListResult, RepositoryListResult};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/repositories", get(list_repositories))
        .route("/repositories/{name}/files", get(list_files))
        .with_state(state)
}

async fn list_repositories(State(state): State<SharedState>) -> Result<Json<RepositoryListResult>> {
    info!("listing repositories");
    let text = state.tools.list_repositories().await?;
    let result = parse_repositories(Some(&text));
    info!(total = result.total(), "repositories returned");
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
struct FilesQuery {
    path: Option<String>,
}

async fn list_files(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Query(query): Query<FilesQuery>,
) -> Result<Json<FileListResult>> {
    if name.trim().is_empty() {
        warn!("rejected blank repository name");
        return Err(AppError::InvalidRequest("repository name is blank".to_string()));
    }

    let directory = query.path.as_deref().map(str::trim).filter(|p| !p.is_empty());
    info!(repository = %name, path = directory.unwrap_or("/"), "listing files");

    let text = match directory {
        Some(dir) => {
            state
                .tools
                .list_repository_files_in_directory(&name, dir)
                .await?
        }
        None => state.tools.list_repository_files(&name).await?,
    };

    let result = parse_files(Some(&text), &name);
    info!(total = result.total_files(), "files returned");
    Ok(Json(result))
}
