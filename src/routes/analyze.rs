//! File analysis endpoint.
//!
//! - POST /api/v1/github/analyze
//!   { repositoryName, selectedFilePaths: [string], analysisType }
//!   Reads every selected file through the tool layer, then asks the
//!   assistant for an analysis of the requested type.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tracing::{error, info, warn};

use crate::assistant::prompt;
use crate::github::render;
use crate::models::{AnalyzeFilesRequest, AssistantResponse};
use crate::state::SharedState;

const QUESTION: &str = "Análise de arquivos";

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .with_state(state)
}

async fn analyze(
    State(state): State<SharedState>,
    Json(request): Json<AnalyzeFilesRequest>,
) -> (StatusCode, Json<AssistantResponse>) {
    let (Some(repository), Some(analysis_type)) = (
        request.repository_name.as_deref().filter(|_| request.is_valid()),
        request.analysis_type.as_deref(),
    ) else {
        warn!("rejected invalid analysis request");
        return (
            StatusCode::BAD_REQUEST,
            Json(AssistantResponse::error(
                Some("Análise".to_string()),
                "Request inválido",
            )),
        );
    };

    info!(repository, files = request.selected_file_paths.len(), "analyzing files");

    let mut contents = Vec::with_capacity(request.selected_file_paths.len());
    for path in &request.selected_file_paths {
        let content = match state.tools.read_file(repository, path).await {
            Ok(text) => text,
            Err(e) => {
                error!(path = %path, error = %e, "failed to read file for analysis");
                render::error(&e)
            }
        };
        contents.push(content);
    }

    let analysis_prompt = prompt::analysis(analysis_type, repository, &contents);
    let analysis = state.assistant.process_message(&analysis_prompt).await;
    (StatusCode::OK, Json(AssistantResponse::success(QUESTION, analysis)))
}
