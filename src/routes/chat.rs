//! Chat endpoint.
//!
//! - POST /api/v1/github/chat { message: string }
//!   Forwards the message to the assistant and wraps its reply in an
//!   `AssistantResponse`. A blank message is rejected with 400.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tracing::{info, warn};

use crate::models::{AssistantResponse, ChatRequest};
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(state)
}

async fn chat(
    State(state): State<SharedState>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<AssistantResponse>) {
    info!("chat received");

    let Some(message) = request.message.as_deref().filter(|_| request.is_valid()) else {
        warn!("rejected blank chat message");
        return (
            StatusCode::BAD_REQUEST,
            Json(AssistantResponse::error(
                request.message.clone(),
                "Mensagem não pode ser vazia",
            )),
        );
    };

    let reply = state.assistant.process_message(message).await;
    (StatusCode::OK, Json(AssistantResponse::success(message, reply)))
}
