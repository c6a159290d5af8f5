//! API route handlers - maps HTTP endpoints to the assistant and the
//! structured listings.
//!
//! Each submodule defines routes for a feature area, all under
//! `/api/v1/github`:
//! - `chat`: Free-form conversation with the assistant
//! - `repositories`: Typed repository and file listings
//! - `analyze`: AI analysis of selected files
//! - `health`: Liveness check

pub mod analyze;
pub mod chat;
pub mod health;
pub mod repositories;

use axum::Router;

use crate::state::SharedState;

pub const API_BASE: &str = "/api/v1/github";

pub fn create_router(state: SharedState) -> Router {
    let api = Router::new()
        .merge(chat::routes(state.clone()))
        .merge(repositories::routes(state.clone()))
        .merge(analyze::routes(state))
        .merge(health::routes());

    Router::new().nest(API_BASE, api)
}
