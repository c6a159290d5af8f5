//! GitHub Assistant - an AI agent and typed REST listings over a GitHub
//! account.
//!
//! - `interpreter`: Rebuilds typed listings from tool text
//! - `github`: GitHub REST collaborator producing that text
//! - `assistant`: Chat-completion agent driving the GitHub tools
//! - `routes`: HTTP boundary

pub mod assistant;
pub mod config;
pub mod error;
pub mod github;
pub mod interpreter;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::{AppState, SharedState};
