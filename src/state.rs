use std::sync::Arc;

use crate::assistant::{Assistant, LlmClient, OpenAiClient};
use crate::config::Config;
use crate::github::{GitHubClient, SharedTools};

/// Collaborators shared by every route. Nothing in here is mutated after
/// startup.
pub struct AppState {
    pub tools: SharedTools,
    pub assistant: Assistant,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(tools: SharedTools, llm: Arc<dyn LlmClient>, max_tool_rounds: usize) -> SharedState {
        let assistant = Assistant::new(llm, tools.clone(), max_tool_rounds);
        Arc::new(Self { tools, assistant })
    }

    pub fn from_config(config: &Config) -> SharedState {
        let tools: SharedTools = Arc::new(GitHubClient::from_config(config));
        let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::from_config(config));
        Self::new(tools, llm, config.max_tool_rounds)
    }
}
