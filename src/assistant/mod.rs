//! AI agent over the GitHub tools.
//!
//! - `llm`: Chat-completion client and message types
//! - `tools`: Tool schemas and dispatch onto `GitHubTools`
//! - `prompt`: System and analysis prompts
//!
//! A request runs the model in a loop: every round in which the model asks
//! for tools executes them and feeds the output back, until it answers in
//! plain text or `max_tool_rounds` is exhausted.

pub mod llm;
pub mod prompt;
pub mod tools;

use std::sync::Arc;

use tracing::{error, info};

use crate::error::AssistantError;
use crate::github::SharedTools;

pub use llm::{ChatMessage, LlmClient, OpenAiClient};

pub struct Assistant {
    llm: Arc<dyn LlmClient>,
    tools: SharedTools,
    max_tool_rounds: usize,
}

impl Assistant {
    pub fn new(llm: Arc<dyn LlmClient>, tools: SharedTools, max_tool_rounds: usize) -> Self {
        Self {
            llm,
            tools,
            max_tool_rounds,
        }
    }

    /// Answers `message`, folding any failure into the reply text.
    pub async fn process_message(&self, message: &str) -> String {
        let preview: String = message.chars().take(100).collect();
        info!(message = %preview, "processing message");

        match self.chat(message).await {
            Ok(reply) => {
                info!("reply generated");
                reply
            }
            Err(e) => {
                error!(error = %e, "failed to process message");
                format!("❌ Erro ao processar requisição: {}", e)
            }
        }
    }

    pub async fn chat(&self, message: &str) -> Result<String, AssistantError> {
        let definitions = tools::definitions();
        let mut messages = vec![
            ChatMessage::system(prompt::SYSTEM_PROMPT),
            ChatMessage::user(message),
        ];

        let mut rounds = 0;
        loop {
            let reply = self.llm.complete(&messages, &definitions).await?;
            let calls = reply.calls().to_vec();
            if calls.is_empty() {
                return Ok(reply.content.unwrap_or_default());
            }
            if rounds == self.max_tool_rounds {
                return Err(AssistantError::ToolRoundLimit(self.max_tool_rounds));
            }
            rounds += 1;

            messages.push(reply);
            for call in calls {
                let output =
                    tools::dispatch(self.tools.as_ref(), &call.function.name, &call.function.arguments)
                        .await;
                messages.push(ChatMessage::tool(call.id, output));
            }
        }
    }
}
