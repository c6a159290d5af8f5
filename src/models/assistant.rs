//! Assistant request/response DTOs.
//!
//! - `ChatRequest`: Free-form message for the assistant
//! - `AnalyzeFilesRequest`: Files to read and the kind of analysis wanted
//! - `AssistantResponse`: Envelope returned by /chat and /analyze

use chrono::Local;
use serde::{Deserialize, Serialize};

pub const ASSISTANT_NAME: &str = "GitHubAssistant";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn is_valid(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFilesRequest {
    #[serde(default)]
    pub repository_name: Option<String>,
    #[serde(default)]
    pub selected_file_paths: Vec<String>,
    #[serde(default)]
    pub analysis_type: Option<String>,
}

impl AnalyzeFilesRequest {
    pub fn is_valid(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.repository_name)
            && !self.selected_file_paths.is_empty()
            && filled(&self.analysis_type)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantResponse {
    pub success: bool,
    pub assistant: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub question: Option<String>,
    pub data: Option<String>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl AssistantResponse {
    pub fn success(question: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            success: true,
            assistant: ASSISTANT_NAME.to_string(),
            kind: "chat".to_string(),
            question: Some(question.into()),
            data: Some(data.into()),
            error: None,
            timestamp: now(),
        }
    }

    pub fn error(question: Option<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            assistant: ASSISTANT_NAME.to_string(),
            kind: "error".to_string(),
            question,
            data: None,
            error: Some(error.into()),
            timestamp: now(),
        }
    }
}

fn now() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_chat_message_is_invalid() {
        assert!(!ChatRequest { message: None }.is_valid());
        assert!(!ChatRequest { message: Some("  ".into()) }.is_valid());
        assert!(ChatRequest { message: Some("Liste meus repositórios".into()) }.is_valid());
    }

    #[test]
    fn analyze_request_needs_every_field() {
        let request: AnalyzeFilesRequest = serde_json::from_value(serde_json::json!({
            "repositoryName": "demo",
            "selectedFilePaths": ["README.md"],
            "analysisType": "code_review"
        }))
        .unwrap();
        assert!(request.is_valid());

        let missing_paths = AnalyzeFilesRequest {
            selected_file_paths: Vec::new(),
            ..request.clone()
        };
        assert!(!missing_paths.is_valid());

        let blank_type = AnalyzeFilesRequest {
            analysis_type: Some(" ".into()),
            ..request
        };
        assert!(!blank_type.is_valid());
    }

    #[test]
    fn envelopes() {
        let ok = AssistantResponse::success("q", "a");
        assert!(ok.success);
        assert_eq!(ok.kind, "chat");
        assert_eq!(ok.error, None);

        let err = AssistantResponse::error(None, "boom");
        assert!(!err.success);
        assert_eq!(err.kind, "error");
        assert_eq!(err.data, None);

        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["assistant"], ASSISTANT_NAME);
    }
}
