//! Runtime configuration from command-line flags and environment variables.

use clap::Parser;

/// GitHub Assistant - chat with an AI agent about your GitHub account
#[derive(Parser, Debug, Clone)]
#[command(name = "github-assistant")]
#[command(about = "AI assistant and structured REST listings for a GitHub account", long_about = None)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub user whose repositories are served
    #[arg(long, env = "GITHUB_USERNAME")]
    pub github_username: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Base URL of an OpenAI-compatible chat completions API
    #[arg(long, env = "LLM_API_URL", default_value = "https://api.openai.com/v1")]
    pub llm_api_url: String,

    /// API key for the chat completions API
    #[arg(long, env = "LLM_API_KEY", hide_env_values = true)]
    pub llm_api_key: Option<String>,

    /// Chat model name
    #[arg(long, env = "LLM_MODEL", default_value = "gpt-4o-mini")]
    pub llm_model: String,

    /// Maximum tool-call rounds per assistant request
    #[arg(long, default_value = "8")]
    pub max_tool_rounds: usize,

    /// Allowed CORS origin (repeatable); any origin when omitted
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "github-assistant",
            "--port",
            "9000",
            "--github-username",
            "octo",
            "--cors-origin",
            "http://localhost:4200",
            "--cors-origin",
            "http://localhost:3000",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.github_username.as_deref(), Some("octo"));
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.max_tool_rounds, 8);
    }
}
