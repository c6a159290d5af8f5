//! Function-calling surface of the GitHub tools.
//!
//! `definitions()` describes each `GitHubTools` operation to the model and
//! `dispatch()` runs the one it asks for. Whatever happens, the model gets
//! text back.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use super::llm::{FunctionDefinition, ToolDefinition};
use crate::error::GitHubError;
use crate::github::{GitHubTools, render};

#[derive(Error, Debug)]
enum DispatchError {
    #[error("ferramenta desconhecida: {0}")]
    UnknownTool(String),

    #[error("argumentos inválidos: {0}")]
    Arguments(#[from] serde_json::Error),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

#[derive(Deserialize)]
struct RepositoryArgs {
    repository_name: String,
}

#[derive(Deserialize)]
struct DirectoryArgs {
    repository_name: String,
    directory_path: String,
}

#[derive(Deserialize)]
struct FileArgs {
    repository_name: String,
    file_path: String,
}

#[derive(Deserialize)]
struct WriteFileArgs {
    repository_name: String,
    file_path: String,
    content: String,
    commit_message: String,
}

#[derive(Deserialize)]
struct DeleteFileArgs {
    repository_name: String,
    file_path: String,
    commit_message: String,
}

#[derive(Deserialize)]
struct CommitsArgs {
    repository_name: String,
    #[serde(default)]
    limit: Option<u32>,
}

#[derive(Deserialize)]
struct SearchArgs {
    query: String,
}

fn function(
    name: &'static str,
    description: &'static str,
    parameters: serde_json::Value,
) -> ToolDefinition {
    ToolDefinition {
        kind: "function",
        function: FunctionDefinition {
            name,
            description,
            parameters,
        },
    }
}

/// JSON schema of an object whose properties are all strings except the
/// ones listed in `integers`.
fn object(required: &[&str], integers: &[&str]) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    for name in required.iter().chain(integers) {
        let kind = if integers.contains(name) { "integer" } else { "string" };
        properties.insert((*name).to_string(), json!({ "type": kind }));
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        function(
            "list_repositories",
            "Lista todos os repositórios do usuário no GitHub",
            object(&[], &[]),
        ),
        function(
            "list_repository_files",
            "Lista arquivos de um repositório específico",
            object(&["repository_name"], &[]),
        ),
        function(
            "list_repository_files_in_directory",
            "Lista arquivos de um diretório específico do repositório",
            object(&["repository_name", "directory_path"], &[]),
        ),
        function(
            "read_file",
            "Lê o conteúdo completo de um arquivo do repositório",
            object(&["repository_name", "file_path"], &[]),
        ),
        function(
            "create_file",
            "Cria um novo arquivo no repositório",
            object(
                &["repository_name", "file_path", "content", "commit_message"],
                &[],
            ),
        ),
        function(
            "update_file",
            "Atualiza o conteúdo de um arquivo existente",
            object(
                &["repository_name", "file_path", "content", "commit_message"],
                &[],
            ),
        ),
        function(
            "delete_file",
            "Deleta um arquivo do repositório",
            object(&["repository_name", "file_path", "commit_message"], &[]),
        ),
        function(
            "list_commits",
            "Lista os últimos commits de um repositório",
            object(&["repository_name"], &["limit"]),
        ),
        function(
            "list_open_issues",
            "Lista issues abertas de um repositório",
            object(&["repository_name"], &[]),
        ),
        function(
            "search_repositories",
            "Busca repositórios do usuário por nome ou palavra-chave",
            object(&["query"], &[]),
        ),
    ]
}

pub async fn dispatch(tools: &dyn GitHubTools, name: &str, arguments: &str) -> String {
    info!(tool = name, "running tool");
    match run(tools, name, arguments).await {
        Ok(text) => text,
        Err(DispatchError::GitHub(e)) => render::error(&e),
        Err(e) => {
            warn!(tool = name, error = %e, "tool call rejected");
            format!("❌ {}", e)
        }
    }
}

async fn run(
    tools: &dyn GitHubTools,
    name: &str,
    arguments: &str,
) -> Result<String, DispatchError> {
    let text = match name {
        "list_repositories" => tools.list_repositories().await?,
        "list_repository_files" => {
            let a: RepositoryArgs = parse(arguments)?;
            tools.list_repository_files(&a.repository_name).await?
        }
        "list_repository_files_in_directory" => {
            let a: DirectoryArgs = parse(arguments)?;
            tools
                .list_repository_files_in_directory(&a.repository_name, &a.directory_path)
                .await?
        }
        "read_file" => {
            let a: FileArgs = parse(arguments)?;
            tools.read_file(&a.repository_name, &a.file_path).await?
        }
        "create_file" => {
            let a: WriteFileArgs = parse(arguments)?;
            tools
                .create_file(&a.repository_name, &a.file_path, &a.content, &a.commit_message)
                .await?
        }
        "update_file" => {
            let a: WriteFileArgs = parse(arguments)?;
            tools
                .update_file(&a.repository_name, &a.file_path, &a.content, &a.commit_message)
                .await?
        }
        "delete_file" => {
            let a: DeleteFileArgs = parse(arguments)?;
            tools
                .delete_file(&a.repository_name, &a.file_path, &a.commit_message)
                .await?
        }
        "list_commits" => {
            let a: CommitsArgs = parse(arguments)?;
            tools.list_commits(&a.repository_name, a.limit).await?
        }
        "list_open_issues" => {
            let a: RepositoryArgs = parse(arguments)?;
            tools.list_open_issues(&a.repository_name).await?
        }
        "search_repositories" => {
            let a: SearchArgs = parse(arguments)?;
            tools.search_repositories(&a.query).await?
        }
        other => return Err(DispatchError::UnknownTool(other.to_string())),
    };
    Ok(text)
}

/// Models send `""` for parameterless calls.
fn parse<T: DeserializeOwned>(arguments: &str) -> Result<T, DispatchError> {
    let raw = if arguments.trim().is_empty() { "{}" } else { arguments };
    Ok(serde_json::from_str(raw)?)
}
