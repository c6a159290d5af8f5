//! Renders GitHub payloads as tool text.
//!
//! Output is read by the assistant model and, for repository and file
//! listings, parsed back by `crate::interpreter`. Markers come from
//! `interpreter::protocol` so both sides move together.

use crate::error::GitHubError;
use crate::interpreter::protocol as p;

use super::api::{ApiCommit, ApiContent, ApiIssue, ApiRepository};

const RULE: &str = "─────────────────────────────────";
const ISSUE_BODY_PREVIEW: usize = 100;

pub fn repositories(repos: &[ApiRepository]) -> String {
    if repos.is_empty() {
        return format!("{} repositório encontrado.", p::NO_RESULTS);
    }

    let mut out = format!("{} Total: {} repositórios\n\n", p::CHECKMARK, repos.len());
    for repo in repos {
        out.push_str(&format!("{} {}\n", p::REPOSITORY, single_line(&repo.name)));
        if let Some(description) = &repo.description {
            out.push_str(&format!("   {} {}\n", p::DESCRIPTION_LABEL, single_line(description)));
        }
        out.push_str(&format!("   {} {}\n", p::URL_LABEL, repo.html_url));
        if let Some(language) = &repo.language {
            out.push_str(&format!("   {} {}\n", p::LANGUAGE_LABEL, language));
        }
        out.push_str(&format!(
            "   {} {} {} {} {} {} {} {} issues\n",
            p::STAR,
            repo.stargazers_count,
            p::FIELD_SEPARATOR,
            p::FORK,
            repo.forks_count,
            p::FIELD_SEPARATOR,
            p::ISSUES,
            repo.open_issues_count,
        ));
        let visibility = if repo.private {
            format!("{} {}", p::PRIVATE_ICON, p::PRIVATE)
        } else {
            format!("{} {}", p::PUBLIC_ICON, p::PUBLIC)
        };
        out.push_str(&format!("   {}\n\n", visibility));
    }
    out
}

/// Listing of one directory level. `directory` is `None` for the root.
pub fn directory(repository: &str, directory: Option<&str>, contents: &[ApiContent]) -> String {
    if contents.is_empty() {
        return match directory {
            Some(dir) => format!("Diretório {} está vazio.", dir),
            None => "Repositório vazio.".to_string(),
        };
    }

    let mut out = match directory {
        Some(dir) => format!("{} {} / {}:\n\n", p::CHECKMARK, repository, dir),
        None => format!("{} Arquivos de {}:\n\n", p::CHECKMARK, repository),
    };
    for entry in contents {
        let icon = if entry.is_directory() { p::DIRECTORY } else { p::FILE };
        out.push_str(&format!("{} {}", icon, single_line(&entry.name)));
        if entry.is_file() {
            out.push_str(&format!(" {}{} {})", p::SIZE_OPEN, entry.size, p::BYTES));
        }
        out.push('\n');
    }
    out
}

pub fn file(path: &str, content: &ApiContent, body: &str) -> String {
    format!(
        "{} Arquivo: {}\nTamanho: {} {}\nEncoding: {}\n\nConteúdo:\n{}\n{}\n{}\n",
        p::CHECKMARK,
        path,
        content.size,
        p::BYTES,
        content.encoding.as_deref().unwrap_or("none"),
        RULE,
        body,
        RULE,
    )
}

pub fn is_a_directory(path: &str) -> String {
    format!("{} {} é um diretório, não um arquivo.", p::ERROR, path)
}

pub fn created(path: &str) -> String {
    format!("{} Arquivo {} criado com sucesso!", p::CHECKMARK, path)
}

pub fn updated(path: &str) -> String {
    format!("{} Arquivo {} atualizado com sucesso!", p::CHECKMARK, path)
}

pub fn deleted(path: &str) -> String {
    format!("{} Arquivo {} deletado com sucesso!", p::CHECKMARK, path)
}

pub fn commits(repository: &str, commits: &[ApiCommit]) -> String {
    if commits.is_empty() {
        return format!("{} commit encontrado.", p::NO_RESULTS);
    }

    let mut out = format!(
        "{} Últimos {} commits de {}:\n\n",
        p::CHECKMARK,
        commits.len(),
        repository
    );
    for commit in commits {
        out.push_str(&format!("{} {}\n", p::COMMIT, commit.commit.message));
        if let Some(author) = &commit.commit.author {
            out.push_str(&format!("   Autor: {}\n", author.name));
            out.push_str(&format!("   Data: {}\n", author.date));
        }
        let short: String = commit.sha.chars().take(7).collect();
        out.push_str(&format!("   SHA: {}\n\n", short));
    }
    out
}

pub fn issues(repository: &str, issues: &[ApiIssue]) -> String {
    if issues.is_empty() {
        return format!("{} {} não tem issues abertas.", p::CHECKMARK, repository);
    }

    let mut out = format!(
        "{} Issues abertas em {}: {}\n\n",
        p::ISSUES,
        repository,
        issues.len()
    );
    for issue in issues {
        out.push_str(&format!("#{}: {}\n", issue.number, issue.title));
        if let Some(body) = issue.body.as_deref().filter(|b| !b.is_empty()) {
            out.push_str(&format!("   {}\n", preview(body)));
        }
        out.push_str(&format!("   Criada em: {}\n", issue.created_at));
        out.push_str(&format!("   {} {}\n\n", p::URL_LABEL, issue.html_url));
    }
    out
}

pub fn search(query: &str, matches: &[&ApiRepository]) -> String {
    if matches.is_empty() {
        return format!(
            "{} {} repositório encontrado para: {}",
            p::ERROR,
            p::NO_RESULTS,
            query
        );
    }

    let mut out = format!(
        "{} Encontrados {} repositórios:\n\n",
        p::CHECKMARK,
        matches.len()
    );
    for repo in matches {
        out.push_str(&format!("{} {}\n", p::REPOSITORY, single_line(&repo.name)));
        if let Some(description) = &repo.description {
            out.push_str(&format!("   {}\n", single_line(description)));
        }
        out.push_str(&format!("   {}\n\n", repo.html_url));
    }
    out
}

/// User-facing message for a failed tool call.
pub fn error(err: &GitHubError) -> String {
    match err.status() {
        Some(401) => format!(
            "{} Erro de autenticação: Token GitHub inválido ou expirado",
            p::ERROR
        ),
        Some(404) => format!(
            "{} Recurso não encontrado: Repositório ou arquivo não existe",
            p::ERROR
        ),
        Some(403) => format!(
            "{} Acesso negado: Token sem permissão suficiente",
            p::ERROR
        ),
        _ => format!("{} Erro: {}", p::ERROR, err),
    }
}

/// Keeps a value on one line so it cannot start a new record.
fn single_line(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

fn preview(body: &str) -> String {
    if body.chars().count() > ISSUE_BODY_PREVIEW {
        let head: String = body.chars().take(ISSUE_BODY_PREVIEW).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}
