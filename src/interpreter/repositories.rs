//! Repository-list parser.
//!
//! Folds the lines of a "list repositories" tool response into
//! `RepositorySummary` records. A record stays open until the next header
//! or the end of input, whichever comes first.

use std::cmp::Ordering;

use tracing::debug;

use super::classify::{RepositoryLine, classify_repository_line};
use super::protocol;
use crate::models::{RepositoryListResult, RepositorySummary};

pub fn parse_repositories(text: Option<&str>) -> RepositoryListResult {
    let Some(text) = text.filter(|t| !t.is_empty() && !t.contains(protocol::NO_RESULTS)) else {
        return RepositoryListResult::empty();
    };

    let mut repositories = text
        .lines()
        .map(str::trim)
        .fold(Accumulator::default(), Accumulator::push_line)
        .finish();

    sort_by_stars(&mut repositories);
    debug!(count = repositories.len(), "parsed repository listing");

    RepositoryListResult::new(repositories)
}

/// Most starred first; repositories without a star count go last.
/// The sort is stable, so ties keep their listing order.
pub fn sort_by_stars(repositories: &mut [RepositorySummary]) {
    repositories.sort_by(|a, b| match (a.stars, b.stars) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[derive(Default)]
struct Accumulator {
    done: Vec<RepositorySummary>,
    current: Option<RepositorySummary>,
}

impl Accumulator {
    fn push_line(mut self, line: &str) -> Self {
        let line = classify_repository_line(line);

        if let RepositoryLine::Header(name) = line {
            self.flush();
            if !name.is_empty() {
                self.current = Some(RepositorySummary::named(name));
            }
            return self;
        }

        let Some(repo) = self.current.as_mut() else {
            return self;
        };

        match line {
            RepositoryLine::Description(text) => repo.description = non_blank(text),
            RepositoryLine::Url(text) => repo.url = non_blank(text),
            RepositoryLine::Language(text) => repo.language = non_blank(text),
            RepositoryLine::Metrics { stars, forks } => {
                if stars.is_some() {
                    repo.stars = stars;
                }
                if forks.is_some() {
                    repo.forks = forks;
                }
            }
            RepositoryLine::Visibility { private } => repo.is_private = Some(private),
            RepositoryLine::Header(_) | RepositoryLine::Noise => {}
        }
        self
    }

    fn flush(&mut self) {
        if let Some(repo) = self.current.take() {
            self.done.push(repo);
        }
    }

    fn finish(mut self) -> Vec<RepositorySummary> {
        self.flush();
        self.done
    }
}

fn non_blank(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "✅ Total: 3 repositórios\n\
        \n\
        📦 small\n   \
           URL: https://github.com/u/small\n   \
           ⭐ 2 | 🔱 0 | 🐛 0 issues\n   \
           🌐 Público\n\
        \n\
        📦 big\n   \
           Descrição: Popular one\n   \
           URL: https://github.com/u/big\n   \
           Linguagem: Rust\n   \
           ⭐ 120 | 🔱 14 | 🐛 3 issues\n   \
           🔒 Privado\n\
        \n\
        📦 unrated\n   \
           URL: https://github.com/u/unrated\n";

    #[test]
    fn demo_record() {
        let text = "📦 demo-repo\nDescrição: A demo\n⭐ 42 | 🔱 5\n🌐 Público";
        let result = parse_repositories(Some(text));

        assert_eq!(result.total(), 1);
        assert_eq!(
            result.repositories()[0],
            RepositorySummary {
                name: "demo-repo".into(),
                description: Some("A demo".into()),
                url: None,
                language: None,
                stars: Some(42),
                forks: Some(5),
                is_private: Some(false),
            }
        );
    }

    #[test]
    fn sorted_by_stars_with_absent_last() {
        let result = parse_repositories(Some(LISTING));
        let names: Vec<_> = result.repositories().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["big", "small", "unrated"]);
        assert_eq!(result.total(), 3);
        assert_eq!(result.repositories()[0].is_private, Some(true));
        assert_eq!(result.repositories()[0].language.as_deref(), Some("Rust"));
        assert_eq!(result.repositories()[2].stars, None);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(parse_repositories(None).total(), 0);
        assert_eq!(parse_repositories(Some("")).total(), 0);
        assert_eq!(
            parse_repositories(Some("Nenhum repositório encontrado.")).total(),
            0
        );
    }

    #[test]
    fn fields_before_any_header_are_ignored() {
        let text = "Descrição: orphan\n⭐ 9 | 🔱 9\n📦 real\n";
        let result = parse_repositories(Some(text));

        assert_eq!(result.total(), 1);
        assert_eq!(result.repositories()[0], RepositorySummary::named("real"));
    }

    #[test]
    fn blank_header_closes_the_open_record() {
        let text = "📦 first\n⭐ 1 | 🔱 1\n📦   \nDescrição: stray\n📦 second\n";
        let result = parse_repositories(Some(text));
        let names: Vec<_> = result.repositories().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["first", "second"]);
        assert_eq!(result.repositories()[0].description, None);
    }

    #[test]
    fn missing_fork_digits_keep_stars() {
        let result = parse_repositories(Some("📦 x\n⭐ 8 | 🔱 ?\n"));
        let repo = &result.repositories()[0];

        assert_eq!(repo.stars, Some(8));
        assert_eq!(repo.forks, None);
    }

    #[test]
    fn ties_keep_listing_order() {
        let text = "📦 a\n⭐ 5 | 🔱 0\n📦 b\n📦 c\n⭐ 5 | 🔱 1\n📦 d\n";
        let result = parse_repositories(Some(text));
        let names: Vec<_> = result.repositories().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["a", "c", "b", "d"]);
    }

    #[test]
    fn carriage_returns_are_tolerated() {
        let result = parse_repositories(Some("📦 win\r\nLinguagem: C#\r\n"));
        assert_eq!(result.repositories()[0].language.as_deref(), Some("C#"));
    }
}
