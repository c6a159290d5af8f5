//! Line classifier for the tool-text micro-protocol.
//!
//! Every function here takes one already-trimmed line and decides what it
//! means on its own. Cross-line state lives in the parsers.

use std::str::FromStr;

use super::protocol;

/// Role of a single line in a repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryLine<'a> {
    /// Opens a new record. The name may be blank; the parser rejects it.
    Header(&'a str),
    Description(&'a str),
    Url(&'a str),
    Language(&'a str),
    Metrics {
        stars: Option<u32>,
        forks: Option<u32>,
    },
    Visibility {
        private: bool,
    },
    Noise,
}

/// Role of a single line in a file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLine<'a> {
    Entry {
        name: &'a str,
        is_directory: bool,
        size: Option<u64>,
    },
    Skip,
}

pub fn classify_repository_line(line: &str) -> RepositoryLine<'_> {
    if let Some(name) = line.strip_prefix(protocol::REPOSITORY) {
        return RepositoryLine::Header(name.trim());
    }
    if let Some(value) = line.strip_prefix(protocol::DESCRIPTION_LABEL) {
        return RepositoryLine::Description(value.trim());
    }
    if let Some(value) = line.strip_prefix(protocol::URL_LABEL) {
        return RepositoryLine::Url(value.trim());
    }
    if let Some(value) = line.strip_prefix(protocol::LANGUAGE_LABEL) {
        return RepositoryLine::Language(value.trim());
    }
    if line.contains(protocol::STAR) {
        let mut segments = line.split(protocol::FIELD_SEPARATOR);
        let stars = segments.next().and_then(digits);
        let forks = segments.next().and_then(digits);
        return RepositoryLine::Metrics { stars, forks };
    }
    if line.contains(protocol::PRIVATE) || line.contains(protocol::PUBLIC) {
        return RepositoryLine::Visibility {
            private: line.contains(protocol::PRIVATE),
        };
    }
    RepositoryLine::Noise
}

/// Classifies one line of a file listing.
///
/// Only lines led by a directory or file marker followed by a space can
/// yield an entry. Blank lines, checkmark headers and dangling `bytes)`
/// fragments are skipped, as is anything else.
pub fn classify_file_line(line: &str) -> FileLine<'_> {
    if line.is_empty() || line.starts_with(protocol::CHECKMARK) {
        return FileLine::Skip;
    }
    if line.contains(protocol::SIZE_ARTIFACT) && !line.contains(protocol::SIZE_OPEN) {
        return FileLine::Skip;
    }

    let (is_directory, rest) = if let Some(rest) = line.strip_prefix(protocol::DIRECTORY) {
        (true, rest)
    } else if let Some(rest) = line.strip_prefix(protocol::FILE) {
        (false, rest)
    } else {
        return FileLine::Skip;
    };

    let Some(rest) = rest.strip_prefix(' ') else {
        return FileLine::Skip;
    };
    let rest = rest.trim();

    let (name, size) = name_and_size(rest);
    if name.is_empty() {
        return FileLine::Skip;
    }

    FileLine::Entry {
        name,
        is_directory,
        size,
    }
}

/// A trailing `(N bytes)` is split at its own `(`, so names may contain
/// parentheses. Without one the name ends at the first `(`.
fn name_and_size(rest: &str) -> (&str, Option<u64>) {
    let trailing = rest
        .strip_suffix(protocol::SIZE_ARTIFACT)
        .and_then(|head| head.rfind(protocol::SIZE_OPEN));
    if let Some(open) = trailing {
        return (rest[..open].trim(), size_annotation(&rest[open..]));
    }
    let name = rest.split(protocol::SIZE_OPEN).next().unwrap_or_default().trim();
    (name, size_annotation(rest))
}

/// Keeps only the ASCII digits of `segment` and parses them.
///
/// Returns `None` when no digit is left or the number does not fit `T`.
pub fn digits<T: FromStr>(segment: &str) -> Option<T> {
    let digits: String = segment.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Size from a `name (N bytes)` annotation.
pub fn size_annotation(text: &str) -> Option<u64> {
    let open = text.find(protocol::SIZE_OPEN)?;
    let after = &text[open + protocol::SIZE_OPEN.len_utf8()..];
    let end = after.find(protocol::BYTES)?;
    after[..end].trim().parse().ok()
}
