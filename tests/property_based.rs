//! Ordering and determinism properties of the interpreter.

use proptest::prelude::*;

use github_assistant::interpreter::{parse_files, parse_repositories};

fn repository_block(name: &str, stars: Option<u32>, forks: Option<u32>) -> String {
    let mut block = format!("📦 {}\n   URL: https://github.com/octo/{}\n", name, name);
    match (stars, forks) {
        (None, None) => {}
        (s, f) => {
            let show = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
            block.push_str(&format!("   ⭐ {} | 🔱 {} | 🐛 0 issues\n", show(s), show(f)));
        }
    }
    block.push_str("   🌐 Público\n\n");
    block
}

fn file_line(name: &str, is_directory: bool, size: u64) -> String {
    if is_directory {
        format!("📁 {}\n", name)
    } else {
        format!("📄 {} ({} bytes)\n", name, size)
    }
}

fn repositories() -> impl Strategy<Value = Vec<(String, Option<u32>, Option<u32>)>> {
    prop::collection::vec(
        (
            "[a-z][a-z0-9-]{0,12}",
            prop::option::of(0u32..10_000),
            prop::option::of(0u32..500),
        ),
        0..20,
    )
}

fn entries() -> impl Strategy<Value = Vec<(String, bool, u64)>> {
    prop::collection::vec(("[A-Za-z][A-Za-z0-9_.]{0,12}", any::<bool>(), 0u64..1_000_000), 0..30)
}

proptest! {
    #[test]
    fn stars_never_increase(repos in repositories()) {
        let text: String = std::iter::once("✅ Total\n\n".to_string())
            .chain(repos.iter().map(|(n, s, f)| repository_block(n, *s, *f)))
            .collect();
        let result = parse_repositories(Some(&text));

        prop_assert_eq!(result.total(), repos.len());
        prop_assert_eq!(result.repositories().len(), repos.len());

        let stars: Vec<Option<u32>> = result.repositories().iter().map(|r| r.stars).collect();
        for pair in stars.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "absent star count before a present one"),
                _ => {}
            }
        }
    }

    #[test]
    fn fork_segment_is_independent(stars in 0u32..1000) {
        let text = format!("📦 x\n⭐ {} | 🔱 none\n", stars);
        let result = parse_repositories(Some(&text));

        prop_assert_eq!(result.repositories()[0].stars, Some(stars));
        prop_assert_eq!(result.repositories()[0].forks, None);
    }

    #[test]
    fn directories_precede_files(files in entries()) {
        let text: String = files.iter().map(|(n, d, s)| file_line(n, *d, *s)).collect();
        let result = parse_files(Some(&text), "demo");

        prop_assert_eq!(result.total_files(), files.len());
        prop_assert_eq!(result.repository_name(), "demo");

        let nodes = result.files();
        let split = nodes.iter().take_while(|f| f.is_directory).count();
        prop_assert!(nodes[split..].iter().all(|f| !f.is_directory));

        for group in [&nodes[..split], &nodes[split..]] {
            for pair in group.windows(2) {
                prop_assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
            }
        }
        for node in &nodes[split..] {
            prop_assert!(node.size.is_some());
        }
    }

    #[test]
    fn parsing_is_deterministic(repos in repositories(), files in entries()) {
        let repo_text: String = repos.iter().map(|(n, s, f)| repository_block(n, *s, *f)).collect();
        prop_assert_eq!(parse_repositories(Some(&repo_text)), parse_repositories(Some(&repo_text)));

        let file_text: String = files.iter().map(|(n, d, s)| file_line(n, *d, *s)).collect();
        prop_assert_eq!(parse_files(Some(&file_text), "demo"), parse_files(Some(&file_text), "demo"));
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,400}") {
        let repos = parse_repositories(Some(&text));
        prop_assert!(repos.repositories().iter().all(|r| !r.name.trim().is_empty()));

        let files = parse_files(Some(&text), "demo");
        prop_assert!(files.files().iter().all(|f| !f.name.trim().is_empty()));
    }
}
