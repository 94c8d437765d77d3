//! Property-based tests for prefix normalization and candidate ordering.
//!
//! 1. Normalization: every spelling of a prefix maps to one key, and
//!    normalizing twice changes nothing.
//! 2. Ordering: longer registered prefixes are always probed before shorter
//!    ones, and directories keep their registration order.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use nsmap_resolve::{
    normalize_base_dir, normalize_prefix, FsLoader, PrefixResolver, ResolverConfig,
};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,7}").expect("valid regex")
}

fn namespace_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..5)
}

fn resolver() -> PrefixResolver<FsLoader> {
    PrefixResolver::with_config(
        ResolverConfig::default()
            .with_delimiter(':')
            .with_separator('/'),
    )
}

proptest! {
    #[test]
    fn prefix_spellings_normalize_alike(
        segments in namespace_strategy(),
        leading in 0usize..4,
        trailing in 0usize..4,
    ) {
        let bare = segments.join(":");
        let padded = format!("{}{}{}", ":".repeat(leading), bare, ":".repeat(trailing));

        let key = normalize_prefix(&padded, ':');
        prop_assert_eq!(&key, &format!("{bare}:"));
        prop_assert!(!key.starts_with(':'));
        prop_assert!(!key.ends_with("::"));
        prop_assert_eq!(normalize_prefix(&key, ':'), key);
    }

    #[test]
    fn base_dir_has_one_trailing_separator(
        segments in namespace_strategy(),
        trailing in 0usize..4,
    ) {
        let dir = format!("/{}{}", segments.join("/"), "/".repeat(trailing));

        let normalized = normalize_base_dir(&dir, '/');
        prop_assert!(normalized.ends_with('/'));
        prop_assert!(!normalized.ends_with("//"));
        prop_assert_eq!(normalize_base_dir(&normalized, '/'), normalized);
    }

    #[test]
    fn candidates_longest_prefix_first(segments in prop::collection::vec(segment_strategy(), 2..6)) {
        let mut resolver = resolver();
        // Register every proper prefix of the namespace, shortest first.
        for depth in 1..segments.len() {
            resolver.register(&segments[..depth].join(":"), &format!("/d{depth}"));
        }

        let identifier = segments.join(":");
        let candidates = resolver.candidates(&identifier);
        prop_assert_eq!(candidates.len(), segments.len() - 1);

        let lengths: Vec<usize> = candidates.iter().map(|c| c.prefix.len()).collect();
        prop_assert!(lengths.windows(2).all(|w| w[0] > w[1]));

        // The shortest prefix maps the remaining segments onto directories.
        let last = candidates.last().unwrap();
        let expected = format!("/d1/{}.php", segments[1..].join("/"));
        prop_assert_eq!(last.path.to_str().unwrap(), expected.as_str());
    }

    #[test]
    fn directories_keep_registration_order(dirs in prop::collection::vec(segment_strategy(), 1..6)) {
        let mut resolver = resolver();
        for dir in &dirs {
            resolver.register("App", &format!("/{dir}"));
        }

        let paths: Vec<String> = resolver
            .candidates("App:User")
            .into_iter()
            .map(|c| c.path.display().to_string())
            .collect();
        let expected: Vec<String> = dirs.iter().map(|d| format!("/{d}/User.php")).collect();
        prop_assert_eq!(paths, expected);
    }
}
