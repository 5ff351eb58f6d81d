//! Property-based tests for resolution.
//!
//! The parse module carries its own round-trip properties; this module
//! covers the resolver.

use super::drive::match_drive;
use super::resolver::PathResolver;
use super::working_dir::FixedWorkingDirectory;
use proptest::prelude::*;

fn resolver() -> PathResolver {
    PathResolver::new().with_working_dir(FixedWorkingDirectory::new("C:\\base\\dir"))
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("//"), Just("\\/")]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment_strategy(), 1..8),
        separator_strategy(),
    )
        .prop_map(|(parts, sep)| parts.join(sep))
}

fn input_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            4 => Just(""),
            1 => Just("/"),
            1 => Just("D:"),
            1 => Just("d:\\"),
            1 => Just("\\\\srv\\share\\"),
        ],
        relative_path_strategy(),
    )
        .prop_map(|(prefix, rest)| format!("{prefix}{rest}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A resolved path never keeps `.`, `..` or empty segments after its root
    #[test]
    fn resolved_has_no_dot_segments(inputs in prop::collection::vec(input_strategy(), 0..4)) {
        let resolved = resolver().resolve(&inputs).unwrap();
        let token = match_drive(&resolved).unwrap_or_default();
        let body = &resolved[token.len()..];
        prop_assert!(body.starts_with('\\'));
        if body.len() > 1 {
            for segment in body[1..].split('\\') {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, ".");
                prop_assert_ne!(segment, "..");
            }
        }
    }

    // Output never contains a forward separator
    #[test]
    fn resolved_uses_back_separator(inputs in prop::collection::vec(input_strategy(), 0..4)) {
        prop_assert!(!resolver().resolve(&inputs).unwrap().contains('/'));
    }

    // Resolving an already resolved path changes nothing
    #[test]
    fn resolve_is_idempotent(inputs in prop::collection::vec(input_strategy(), 0..4)) {
        let r = resolver();
        let once = r.resolve(&inputs).unwrap();
        let twice = r.resolve(&[once.as_str()]).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Normalization is idempotent
    #[test]
    fn normalize_is_idempotent(input in input_strategy()) {
        let r = resolver();
        let once = r.normalize(&input).unwrap();
        prop_assert_eq!(r.normalize(&once).unwrap(), once);
    }

    // The choice of separator in the input does not matter
    #[test]
    fn separator_choice_is_irrelevant(path in relative_path_strategy()) {
        let r = resolver();
        let forward = path.replace('\\', "/");
        let back = path.replace('/', "\\");
        prop_assert_eq!(r.resolve(&[forward]).unwrap(), r.resolve(&[back]).unwrap());
    }

    // join of several inputs equals normalize of their `\`-joined form
    #[test]
    fn join_matches_normalize_of_joined(parts in prop::collection::vec(relative_path_strategy(), 1..4)) {
        let r = resolver();
        prop_assert_eq!(r.join(&parts).unwrap(), r.normalize(&parts.join("\\")).unwrap());
    }
}
