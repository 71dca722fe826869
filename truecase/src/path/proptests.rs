//! Property-based tests for resolution against real directory trees.
//!
//! Note: normalization and tokenization carry their own inline property
//! tests. This module builds trees on disk, so it runs behind the
//! `property-tests` feature.

use super::resolver::CaseInsensitiveResolver;
use super::separator::SeparatorConvention;
use crate::error::ErrorKind;
use proptest::prelude::*;
use std::fs;
use tempfile::tempdir;

// Component names that cannot collide with each other once case-folded.
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,11}"
}

fn tree_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component_strategy(), 1..6)
}

fn scramble_case(s: &str, mask: u64) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 64)) == 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Any casing of an existing path resolves to the on-disk casing
    #[test]
    fn resolve_recovers_true_case(parts in tree_strategy(), mask in any::<u64>()) {
        let dir = tempdir().unwrap();
        let sep = SeparatorConvention::platform();
        let (leaf, dirs) = parts.split_last().unwrap();

        let mut on_disk = dir.path().to_path_buf();
        for part in dirs {
            on_disk.push(part);
        }
        fs::create_dir_all(&on_disk).unwrap();
        fs::write(on_disk.join(leaf), "x").unwrap();

        let expected = parts.join(&sep.primary().to_string());
        let request = scramble_case(&parts.join("/"), mask);

        let resolved = CaseInsensitiveResolver::new()
            .resolve(dir.path(), &request, 4096)
            .unwrap();
        prop_assert_eq!(resolved.as_str(), expected.as_str());
        prop_assert!(resolved.full_path().is_file());
    }

    // A capacity one byte short of the result always fails cleanly
    #[test]
    fn resolve_never_exceeds_capacity(parts in tree_strategy()) {
        let dir = tempdir().unwrap();
        let mut on_disk = dir.path().to_path_buf();
        for part in &parts {
            on_disk.push(part);
        }
        fs::create_dir_all(&on_disk).unwrap();

        let request = parts.join("/");
        let full_len = request.len();
        let resolver = CaseInsensitiveResolver::new();

        let err = resolver.resolve(dir.path(), &request, full_len - 1).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
        prop_assert!(resolver.resolve(dir.path(), &request, full_len).is_ok());
    }

    // Requests for names that are absent report the first missing component
    #[test]
    fn resolve_reports_missing_component(parts in tree_strategy()) {
        let dir = tempdir().unwrap();
        let request = parts.join("/");

        let err = CaseInsensitiveResolver::new()
            .resolve(dir.path(), &request, 4096)
            .unwrap_err();
        match err {
            crate::Error::ComponentNotFound { component, .. } => {
                prop_assert_eq!(component, parts[0].clone());
            }
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
