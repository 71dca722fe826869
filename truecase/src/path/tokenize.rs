//! Splitting paths into components.
//!
//! Tokenization works on paths that have already been normalized to one
//! separator convention: only the primary separator delimits components.
//! A run of separators counts as a single boundary, so no component is ever
//! empty. The current-directory marker `"."` is kept as a component of its
//! own; the resolver decides what to do with it.

use crate::path::separator::SeparatorConvention;

/// The current-directory marker.
pub const CURRENT_DIR: &str = ".";

/// Iterate over the non-empty components of `path`, borrowing from it.
///
/// # Examples
///
/// ```
/// use truecase::path::tokenize::components;
/// use truecase::path::SeparatorConvention;
///
/// let parts: Vec<&str> = components("//maps///office.map", SeparatorConvention::unix()).collect();
/// assert_eq!(parts, ["maps", "office.map"]);
/// ```
pub fn components(path: &str, sep: SeparatorConvention) -> impl Iterator<Item = &str> {
    path.split(sep.primary()).filter(|part| !part.is_empty())
}

/// Split `path` into its ordered, non-empty components.
///
/// Empty input and input made only of separators both yield no components.
///
/// # Examples
///
/// ```
/// use truecase::path::tokenize::tokenize;
/// use truecase::path::SeparatorConvention;
///
/// let sep = SeparatorConvention::unix();
/// assert_eq!(tokenize("./a/b", sep), [".", "a", "b"]);
/// assert!(tokenize("", sep).is_empty());
/// assert!(tokenize("/", sep).is_empty());
/// ```
#[must_use]
pub fn tokenize(path: &str, sep: SeparatorConvention) -> Vec<String> {
    components(path, sep).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIX: SeparatorConvention = SeparatorConvention::unix();
    const WINDOWS: SeparatorConvention = SeparatorConvention::windows();

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("", UNIX).is_empty());
    }

    #[test]
    fn test_tokenize_only_separators() {
        assert!(tokenize("/", UNIX).is_empty());
        assert!(tokenize("////", UNIX).is_empty());
        assert!(tokenize("\\\\", WINDOWS).is_empty());
    }

    #[test]
    fn test_tokenize_keeps_leading_dot() {
        assert_eq!(tokenize("./a/b", UNIX), [".", "a", "b"]);
        assert_eq!(tokenize(".", UNIX), ["."]);
    }

    #[test]
    fn test_tokenize_keeps_inner_dot() {
        assert_eq!(tokenize("a/./b", UNIX), ["a", ".", "b"]);
    }

    #[test]
    fn test_tokenize_collapses_separator_runs() {
        assert_eq!(tokenize("/a//b///c/", UNIX), ["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_only_splits_on_primary() {
        // Callers normalize first; an unnormalized alternate stays inside a component.
        assert_eq!(tokenize("a\\b/c", UNIX), ["a\\b", "c"]);
        assert_eq!(tokenize("a\\b/c", WINDOWS), ["a", "b/c"]);
    }

    #[test]
    fn test_components_borrow() {
        let path = String::from("maps/Office.map");
        let parts: Vec<&str> = components(&path, UNIX).collect();
        assert_eq!(parts, ["maps", "Office.map"]);
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn parts_strategy() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-zA-Z0-9_.-]{1,12}", 0..8)
        }

        proptest! {
            /// Re-joining the components reproduces a single-separator path
            #[test]
            fn tokenize_round_trip(parts in parts_strategy()) {
                let path = parts.join("/");
                prop_assert_eq!(tokenize(&path, UNIX), parts);
            }

            /// Separator runs collapse to one boundary
            #[test]
            fn tokenize_collapses_runs(parts in parts_strategy(), run in 1..5usize) {
                let glue = "/".repeat(run);
                let path = format!("{glue}{}{glue}", parts.join(&glue));
                prop_assert_eq!(tokenize(&path, UNIX), parts);
            }

            /// No component is ever empty or contains the separator
            #[test]
            fn tokenize_components_well_formed(s in "[a-z/]{0,40}") {
                for part in tokenize(&s, UNIX) {
                    prop_assert!(!part.is_empty());
                    prop_assert!(!part.contains('/'));
                }
            }
        }
    }
}
