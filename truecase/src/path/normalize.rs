//! Separator normalization under a fixed output capacity.
//!
//! This module rewrites paths to a single separator convention, guarantees
//! a trailing separator, and joins two fragments. Capacities are measured in
//! bytes of the resulting string.
//!
//! The two capacity-bounded operations deliberately fail in different ways:
//!
//! - [`ensure_trailing_separator`] leaves the path untouched when there is
//!   no room for the separator. Callers must treat the result as "not
//!   guaranteed to end in a separator".
//! - [`join_path`] truncates the joined result to fit.

use crate::path::separator::SeparatorConvention;

/// Rewrite every alternate separator to the primary separator.
///
/// # Examples
///
/// ```
/// use truecase::path::normalize::normalize_separators;
/// use truecase::path::SeparatorConvention;
///
/// let unix = SeparatorConvention::unix();
/// assert_eq!(normalize_separators("Maps\\Office/a.map", unix), "Maps/Office/a.map");
///
/// let windows = SeparatorConvention::windows();
/// assert_eq!(normalize_separators("Maps/Office", windows), "Maps\\Office");
/// ```
#[must_use]
pub fn normalize_separators(path: &str, sep: SeparatorConvention) -> String {
    path.chars()
        .map(|c| if c == sep.alternate() { sep.primary() } else { c })
        .collect()
}

/// Append the primary separator unless `path` already ends in a separator.
///
/// An empty path always gets a separator. If appending would take the path
/// past `capacity`, the path is returned unchanged.
///
/// # Examples
///
/// ```
/// use truecase::path::normalize::ensure_trailing_separator;
/// use truecase::path::SeparatorConvention;
///
/// let sep = SeparatorConvention::unix();
/// assert_eq!(ensure_trailing_separator("maps", 16, sep), "maps/");
/// assert_eq!(ensure_trailing_separator("maps\\", 16, sep), "maps\\");
/// assert_eq!(ensure_trailing_separator("maps", 4, sep), "maps");
/// ```
#[must_use]
pub fn ensure_trailing_separator(path: &str, capacity: usize, sep: SeparatorConvention) -> String {
    let mut out = path.to_string();
    push_trailing_separator(&mut out, capacity, sep);
    out
}

/// Join `child` onto `base` with separators between and after them.
///
/// The result is `normalize_separators(ensure_trailing_separator(base) +
/// ensure_trailing_separator(child))`. When that does not fit in
/// `capacity`, it is truncated to fit (on a character boundary).
///
/// # Examples
///
/// ```
/// use truecase::path::normalize::join_path;
/// use truecase::path::SeparatorConvention;
///
/// let sep = SeparatorConvention::unix();
/// assert_eq!(join_path("a", "b", 100, sep), "a/b/");
/// assert_eq!(join_path("base\\", "maps", 100, sep), "base/maps/");
/// assert_eq!(join_path("abc", "def", 5, sep), "abc/d");
/// ```
#[must_use]
pub fn join_path(base: &str, child: &str, capacity: usize, sep: SeparatorConvention) -> String {
    let mut joined = String::with_capacity(capacity.min(base.len() + child.len() + 2));
    push_truncated(&mut joined, base, capacity);
    push_trailing_separator(&mut joined, capacity, sep);
    push_truncated(&mut joined, child, capacity);
    push_trailing_separator(&mut joined, capacity, sep);
    normalize_separators(&joined, sep)
}

fn push_trailing_separator(path: &mut String, capacity: usize, sep: SeparatorConvention) {
    if path.chars().next_back().is_some_and(|c| sep.is_separator(c)) {
        return;
    }
    if path.len() + sep.primary().len_utf8() > capacity {
        return;
    }
    path.push(sep.primary());
}

fn push_truncated(dest: &mut String, src: &str, capacity: usize) {
    let room = capacity.saturating_sub(dest.len());
    dest.push_str(&src[..floor_char_boundary(src, room)]);
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
