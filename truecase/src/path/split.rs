//! Splitting a path into its directory and file-name parts.

use crate::error::{Error, Result};
use crate::path::normalize::normalize_separators;
use crate::path::separator::SeparatorConvention;

/// Everything before the last separator of `path`, after normalization.
///
/// A path without any separator has an empty directory part.
///
/// # Errors
///
/// Returns `InvalidInput` if `path` is empty.
///
/// # Examples
///
/// ```
/// use truecase::path::split::directory_part;
/// use truecase::path::SeparatorConvention;
///
/// let sep = SeparatorConvention::unix();
/// assert_eq!(directory_part("maps\\office/a.map", sep).unwrap(), "maps/office");
/// assert_eq!(directory_part("a.map", sep).unwrap(), "");
/// ```
pub fn directory_part(path: &str, sep: SeparatorConvention) -> Result<String> {
    let normalized = normalized_non_empty(path, sep)?;
    Ok(match normalized.rfind(sep.primary()) {
        Some(index) => normalized[..index].to_string(),
        None => String::new(),
    })
}

/// Everything after the last separator of `path`, after normalization.
///
/// A path without any separator is its own file name.
///
/// # Errors
///
/// Returns `InvalidInput` if `path` is empty.
///
/// # Examples
///
/// ```
/// use truecase::path::split::file_name_part;
/// use truecase::path::SeparatorConvention;
///
/// let sep = SeparatorConvention::windows();
/// assert_eq!(file_name_part("maps/office\\a.map", sep).unwrap(), "a.map");
/// assert_eq!(file_name_part("maps/", sep).unwrap(), "");
/// ```
pub fn file_name_part(path: &str, sep: SeparatorConvention) -> Result<String> {
    let normalized = normalized_non_empty(path, sep)?;
    Ok(match normalized.rfind(sep.primary()) {
        Some(index) => normalized[index + sep.primary().len_utf8()..].to_string(),
        None => normalized,
    })
}

/// Remove one pair of surrounding double quotes.
///
/// Strings shorter than two characters, or not both starting and ending
/// with `"`, come back unchanged.
///
/// # Examples
///
/// ```
/// use truecase::path::split::strip_quotes;
///
/// assert_eq!(strip_quotes("\"My Maps\""), "My Maps");
/// assert_eq!(strip_quotes("\"half"), "\"half");
/// assert_eq!(strip_quotes("\""), "\"");
/// ```
#[must_use]
pub fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn normalized_non_empty(path: &str, sep: SeparatorConvention) -> Result<String> {
    if path.is_empty() {
        log::info!("Cannot split an empty path");
        return Err(Error::invalid_input("path", "must not be empty"));
    }
    Ok(normalize_separators(path, sep))
}
