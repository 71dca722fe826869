//! Directory-separator conventions.
//!
//! A [`SeparatorConvention`] pairs the separator a platform writes with the
//! alternate separator it also accepts on input. The convention for the
//! running platform is looked up once via [`SeparatorConvention::platform`]
//! and then passed by value to every operation that needs it.

use std::fmt;

/// The primary and alternate directory separators of a platform.
///
/// # Examples
///
/// ```
/// use truecase::path::SeparatorConvention;
///
/// let unix = SeparatorConvention::unix();
/// assert_eq!(unix.primary(), '/');
/// assert_eq!(unix.alternate(), '\\');
/// assert!(unix.is_separator('\\'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeparatorConvention {
    primary: char,
    alternate: char,
}

impl SeparatorConvention {
    /// Forward slash primary, backslash alternate.
    #[must_use]
    pub const fn unix() -> Self {
        Self {
            primary: '/',
            alternate: '\\',
        }
    }

    /// Backslash primary, forward slash alternate.
    #[must_use]
    pub const fn windows() -> Self {
        Self {
            primary: '\\',
            alternate: '/',
        }
    }

    /// The convention of the platform this binary was built for.
    #[must_use]
    pub const fn platform() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::unix()
        }
    }

    /// The separator written by normalization.
    #[must_use]
    pub const fn primary(self) -> char {
        self.primary
    }

    /// The separator rewritten to [`primary`](Self::primary) by normalization.
    #[must_use]
    pub const fn alternate(self) -> char {
        self.alternate
    }

    /// Whether `c` is either separator of this convention.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        c == self.primary || c == self.alternate
    }
}

impl Default for SeparatorConvention {
    fn default() -> Self {
        Self::platform()
    }
}

impl fmt::Display for SeparatorConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' (alternate '{}')", self.primary, self.alternate)
    }
}
