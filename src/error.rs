//! Unified error type.

use std::fmt;

/// The error type returned by waypost's fallible operations.
///
/// Every variant is a configuration or wiring defect, caught while the
/// application starts; none of them can occur once a
/// [`Registry`](crate::Registry) exists. A path that simply matches no
/// route is *not* an error: [`resolve`](crate::Registry::resolve) returns
/// `None` for that, and the shell picks the fallback screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two definitions declare the same `path`.
    DuplicatePath { path: String },
    /// Two definitions declare the same `name`.
    DuplicateName { name: String },
    /// A definition's `path` is not a routable literal.
    InvalidPath { path: String, reason: String },
    /// [`bootstrap::current`](crate::bootstrap::current) ran before
    /// [`bootstrap::install`](crate::bootstrap::install): a caller
    /// ordering bug in application startup.
    NotInitialized,
    /// [`bootstrap::install`](crate::bootstrap::install) ran twice. The
    /// installed table is permanent for the life of the process.
    AlreadyInstalled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePath { path } => write!(f, "duplicate route path `{path}`"),
            Self::DuplicateName { name } => write!(f, "duplicate route name `{name}`"),
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid route path `{path}`: {reason}")
            }
            Self::NotInitialized => f.write_str("route registry has not been installed"),
            Self::AlreadyInstalled => f.write_str("route registry is already installed"),
        }
    }
}

impl std::error::Error for Error {}
