//! Public error surface for the table operations.

use core::fmt;

/// Errors returned by the fallible table operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TableError {
    /// The key (or key pair) is not present. Recoverable; `contains`-style
    /// queries map this to `false`.
    KeyNotFound,
    /// Every configured capacity is exhausted. A sizing misconfiguration:
    /// retrying the same insert cannot succeed.
    TableFull,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::KeyNotFound => f.write_str("key not found"),
            TableError::TableFull => f.write_str("table is full"),
        }
    }
}

impl std::error::Error for TableError {}
