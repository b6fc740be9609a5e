//! Errors reported by the checked [`Tree`][crate::Tree] operations.

/// Failure from an operation that reports, rather than ignores, a missing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No node in the tree holds the requested key.
    #[error("key {0} not found in tree")]
    KeyNotFound(i32),
}
