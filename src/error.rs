//! Errors reported by tree operations.

/// The ways a tree operation can fail. Failed operations never modify the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The search ran out of nodes before reaching one with the requested key.
    #[error("key not found")]
    KeyNotFound,

    /// A k-th largest query asked for a rank the tree does not have.
    #[error("k = {k} is out of range for a tree holding {len} values")]
    OutOfRange {
        /// The requested rank (1 is the largest).
        k: usize,
        /// How many values the tree held when it was queried.
        len: usize,
    },
}

/// Shorthand for results of tree operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
