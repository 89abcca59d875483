//! Errors surfaced by path writes.

use thiserror::Error;

use crate::node::Key;

/// Why a write could not place its value.
///
/// Reads never fail; an absent path is `None`. Writes walk and build the
/// intermediate spine of the path, and that walk is where these arise.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The path expression produced no keys to write under.
    #[error("path expression produced no keys")]
    EmptyPath,

    /// An absent intermediate hop could not be auto-constructed because
    /// the node at the pointer offers no empty child.
    #[error("cannot construct an intermediate container under key `{key}`")]
    Unbuildable {
        /// The key the walk stopped at.
        key: Key,
    },

    /// An intermediate hop exists but cannot be stepped into mutably.
    #[error("cannot write through key `{key}`")]
    NotWritable {
        /// The key the walk stopped at.
        key: Key,
    },
}
