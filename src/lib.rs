//! Dotted-path reads and writes over heterogeneous object graphs.
//!
//! A [`Resolver`] splits expressions like `"demographics.first"` on a
//! configurable separator and walks them hop by hop, treating
//! mapping-shaped and accessor-shaped nodes alike. Writes construct the
//! intermediate containers they are missing.

pub mod node;
pub mod resolve;

pub use node::{FieldIter, Key, Record, Table, Value};
pub use resolve::{Interface, PathExpression, ResolveError, Resolver, DEFAULT_SEPARATOR};

/// Creates a [`Resolver`] with the default separator.
///
/// Syntactic sugar for [`Resolver::new`].
///
/// ## Examples
///
/// ```
/// use keypath::{resolver, Resolver, DEFAULT_SEPARATOR};
///
/// assert_eq!(resolver(), Resolver::new());
/// assert_eq!(resolver().separator(), DEFAULT_SEPARATOR);
/// ```
pub fn resolver() -> Resolver {
    Resolver::new()
}
