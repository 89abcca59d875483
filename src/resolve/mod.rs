//! Path splitting, traversal, and walk-and-build writes.

mod error;
mod interface;
mod resolver;

pub use error::ResolveError;
pub use interface::Interface;
pub use resolver::{PathExpression, Resolver, DEFAULT_SEPARATOR};
