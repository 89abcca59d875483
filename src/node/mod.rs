//! The value model: keys, values, and the record contract.

mod convert;
mod de;
mod key;
pub(crate) mod record;
mod ser;
mod value;

pub use key::Key;
pub use record::{FieldIter, Record};
pub use value::{Table, Value};
