//! The accessor-shaped node contract.

use std::any::Any;
use std::fmt;

use super::{Table, Value};

/// A node that exposes named members through accessors.
///
/// Implement this for domain types that should participate in path
/// resolution without being flattened into a [`Table`] first. The resolver
/// reads members with [`field`](Record::field) and writes them with
/// [`set_field`](Record::set_field), so a record stays in charge of which
/// members exist and what a write does to them.
///
/// Members hold [`Value`]s and may be unset. Unset members are skipped by
/// [`FieldIter`] and by serialization, while `field` still answers `None`
/// for them.
///
/// ## Examples
///
/// ```
/// use std::any::Any;
/// use keypath::{Record, Value};
///
/// #[derive(Debug, Clone, Default)]
/// struct Contact {
///     first: Option<Value>,
///     last: Option<Value>,
/// }
///
/// impl Record for Contact {
///     fn field(&self, name: &str) -> Option<&Value> {
///         match name {
///             "first" => self.first.as_ref(),
///             "last" => self.last.as_ref(),
///             _ => None,
///         }
///     }
///
///     fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
///         match name {
///             "first" => self.first.as_mut(),
///             "last" => self.last.as_mut(),
///             _ => None,
///         }
///     }
///
///     fn set_field(&mut self, name: &str, value: Value) -> Result<(), Value> {
///         match name {
///             "first" => self.first = Some(value),
///             "last" => self.last = Some(value),
///             _ => return Err(value),
///         }
///         Ok(())
///     }
///
///     fn field_len(&self) -> usize {
///         2
///     }
///
///     fn name_at(&self, index: usize) -> Option<&str> {
///         ["first", "last"].get(index).copied()
///     }
///
///     fn field_at(&self, index: usize) -> Option<&Value> {
///         match index {
///             0 => self.first.as_ref(),
///             1 => self.last.as_ref(),
///             _ => None,
///         }
///     }
///
///     fn clone_boxed(&self) -> Box<dyn Record> {
///         Box::new(self.clone())
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn as_any_mut(&mut self) -> &mut dyn Any {
///         self
///     }
/// }
///
/// let mut contact = Contact::default();
/// contact.set_field("first", Value::from("Matt")).unwrap();
///
/// let node = Value::record(contact);
/// let first = node.as_record().and_then(|record| record.field("first"));
/// assert_eq!(first, Some(&Value::from("Matt")));
/// ```
pub trait Record: Any + Send + Sync + fmt::Debug {
    /// The member stored under `name`, if the record has one and it is set.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Mutable access to the member stored under `name`.
    ///
    /// Records may answer `None` for members they expose read-only.
    fn field_mut(&mut self, name: &str) -> Option<&mut Value>;

    /// Writes `value` to the member named `name`.
    ///
    /// Hands the value back as `Err` when the record has no writable member
    /// under that name, so a caller can fall back to another placement.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), Value>;

    /// The number of members, set or not.
    fn field_len(&self) -> usize;

    /// The name of the member at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// The value of the member at `index`, if set.
    fn field_at(&self, index: usize) -> Option<&Value>;

    /// Clones the record behind a fresh box.
    fn clone_boxed(&self) -> Box<dyn Record>;

    /// The concrete type, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// The concrete type, mutably, for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// A fresh value to graft under an absent key when a write builds
    /// intermediate containers through this record.
    ///
    /// The default answers `None`, which stops such writes with an error.
    /// Override it to opt a record type into auto-construction.
    fn empty_child(&self) -> Option<Value> {
        None
    }

    /// A mapping view over this record, if it carries one.
    ///
    /// A record exposing a mapping view reads through that view
    /// exclusively: member lookups go to the table, not the accessors.
    /// Writes still try the accessors first.
    fn as_table(&self) -> Option<&Table> {
        None
    }

    /// The mapping view, mutably.
    fn as_table_mut(&mut self) -> Option<&mut Table> {
        None
    }
}

impl dyn Record {
    /// Iterates over the set members in declaration order.
    pub fn fields(&self) -> FieldIter<'_> {
        FieldIter::new(self)
    }

    /// Returns `true` when the record is a `T`.
    pub fn is<T: Record>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts to a concrete record type.
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Downcasts to a concrete record type, mutably.
    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

impl Clone for Box<dyn Record> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Records compare structurally: equal when every set member of one is
/// matched by name in the other, independent of concrete type.
impl PartialEq for dyn Record {
    fn eq(&self, other: &Self) -> bool {
        let mut matched = 0;
        for (name, value) in self.fields() {
            if other.field(name) != Some(value) {
                return false;
            }
            matched += 1;
        }
        matched == other.fields().count()
    }
}

/// Iterator over the set members of a [`Record`], yielding `(name, value)`
/// pairs in declaration order. Unset members are skipped.
pub struct FieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> FieldIter<'a> {
    pub fn new(record: &'a dyn Record) -> Self {
        FieldIter { record, index: 0 }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.record.field_len() {
            let index = self.index;
            self.index += 1;
            let name = self.record.name_at(index)?;
            if let Some(value) = self.record.field_at(index) {
                return Some((name, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.record.field_len().saturating_sub(self.index)))
    }
}
