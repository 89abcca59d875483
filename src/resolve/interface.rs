//! Single-hop reads and writes against one node.

use crate::node::{Key, Table, Value};

/// Reads and writes one member of one node, without any path walking.
///
/// The interface is the duck-typing seam of the crate: it decides how a
/// node answers for a key by probing the node's shape, not its concrete
/// type. Mapping-shaped nodes are read through their table with the two
/// key spellings treated as interchangeable; accessor-shaped nodes are
/// read through [`Record::field`](crate::Record::field).
///
/// Reads and writes probe the shapes in opposite orders. A read prefers
/// the mapping view and never falls back to accessors, while a write
/// offers the value to the accessors first and falls back to the mapping
/// view when the record refuses it. Writes against a node with neither
/// shape are silently dropped.
///
/// ## Examples
///
/// ```
/// use keypath::{table, Interface, Key, Value};
///
/// let interface = Interface::new();
/// let mut node = Value::Table(table! { Key::symbol("id") => 1 });
///
/// // Either spelling reaches the member.
/// assert_eq!(interface.get(&node, &Key::name("id")), Some(&Value::Integer(1)));
///
/// interface.set(&mut node, &Key::name("active"), Value::from(true));
/// assert_eq!(interface.get(&node, &Key::name("active")), Some(&Value::Boolean(true)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interface;

impl Interface {
    pub fn new() -> Self {
        Interface
    }

    /// The member of `node` under `key`, if the node has one.
    ///
    /// Scalars and arrays answer `None` for every key.
    pub fn get<'v>(&self, node: &'v Value, key: &Key) -> Option<&'v Value> {
        if let Some(table) = node.as_table() {
            return indifferent_get(table, key);
        }
        if let Some(record) = node.as_record() {
            return record.field(key.text());
        }
        None
    }

    /// The member of `node` under `key`, mutably.
    ///
    /// Follows the same shape dispatch as [`get`](Interface::get): a node
    /// with a mapping view answers through it or not at all.
    pub fn get_mut<'v>(&self, node: &'v mut Value, key: &Key) -> Option<&'v mut Value> {
        if node.as_table().is_some() {
            let table = node.as_table_mut()?;
            return indifferent_get_mut(table, key);
        }
        if node.as_record().is_some() {
            return node.as_record_mut()?.field_mut(key.text());
        }
        None
    }

    /// Writes `value` under `key` on `node`.
    ///
    /// Accessor-shaped nodes get the first offer; when the record refuses
    /// the member, the value falls through to the mapping view, stored
    /// under the key exactly as given. A node with neither shape swallows
    /// the write.
    pub fn set(&self, node: &mut Value, key: &Key, value: Value) {
        let value = match node.as_record_mut() {
            Some(record) => match record.set_field(key.text(), value) {
                Ok(()) => return,
                Err(value) => value,
            },
            None => value,
        };
        if let Some(table) = node.as_table_mut() {
            table.insert(key.clone(), value);
        }
    }

    /// A fresh, empty value mirroring the shape of `node`, for grafting
    /// under an absent intermediate key.
    ///
    /// Records answer through [`Record::empty_child`](crate::Record::empty_child),
    /// tables yield an empty table, and leaves yield nothing.
    pub fn empty_child(&self, node: &Value) -> Option<Value> {
        if let Some(record) = node.as_record() {
            return record.empty_child();
        }
        if node.as_table().is_some() {
            return Some(Value::Table(Table::new()));
        }
        None
    }
}

/// Table lookup with the two key spellings interchangeable, name form
/// first.
fn indifferent_get<'t>(table: &'t Table, key: &Key) -> Option<&'t Value> {
    if key.is_name() {
        table.get(key).or_else(|| table.get(&key.to_symbol()))
    } else {
        table.get(&key.to_name()).or_else(|| table.get(key))
    }
}

fn indifferent_get_mut<'t>(table: &'t mut Table, key: &Key) -> Option<&'t mut Value> {
    if key.is_name() {
        if table.contains_key(key) {
            return table.get_mut(key);
        }
        table.get_mut(&key.to_symbol())
    } else {
        let name = key.to_name();
        if table.contains_key(&name) {
            return table.get_mut(&name);
        }
        table.get_mut(key)
    }
}
