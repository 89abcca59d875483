//! The value currency passed between the resolver and its nodes.

use std::collections::BTreeMap;

use super::{Key, Record};

/// A mapping-shaped node: an ordered table of [`Key`]s to [`Value`]s.
///
/// The two spellings of a key are distinct entries, so a table can carry
/// `Key::name("id")` and `Key::symbol("id")` at the same time.
pub type Table = BTreeMap<Key, Value>;

/// A value in a resolvable object graph.
///
/// Scalars and arrays are leaves. The two container variants are the node
/// shapes the resolver can step through: [`Table`] for mapping-shaped data
/// and [`Record`] for accessor-shaped domain types.
///
/// ## Examples
///
/// ```
/// use keypath::{table, Value};
///
/// let node = Value::Table(table! {
///     "id" => 1,
///     "demographics" => table! { "first" => "Matt" },
/// });
///
/// assert!(node.is_table());
/// assert_eq!(node.type_str(), "table");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// A text scalar.
    String(String),
    /// An integer scalar.
    Integer(i64),
    /// A float scalar.
    Float(f64),
    /// A boolean scalar.
    Boolean(bool),
    /// A sequence of values, treated as a leaf by the resolver.
    Array(Vec<Value>),
    /// A mapping-shaped node.
    Table(Table),
    /// An accessor-shaped node.
    Record(Box<dyn Record>),
}

impl Value {
    /// Boxes a [`Record`] implementation into a value.
    pub fn record(record: impl Record) -> Value {
        Value::Record(Box::new(record))
    }

    /// Extracts the string scalar, if that is what this value is.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Extracts the integer scalar, if that is what this value is.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(int) => Some(*int),
            _ => None,
        }
    }

    /// Extracts the float scalar, if that is what this value is.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(float) => Some(*float),
            _ => None,
        }
    }

    /// Extracts the boolean scalar, if that is what this value is.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Extracts the array, if that is what this value is.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Extracts the array mutably, if that is what this value is.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// The mapping view of this value, if it has one.
    ///
    /// Tables answer directly. Records answer through
    /// [`Record::as_table`], so a record carrying a mapping view counts as
    /// mapping-shaped here.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            Value::Record(record) => record.as_table(),
            _ => None,
        }
    }

    /// The mapping view of this value, mutably.
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Value::Table(table) => Some(table),
            Value::Record(record) => record.as_table_mut(),
            _ => None,
        }
    }

    /// The record behind this value, if that is what it is.
    pub fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Value::Record(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    /// The record behind this value, mutably.
    pub fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        match self {
            Value::Record(record) => Some(record.as_mut()),
            _ => None,
        }
    }

    /// Returns `true` for string scalars.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` for integer scalars.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` for float scalars.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` for boolean scalars.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns `true` for arrays.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` for tables.
    pub fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Returns `true` for records.
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// A short name for the variant, for messages.
    pub fn type_str(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
            Value::Record(_) => "record",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Integer(int)
    }
}

impl From<i32> for Value {
    fn from(int: i32) -> Self {
        Value::Integer(int.into())
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Value::Float(float)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Boolean(flag)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Value::Table(table)
    }
}

/// Builds a [`Table`] from `key => value` pairs.
///
/// Keys go through [`Key::from`] and values through [`Value::from`], so
/// plain strings land in the name form and nested `table!` calls work
/// unquoted.
///
/// ## Examples
///
/// ```
/// use keypath::{table, Key, Value};
///
/// let table = table! {
///     "id" => 1,
///     Key::symbol("active") => true,
///     "demographics" => table! { "first" => "Matt" },
/// };
///
/// assert_eq!(table.get(&Key::name("id")), Some(&Value::Integer(1)));
/// assert_eq!(table.get(&Key::symbol("active")), Some(&Value::Boolean(true)));
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::Table::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        table
    }};
}
