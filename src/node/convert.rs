//! Conversions between the value model and `toml` values.
//!
//! Both directions are total. Going out, records flatten into tables and
//! both key spellings fold onto their bare text; when a table carries the
//! name and symbol form of one member, the name form wins, matching read
//! precedence. Datetimes coming in fold into their string rendering.

use super::{Key, Record, Table, Value};

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(text) => Value::String(text),
            toml::Value::Integer(int) => Value::Integer(int),
            toml::Value::Float(float) => Value::Float(float),
            toml::Value::Boolean(flag) => Value::Boolean(flag),
            toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
            toml::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            toml::Value::Table(table) => Value::from(table),
        }
    }
}

impl From<toml::Table> for Value {
    fn from(table: toml::Table) -> Self {
        let table = table
            .into_iter()
            .map(|(key, value)| (Key::Name(key), Value::from(value)))
            .collect();
        Value::Table(table)
    }
}

impl From<Value> for toml::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => toml::Value::String(text),
            Value::Integer(int) => toml::Value::Integer(int),
            Value::Float(float) => toml::Value::Float(float),
            Value::Boolean(flag) => toml::Value::Boolean(flag),
            Value::Array(values) => {
                toml::Value::Array(values.into_iter().map(toml::Value::from).collect())
            }
            Value::Table(table) => toml::Value::Table(flatten_table(table)),
            Value::Record(record) => toml::Value::Table(flatten_record(record.as_ref())),
        }
    }
}

/// Tables iterate sorted with the name form leading its symbol twin, so
/// keeping the first spelling of each text implements name precedence.
fn flatten_table(table: Table) -> toml::Table {
    let mut out = toml::Table::new();
    for (key, value) in table {
        if out.contains_key(key.text()) {
            continue;
        }
        out.insert(key.into_text(), toml::Value::from(value));
    }
    out
}

fn flatten_record(record: &dyn Record) -> toml::Table {
    record
        .fields()
        .map(|(name, value)| (name.to_owned(), toml::Value::from(value.clone())))
        .collect()
}
