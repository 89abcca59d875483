//! Serde deserialization for the value model.
//!
//! Self-describing input maps onto the obvious variants: maps become
//! [`Table`]s with name-form keys, sequences become arrays, scalars
//! become scalars. Records never come back from deserialization; a
//! round-tripped record lands as the table of its set members. Nulls are
//! rejected, and TOML datetimes fold into their string rendering, as on
//! the [`convert`](super::convert) route.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{Key, Table, Value};

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

// The toml deserializer hands a datetime over as a one-entry map under
// this key, carrying the datetime's string rendering.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a scalar, an array, or a table")
    }

    fn visit_bool<E>(self, flag: bool) -> Result<Value, E> {
        Ok(Value::Boolean(flag))
    }

    fn visit_i64<E>(self, int: i64) -> Result<Value, E> {
        Ok(Value::Integer(int))
    }

    fn visit_u64<E>(self, int: u64) -> Result<Value, E>
    where
        E: de::Error,
    {
        i64::try_from(int)
            .map(Value::Integer)
            .map_err(|_| E::custom(format!("integer {int} out of range")))
    }

    fn visit_f64<E>(self, float: f64) -> Result<Value, E> {
        Ok(Value::Float(float))
    }

    fn visit_str<E>(self, text: &str) -> Result<Value, E> {
        Ok(Value::String(text.to_owned()))
    }

    fn visit_string<E>(self, text: String) -> Result<Value, E> {
        Ok(Value::String(text))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(Value::Array(values))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = Table::new();
        while let Some((key, value)) = map.next_entry()? {
            table.insert(key, value);
        }

        if table.len() == 1 {
            if let Some(Value::String(text)) = table.get(&Key::name(TOML_DATETIME_KEY)) {
                return Ok(Value::String(text.clone()));
            }
        }

        Ok(Value::Table(table))
    }
}

/// Keys deserialize from plain strings, always in the name form.
impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(KeyVisitor)
    }
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string key")
    }

    fn visit_str<E>(self, text: &str) -> Result<Key, E> {
        Ok(Key::name(text))
    }

    fn visit_string<E>(self, text: String) -> Result<Key, E> {
        Ok(Key::Name(text))
    }
}
