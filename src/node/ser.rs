//! Serde serialization for the value model.
//!
//! Values serialize as the data they hold: scalars directly, arrays as
//! sequences, tables and records as maps. Both key spellings serialize as
//! their bare text, so a table holding the name and symbol form of one
//! member emits that member twice; formats that reject duplicate keys
//! will refuse such a table. The [`convert`](super::convert) route
//! flattens with name-form precedence instead.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Key, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(text) => serializer.serialize_str(text),
            Value::Integer(int) => serializer.serialize_i64(*int),
            Value::Float(float) => serializer.serialize_f64(*float),
            Value::Boolean(flag) => serializer.serialize_bool(*flag),
            Value::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Value::Table(table) => {
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (key, value) in table {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Record(record) => {
                let mut map = serializer.serialize_map(None)?;
                for (name, value) in record.fields() {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.text())
    }
}
