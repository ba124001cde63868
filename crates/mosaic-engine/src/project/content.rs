//! Content store
//!
//! The flat, string-keyed value bag holding the current serialized value of
//! every property of one configuration instance.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Current property values of one configuration, keyed by property name.
///
/// Values are always strings at this layer. Keys that no longer match a
/// declared property are kept as-is. Entries that are not scalars (objects,
/// arrays, `null`) are not property values; they are kept verbatim and
/// written back on serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    values: BTreeMap<String, String>,
    preserved: BTreeMap<String, Value>,
}

/// Value shapes accepted when reading a stored content entry
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Other(Value),
}

impl<'de> Deserialize<'de> for ContentStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, StoredValue>::deserialize(deserializer)?;
        let mut store = ContentStore::new();
        for (name, value) in raw {
            let text = match value {
                StoredValue::Text(text) => text,
                StoredValue::Number(number) => number.to_string(),
                StoredValue::Flag(flag) => flag.to_string(),
                StoredValue::Other(other) => {
                    tracing::debug!("Keeping non-scalar content entry {} verbatim", name);
                    store.preserved.insert(name, other);
                    continue;
                }
            };
            store.values.insert(name, text);
        }
        Ok(store)
    }
}

impl Serialize for ContentStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + self.preserved.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        for (name, value) in &self.preserved {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl ContentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored value of a property
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Store a value, returning the previous one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        self.preserved.remove(&name);
        self.values.insert(name, value.into())
    }

    /// Remove a stored value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.preserved.remove(name);
        self.values.remove(name)
    }

    /// Check if a value is stored for a property
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as a flat JSON object, preserved entries included
    pub fn to_value(&self) -> Value {
        let mut map: serde_json::Map<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        for (name, value) in &self.preserved {
            map.insert(name.clone(), value.clone());
        }
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContentStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            preserved: BTreeMap::new(),
        }
    }
}
