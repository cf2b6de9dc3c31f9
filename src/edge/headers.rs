//! Case-insensitive header map in the edge event shape.
//!
//! Serialized as `{ "<name>": { "value": "<value>" } }`. Names are lowercased
//! on insert and on lookup, so `Authorization` and `authorization` are the
//! same entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single header entry as carried in the event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderField {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "BTreeMap<String, HeaderField>", into = "BTreeMap<String, HeaderField>")]
pub struct EdgeHeaders {
    entries: BTreeMap<String, HeaderField>,
}

impl EdgeHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any entry with the same name in any case.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(
            name.to_ascii_lowercase(),
            HeaderField {
                value: value.into(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|field| field.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(lowercase name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, field)| (name.as_str(), field.value.as_str()))
    }
}

impl From<BTreeMap<String, HeaderField>> for EdgeHeaders {
    fn from(raw: BTreeMap<String, HeaderField>) -> Self {
        let mut headers = Self::new();
        for (name, field) in raw {
            headers.insert(&name, field.value);
        }
        headers
    }
}

impl From<EdgeHeaders> for BTreeMap<String, HeaderField> {
    fn from(headers: EdgeHeaders) -> Self {
        headers.entries
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for EdgeHeaders {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
