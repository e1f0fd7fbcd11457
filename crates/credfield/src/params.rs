//! Ordered, case-insensitive storage for auth-params.

use std::hash::{Hash, Hasher};

/// An ordered multimap of auth-params.
///
/// Keys compare ASCII case-insensitively (RFC 7235 §2.1: auth-param names
/// are case-insensitive). The casing and position of a key's first
/// occurrence are kept for iteration, and repeated keys accumulate their
/// values in encounter order. Every stored key holds at least one value.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Entry {
    key: String,
    values: Vec<String>,
}

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under `key`.
    ///
    /// When the key is already present (ignoring ASCII case) the value
    /// joins the existing entry; the entry keeps the casing it was first
    /// seen with.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.key.eq_ignore_ascii_case(&key))
        {
            entry.values.push(value);
        } else {
            self.entries.push(Entry {
                key,
                values: vec![value],
            });
        }
    }

    /// Returns the first value stored under `key`, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find(key)
            .and_then(|entry| entry.values.first())
            .map(String::as_str)
    }

    /// Returns every value stored under `key` in encounter order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.find(key).map_or(&[], |entry| entry.values.as_slice())
    }

    /// Returns `true` when `key` is present, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Iterates over the keys in first-seen order, original casing.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Iterates over `(key, values)` entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.values.as_slice()))
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameters are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.key.eq_ignore_ascii_case(key))
    }
}

/// Two maps are equal when they hold the same keys (ignoring ASCII case)
/// with the same value lists; iteration order does not matter.
impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|entry| other.find(&entry.key).is_some_and(|o| o.values == entry.values))
    }
}

impl Eq for Params {}

impl Hash for Params {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent and casing-independent, consistent with Eq.
        let mut entries: Vec<(String, &[String])> = self
            .entries
            .iter()
            .map(|entry| (entry.key.to_ascii_lowercase(), entry.values.as_slice()))
            .collect();
        entries.sort();
        entries.len().hash(state);
        for (key, values) in entries {
            key.hash(state);
            values.hash(state);
        }
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}
