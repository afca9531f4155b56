//! String-keyed, string-valued route tags.

use std::collections::BTreeMap;

/// Auxiliary tags attached to a route (`market`, `type`, …).
///
/// The registry never interprets these. They exist for the shell:
/// grouping nav entries by market, labelling a section, hiding a menu
/// item. Two properties hold and both matter:
///
/// - **Absent ≠ empty.** [`get`](Metadata::get) on a missing key is
///   `None`, never conflated with a key deliberately set to `""`.
/// - **Deterministic iteration.** Entries iterate in key order, so logs
///   and assertions don't depend on insertion order, which carries no
///   meaning for tags anyway.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: BTreeMap<String, String>,
}

impl Metadata {
    /// An empty tag set.
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Inserts a tag. Keys are unique within one route — re-inserting a
    /// key replaces its value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, or `None` when the tag is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present at all, even with an empty value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates tags in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}
