// ABOUTME: Flat per-queue placeholder store with depth-bounded flattening
// ABOUTME: Nested values are expanded into dot-path keys, truncated past maxdepth

use std::collections::BTreeMap;

use tracing::trace;

use super::value::PlaceholderValue;

/// Flat mapping from dot-path key to scalar value for one rendering queue.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderStore {
    entries: BTreeMap<String, String>,
}

impl PlaceholderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten `value` into the store under `key`.
    ///
    /// Nested entries recurse with the running key-path extended by
    /// `.<child-key>`; a branch nested deeper than `maxdepth` is dropped
    /// without error. Scalars overwrite any existing value at their key.
    pub fn fill(&mut self, value: &PlaceholderValue, key: &str, maxdepth: usize) {
        self.fill_at(value, key, "", 0, maxdepth);
    }

    fn fill_at(
        &mut self,
        value: &PlaceholderValue,
        key: &str,
        keypath: &str,
        depth: usize,
        maxdepth: usize,
    ) {
        if depth > maxdepth {
            trace!("placeholder branch at '{}' exceeds maxdepth {}", key, maxdepth);
            return;
        }
        let keypath = if keypath.is_empty() {
            key.to_string()
        } else {
            format!("{keypath}.{key}")
        };
        match value {
            PlaceholderValue::Nested(map) => {
                for (subkey, subvalue) in map {
                    self.fill_at(subvalue, subkey, &keypath, depth + 1, maxdepth);
                }
            }
            PlaceholderValue::Scalar(text) => {
                self.entries.insert(keypath, text.clone());
            }
        }
    }

    /// Insert one pre-flattened key/value pair directly.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Entries below `prefix.`, with the prefix stripped from their keys.
    pub fn scoped(&self, prefix: &str) -> BTreeMap<String, String> {
        let prefix = format!("{prefix}.");
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .map(|stripped| (stripped.to_string(), value.clone()))
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
