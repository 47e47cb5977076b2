// ABOUTME: Process-wide cache of resolved template sources
// ABOUTME: Separate file and chunk namespaces, write-once, not-found is cached too

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Handle shared between engine instances; constructed once per process.
pub type SharedSourceCache = Arc<Mutex<SourceCache>>;

/// Cache of resolved template text, keyed first by source kind and then by
/// resolved name. A `None` entry records a lookup that failed, so repeated
/// resolution never re-queries the filesystem or the chunk store. Entries
/// are never invalidated.
#[derive(Debug, Default)]
pub struct SourceCache {
    files: HashMap<String, Option<String>>,
    chunks: HashMap<String, Option<String>>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSourceCache {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Cached file entry: `None` means never resolved, `Some(None)` means
    /// resolved and missing.
    pub fn file(&self, name: &str) -> Option<Option<String>> {
        self.files.get(name).cloned()
    }

    pub fn insert_file(&mut self, name: impl Into<String>, content: Option<String>) {
        self.files.insert(name.into(), content);
    }

    pub fn chunk(&self, name: &str) -> Option<Option<String>> {
        self.chunks.get(name).cloned()
    }

    pub fn insert_chunk(&mut self, name: impl Into<String>, content: Option<String>) {
        self.chunks.insert(name.into(), content);
    }
}
