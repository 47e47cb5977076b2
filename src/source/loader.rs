// ABOUTME: Collaborator traits for template sources
// ABOUTME: Filesystem read primitive and named-fragment (chunk) store seams

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Filesystem read primitive used by `@FILE` resolution.
pub trait FileLoader: Send {
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Default loader backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl FileLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Named-fragment store consulted for `@CHUNK` (and bare-name) specifiers.
pub trait ChunkStore: Send {
    fn fetch(&self, name: &str) -> Option<String>;
}

/// Store with no fragments; every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyChunkStore;

impl ChunkStore for EmptyChunkStore {
    fn fetch(&self, _name: &str) -> Option<String> {
        None
    }
}

/// In-memory fragment store, used by the CLI manifest and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryChunkStore {
    chunks: HashMap<String, String>,
}

impl MemoryChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.chunks.insert(name.into(), content.into());
    }

    pub fn with_chunk(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }
}

impl ChunkStore for MemoryChunkStore {
    fn fetch(&self, name: &str) -> Option<String> {
        self.chunks.get(name).cloned()
    }
}
