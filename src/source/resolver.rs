// ABOUTME: Template specifier resolution with prefix classification
// ABOUTME: @INLINE is verbatim, @FILE and @CHUNK read through the shared cache

use std::path::PathBuf;

use tracing::trace;

use super::cache::SharedSourceCache;
use super::loader::{ChunkStore, FileLoader};

/// Prefix selecting a file-backed source, resolved against the basepath.
pub const FILE_PREFIX: &str = "@FILE";

/// Prefix selecting an inline literal source.
pub const INLINE_PREFIX: &str = "@INLINE";

/// Prefix selecting a named fragment; also the default interpretation for a
/// non-empty specifier without a recognized prefix.
pub const CHUNK_PREFIX: &str = "@CHUNK";

/// Resolves a template specifier into literal template text.
pub struct SourceResolver {
    basepath: PathBuf,
    cache: SharedSourceCache,
    files: Box<dyn FileLoader>,
    chunks: Box<dyn ChunkStore>,
}

impl SourceResolver {
    pub fn new(
        basepath: PathBuf,
        cache: SharedSourceCache,
        files: Box<dyn FileLoader>,
        chunks: Box<dyn ChunkStore>,
    ) -> Self {
        Self {
            basepath,
            cache,
            files,
            chunks,
        }
    }

    pub fn set_basepath(&mut self, basepath: PathBuf) {
        self.basepath = basepath;
    }

    /// Resolve `spec` into template text. Missing files and missing chunks
    /// yield the empty string; both outcomes are cached so repeated
    /// resolution never re-reads. An empty specifier with no explicit
    /// prefix returns the empty string immediately, uncached.
    pub fn resolve(&self, spec: &str) -> String {
        if let Some(rest) = spec.strip_prefix(FILE_PREFIX) {
            self.resolve_file(trim_separators(rest))
        } else if let Some(rest) = spec.strip_prefix(INLINE_PREFIX) {
            trim_separators(rest).to_string()
        } else if let Some(rest) = spec.strip_prefix(CHUNK_PREFIX) {
            self.resolve_chunk(trim_separators(rest))
        } else if spec.is_empty() {
            String::new()
        } else {
            self.resolve_chunk(spec)
        }
    }

    fn resolve_file(&self, filename: &str) -> String {
        let mut cache = self.cache.lock().expect("source cache poisoned");
        if let Some(cached) = cache.file(filename) {
            trace!("file template '{}' served from cache", filename);
            return cached.unwrap_or_default();
        }

        let content = self.files.load(&self.basepath.join(filename)).ok();
        trace!(
            "file template '{}' resolved, found: {}",
            filename,
            content.is_some()
        );
        cache.insert_file(filename, content.clone());
        content.unwrap_or_default()
    }

    fn resolve_chunk(&self, name: &str) -> String {
        let mut cache = self.cache.lock().expect("source cache poisoned");
        if let Some(cached) = cache.chunk(name) {
            trace!("chunk '{}' served from cache", name);
            return cached.unwrap_or_default();
        }

        let content = self.chunks.fetch(name);
        trace!("chunk '{}' resolved, found: {}", name, content.is_some());
        cache.insert_chunk(name, content.clone());
        content.unwrap_or_default()
    }
}

fn trim_separators(spec: &str) -> &str {
    spec.trim_matches(|c| c == ' ' || c == ':')
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::source::cache::SourceCache;
    use crate::source::loader::{EmptyChunkStore, FsLoader, MemoryChunkStore};

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        content: Option<String>,
    }

    impl FileLoader for CountingLoader {
        fn load(&self, _path: &Path) -> io::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    fn resolver_with(files: Box<dyn FileLoader>, chunks: Box<dyn ChunkStore>) -> SourceResolver {
        SourceResolver::new(PathBuf::from("/base"), SourceCache::shared(), files, chunks)
    }

    #[test]
    fn test_inline_specifier_is_verbatim() {
        let resolver = resolver_with(Box::new(FsLoader), Box::new(EmptyChunkStore));

        assert_eq!(
            resolver.resolve("@INLINE <li>[[+name]]</li>"),
            "<li>[[+name]]</li>"
        );
        assert_eq!(resolver.resolve("@INLINE: row :"), "row");
    }

    #[test]
    fn test_empty_specifier_returns_empty() {
        let resolver = resolver_with(Box::new(FsLoader), Box::new(EmptyChunkStore));
        assert_eq!(resolver.resolve(""), "");
    }

    #[test]
    fn test_bare_name_resolves_as_chunk() {
        let store = MemoryChunkStore::new().with_chunk("row", "ROW");
        let resolver = resolver_with(Box::new(FsLoader), Box::new(store));

        assert_eq!(resolver.resolve("row"), "ROW");
        assert_eq!(resolver.resolve("@CHUNK row"), "ROW");
    }

    #[test]
    fn test_file_read_happens_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CountingLoader {
            calls: Arc::clone(&calls),
            content: Some("FILE".to_string()),
        };
        let resolver = resolver_with(Box::new(loader), Box::new(EmptyChunkStore));

        assert_eq!(resolver.resolve("@FILE row.tpl"), "FILE");
        assert_eq!(resolver.resolve("@FILE row.tpl"), "FILE");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_file_cached_as_not_found() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CountingLoader {
            calls: Arc::clone(&calls),
            content: None,
        };
        let resolver = resolver_with(Box::new(loader), Box::new(EmptyChunkStore));

        assert_eq!(resolver.resolve("@FILE absent.tpl"), "");
        assert_eq!(resolver.resolve("@FILE absent.tpl"), "");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_chunk_cached_as_not_found() {
        let resolver = resolver_with(Box::new(FsLoader), Box::new(EmptyChunkStore));

        assert_eq!(resolver.resolve("absent"), "");
        // the miss is now cached
        let cache = resolver.cache.lock().unwrap();
        assert_eq!(cache.chunk("absent"), Some(None));
    }

    #[test]
    fn test_cache_shared_between_resolvers() {
        let cache = SourceCache::shared();
        let store = MemoryChunkStore::new().with_chunk("row", "ROW");
        let first = SourceResolver::new(
            PathBuf::new(),
            Arc::clone(&cache),
            Box::new(FsLoader),
            Box::new(store),
        );
        assert_eq!(first.resolve("row"), "ROW");

        // second resolver has no chunk store content but hits the cache
        let second = SourceResolver::new(
            PathBuf::new(),
            cache,
            Box::new(FsLoader),
            Box::new(EmptyChunkStore),
        );
        assert_eq!(second.resolve("row"), "ROW");
    }
}
