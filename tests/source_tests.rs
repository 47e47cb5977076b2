// ABOUTME: Integration tests for template source resolution
// ABOUTME: Exercises file-backed specifiers, chunk lookup, and the shared cache

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use chunkweave::{
    ChunkEngine, Collaborators, EngineConfig, MemoryChunkStore, SourceCache,
};

fn file_engine(temp_dir: &TempDir) -> ChunkEngine {
    let config = EngineConfig::new().with_base_root(temp_dir.path());
    ChunkEngine::new(config)
}

#[test]
fn test_file_backed_template() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("row.tpl"), "<li>[[+name]]</li>").unwrap();

    let engine = file_engine(&temp_dir);
    assert_eq!(engine.template_chunk("@FILE row.tpl"), "<li>[[+name]]</li>");
}

#[test]
fn test_file_template_cached_across_deletion() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("row.tpl");
    fs::write(&path, "cached").unwrap();

    let engine = file_engine(&temp_dir);
    assert_eq!(engine.template_chunk("@FILE row.tpl"), "cached");

    // the cache is write-once; removing the file must not matter
    fs::remove_file(&path).unwrap();
    assert_eq!(engine.template_chunk("@FILE row.tpl"), "cached");
}

#[test]
fn test_missing_file_resolves_empty() {
    let temp_dir = TempDir::new().unwrap();
    let engine = file_engine(&temp_dir);

    assert_eq!(engine.template_chunk("@FILE absent.tpl"), "");
}

#[test]
fn test_basepath_prefix() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("templates")).unwrap();
    fs::write(temp_dir.path().join("templates/row.tpl"), "prefixed").unwrap();

    let config = EngineConfig::new()
        .with_base_root(temp_dir.path())
        .with_basepath("templates");
    let engine = ChunkEngine::new(config);

    assert_eq!(engine.template_chunk("@FILE row.tpl"), "prefixed");
}

#[test]
fn test_chunk_lookup_and_not_found_sentinel() {
    let chunks = MemoryChunkStore::new().with_chunk("row", "ROW");
    let collaborators = Collaborators {
        chunks: Box::new(chunks),
        ..Collaborators::default()
    };
    let engine = ChunkEngine::with_collaborators(EngineConfig::default(), collaborators);

    assert_eq!(engine.template_chunk("row"), "ROW");
    assert_eq!(engine.template_chunk("@CHUNK row"), "ROW");
    assert_eq!(engine.template_chunk("missing"), "");
    // repeated miss is served from the cache, same result
    assert_eq!(engine.template_chunk("missing"), "");
}

#[test]
fn test_cache_shared_between_engine_instances() {
    let cache = SourceCache::shared();

    let chunks = MemoryChunkStore::new().with_chunk("row", "ROW");
    let first = ChunkEngine::with_collaborators(
        EngineConfig::default(),
        Collaborators {
            cache: Arc::clone(&cache),
            chunks: Box::new(chunks),
            ..Collaborators::default()
        },
    );
    assert_eq!(first.template_chunk("row"), "ROW");

    // the second engine has an empty chunk store but shares the cache
    let second = ChunkEngine::with_collaborators(
        EngineConfig::default(),
        Collaborators {
            cache,
            ..Collaborators::default()
        },
    );
    assert_eq!(second.template_chunk("row"), "ROW");
}

#[test]
fn test_initial_templates_resolved_at_construction() {
    let chunks = MemoryChunkStore::new()
        .with_chunk("row", "[[+name]]")
        .with_chunk("wrap", "<ul>[[+wrapper]]</ul>");
    let config = EngineConfig::new()
        .with_tpl("@CHUNK row")
        .with_tpl_wrapper("@CHUNK wrap");
    let mut engine = ChunkEngine::with_collaborators(
        config,
        Collaborators {
            chunks: Box::new(chunks),
            ..Collaborators::default()
        },
    );

    engine.prepare_template(
        "list.0",
        Some(&[("name".to_string(), "A".to_string())].into_iter().collect()),
        None,
    );
    assert_eq!(engine.process(None, "", true), "<ul>A</ul>");
}

#[test]
fn test_inline_specifier_trims_separators() {
    let engine = ChunkEngine::default();
    assert_eq!(engine.template_chunk("@INLINE: [[+x]] :"), "[[+x]]");
}
