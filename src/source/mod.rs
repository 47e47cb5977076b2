// ABOUTME: Template source module for the chunkweave engine
// ABOUTME: Exports specifier resolution, the shared cache, and collaborator traits

pub mod cache;
pub mod loader;
pub mod resolver;

pub use cache::{SharedSourceCache, SourceCache};
pub use loader::{ChunkStore, EmptyChunkStore, FileLoader, FsLoader, MemoryChunkStore};
pub use resolver::{SourceResolver, CHUNK_PREFIX, FILE_PREFIX, INLINE_PREFIX};
