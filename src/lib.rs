// ABOUTME: Main library module for the chunkweave template-composition engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod engine;
pub mod placeholder;
pub mod source;
pub mod subst;
pub mod tree;

// Re-export commonly used types
pub use engine::{ChunkEngine, Collaborators, EngineConfig, Profile};
pub use placeholder::{PlaceholderStore, PlaceholderValue};
pub use source::{ChunkStore, FileLoader, MemoryChunkStore, SourceCache, SourceResolver};
pub use subst::{BasicTagSubstituter, TagSubstituter};
pub use tree::{Compositor, NodeId, TemplateNode, TemplateTree};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
