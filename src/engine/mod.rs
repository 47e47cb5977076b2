// ABOUTME: Engine module for chunkweave
// ABOUTME: Exports the public ChunkEngine API, its configuration, and profiling

pub mod config;
pub mod core;
pub mod profile;

pub use config::EngineConfig;
pub use core::{ChunkEngine, Collaborators};
pub use profile::Profile;
