// ABOUTME: Placeholder module for the chunkweave engine
// ABOUTME: Exports the nested value variant and the flat per-queue store

pub mod store;
pub mod value;

pub use store::PlaceholderStore;
pub use value::PlaceholderValue;
