// ABOUTME: Tag substitution module for the chunkweave engine
// ABOUTME: Defines the reserved tag syntax and the pluggable substitution seam

pub mod engine;
pub mod tags;

pub use engine::{BasicTagSubstituter, TagSubstituter};
pub use tags::{UNCACHED_MASK, UNCACHED_SIGIL, WRAPPER_TAG};
