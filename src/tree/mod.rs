// ABOUTME: Template tree module for the chunkweave engine
// ABOUTME: Exports the node arena and the bottom-up compositor

pub mod arena;
pub mod compose;

pub use arena::{NodeId, TemplateNode, TemplateTree};
pub use compose::Compositor;
