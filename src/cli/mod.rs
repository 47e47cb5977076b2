// ABOUTME: CLI module for the chunkweave engine
// ABOUTME: Exports command line interface components and main application logic

pub mod app;
pub mod args;
pub mod commands;
pub mod manifest;

pub use app::App;
pub use args::{Args, Commands};
pub use manifest::{Manifest, ManifestError, RowSpec};
