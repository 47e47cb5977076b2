// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for chunkweave

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chunkweave")]
#[command(about = "Hierarchical template-composition engine for nested row/wrapper rendering")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a queue described by a YAML manifest
    Render {
        #[arg(help = "Path to render manifest YAML file")]
        manifest: PathBuf,

        #[arg(short, long, help = "Queue to render (defaults to the manifest's queue)")]
        queue: Option<String>,

        #[arg(short, long, help = "Join separator between sibling rows")]
        separator: Option<String>,

        #[arg(short, long, help = "Write output to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Keep queue state instead of clearing after render")]
        keep: bool,
    },

    /// Resolve a template specifier (@INLINE, @FILE, @CHUNK or bare name)
    Resolve {
        #[arg(help = "Template specifier to resolve")]
        spec: String,

        #[arg(short, long, help = "Manifest supplying chunks and the file basepath")]
        manifest: Option<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
