// ABOUTME: Main application orchestration for the chunkweave CLI
// ABOUTME: Coordinates logging initialization and command dispatch

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands};

#[derive(Default)]
pub struct App;

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Initialize logging based on flags
    pub fn init_logging(&self, verbose: bool, no_color: bool) {
        let log_level = if verbose { "debug" } else { "info" };
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(!no_color)
            .with_target(false)
            .init();

        debug!("Logging initialized with level: {}", log_level);
    }

    /// Run the application with parsed arguments
    pub fn run(&self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color);

        debug!("Starting chunkweave v{}", env!("CARGO_PKG_VERSION"));

        match args.command {
            Commands::Render {
                manifest,
                queue,
                separator,
                output,
                keep,
            } => commands::render(&manifest, queue, separator, output, keep),
            Commands::Resolve { spec, manifest } => commands::resolve(&spec, manifest),
        }
    }
}
