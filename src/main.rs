use anyhow::Result;
use chunkweave::cli::{App, Args};

fn main() -> Result<()> {
    let args = Args::parse_args();
    let app = App::new();

    app.run(args)?;

    Ok(())
}
