//! CLI entry point for rendering space-filling walker sketches

use clap::Parser;
use fillwalk::io::cli::{Cli, SketchRenderer};

fn main() -> fillwalk::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut renderer = SketchRenderer::new(cli);
    renderer.process()?;
    Ok(())
}
