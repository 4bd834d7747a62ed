//! crossprod: animate two rotating vectors and their cross product.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use crossprod::text_renderer::TextRenderer;
use log::{info, LevelFilter};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let config = cli.to_config().context("invalid configuration")?;

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    let state = crossprod::run(&config, &mut renderer).context("animation failed")?;

    info!("recorded {} cross product samples", state.samples.len());
    Ok(())
}
