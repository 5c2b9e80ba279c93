//! castshot command line entry point.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use castshot::cli::Cli;
use castshot::{export, AnsiRenderer, Config, Format, LatexRenderer, Recording, Renderer};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    init_logging(cli.is_verbose(&config));

    let recording = Recording::parse(&cli.asciicast)?;
    let options = cli.export_options(&config);

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    {
        let mut renderer: Box<dyn Renderer + '_> = match cli.format(&config) {
            Format::Latex => Box::new(LatexRenderer::new(&mut out)),
            Format::Ansi => Box::new(AnsiRenderer::new(&mut out)),
        };
        export(&recording, &options, renderer.as_mut()).context("Failed to write snapshot")?;
    }
    out.flush().context("Failed to write snapshot")?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
