//! wal-show CLI - render the timeline history of a WAL backup archive
//!
//! Reads the timelines collected from an archive and prints them as a table
//! or as a JSON document.

mod cli;
mod config;
mod input;

use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wal_show_core::new_output_writer;

use crate::cli::Cli;
use crate::config::{load_config, RenderSettings};
use crate::input::read_timelines;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let settings = RenderSettings::resolve(&cli, &config);
    let timelines = read_timelines(cli.input.as_deref())?;
    tracing::debug!(
        timelines = timelines.len(),
        format = settings.format.as_str(),
        include_backups = settings.include_backups,
        "Rendering timelines"
    );

    match cli.output.as_deref() {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                anyhow::anyhow!("Failed to create output {}: {}", path.display(), e)
            })?;
            let mut out = BufWriter::new(file);
            new_output_writer(settings.format, &mut out, settings.include_backups)
                .write(&timelines)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
        }
        None => {
            let mut out = io::stdout().lock();
            new_output_writer(settings.format, &mut out, settings.include_backups)
                .write(&timelines)?;
        }
    }
    Ok(())
}

/// Log to stderr so rendered output on stdout stays clean.
///
/// `RUST_LOG` takes precedence when set; otherwise `--verbose` selects DEBUG
/// and the default is WARN.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
