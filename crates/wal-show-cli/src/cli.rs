use std::path::PathBuf;

use clap::Parser;

use wal_show_core::VERSION;

/// wal-show - show the timeline history of a WAL backup archive
#[derive(Debug, Parser)]
#[command(name = "wal-show")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Timelines to render (JSON array); "-" or omitted reads stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output detailed JSON (overrides --format)
    #[arg(long)]
    pub detailed_json: bool,

    /// Output format (table, json); unknown formats fall back to table
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Omit the backup count column from tables
    #[arg(long)]
    pub without_backups: bool,

    /// Path to the config file
    #[arg(short, long, env = "WAL_SHOW_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}
