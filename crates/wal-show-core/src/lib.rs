//! # wal-show Core
//!
//! Core library for `wal-show` - renders the timeline history of a WAL
//! backup archive for people and for scripts.
//!
//! This crate holds the data model and the output writers, independent of the
//! CLI interface. Collecting timelines from an archive happens upstream; this
//! crate only formats what it is handed.
//!
//! ## Architecture
//!
//! - **timeline**: Timeline descriptors and backup references
//! - **lsn**: Log sequence numbers in PostgreSQL `HI/LO` notation
//! - **output**: The `OutputWriter` contract, JSON and table writers, format selection

pub mod error;
pub mod lsn;
pub mod output;
pub mod timeline;

pub use error::{Result, WalShowError};
pub use lsn::Lsn;
pub use output::{
    new_output_writer, JsonOutputWriter, OutputFormat, OutputWriter, TableOutputWriter,
};
pub use timeline::{BackupDetail, TimelineInfo};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
