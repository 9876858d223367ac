//! Output writers for `wal-show` results.
//!
//! A writer takes the full list of timelines and renders it to a destination
//! it was constructed with:
//! - **table**: aligned table for people, optionally with backup counts
//! - **json**: one JSON array for scripts, every attribute included
//!
//! Use [`new_output_writer`] to pick one from an [`OutputFormat`].

mod format;
mod json;
mod table;

use std::io::Write;

use crate::error::Result;
use crate::timeline::TimelineInfo;

pub use format::OutputFormat;
pub use json::JsonOutputWriter;
pub use table::TableOutputWriter;

/// Renders the result of a `wal-show` run.
///
/// Implementations emit every timeline exactly once, in the order given, and
/// leave the destination open for the caller.
pub trait OutputWriter {
    /// Render `timelines` to the destination.
    ///
    /// # Errors
    ///
    /// Returns `WalShowError::Serialization` if the timelines cannot be
    /// encoded, or `WalShowError::Io` if the destination rejects the write.
    fn write(&mut self, timelines: &[TimelineInfo]) -> Result<()>;
}

/// Build the writer for `format`, rendering into `output`.
///
/// `include_backups` adds the backup-count column to tables. JSON documents
/// always carry the full backup list, so the flag does not affect them.
pub fn new_output_writer<'a, W>(
    format: OutputFormat,
    output: W,
    include_backups: bool,
) -> Box<dyn OutputWriter + 'a>
where
    W: Write + 'a,
{
    tracing::debug!(?format, include_backups, "Selected output writer");
    match format {
        OutputFormat::Table => Box::new(TableOutputWriter::new(output, include_backups)),
        OutputFormat::Json => Box::new(JsonOutputWriter::new(output)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TimelineInfo> {
        let mut first = TimelineInfo::new(1, 0);
        first.status = "OK".to_string();
        let mut second = TimelineInfo::new(2, 1);
        second.status = "LOST_SEGMENTS".to_string();
        vec![first, second]
    }

    fn render(format: OutputFormat, include_backups: bool) -> String {
        let mut out = Vec::new();
        new_output_writer(format, &mut out, include_backups)
            .write(&sample())
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_format_selects_json_writer() {
        let out = render(OutputFormat::Json, true);
        assert!(out.starts_with('['));
        assert!(out.contains("\"parentId\":1"));
    }

    #[test]
    fn test_table_format_selects_table_writer() {
        let out = render(OutputFormat::Table, true);
        assert!(out.contains("Parent TLI"));
        assert!(out.contains("Backups count"));
    }

    #[test]
    fn test_unknown_format_renders_like_table() {
        let fallback = render(OutputFormat::resolve(Some("yaml")), true);
        let from_code = render(OutputFormat::from_code(0), true);
        let table = render(OutputFormat::Table, true);
        assert_eq!(fallback, table);
        assert_eq!(from_code, table);
    }

    #[test]
    fn test_backups_flag_ignored_by_json() {
        assert_eq!(
            render(OutputFormat::Json, true),
            render(OutputFormat::Json, false)
        );
    }
}
