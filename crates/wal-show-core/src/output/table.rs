//! Table output for terminals.

use std::io::Write;

use comfy_table::presets::ASCII_FULL;
use comfy_table::Table as ComfyTable;

use super::OutputWriter;
use crate::error::Result;
use crate::timeline::TimelineInfo;

/// Column labels, in display order.
const COLUMNS: [&str; 8] = [
    "TLI",
    "Parent TLI",
    "Switchpoint LSN",
    "Start segment",
    "End segment",
    "Segment range",
    "Segments count",
    "Status",
];

/// Trailing column shown when backup counts are requested.
const BACKUPS_COLUMN: &str = "Backups count";

/// Writes timelines as an ASCII table, one row per timeline.
///
/// The whole table is built before anything is written, and it is written even
/// when there are no timelines (header only).
pub struct TableOutputWriter<W> {
    output: W,
    include_backups: bool,
}

impl<W: Write> TableOutputWriter<W> {
    pub fn new(output: W, include_backups: bool) -> Self {
        Self {
            output,
            include_backups,
        }
    }

    /// Give the destination back to the caller.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn header(&self) -> Vec<&'static str> {
        let mut header = COLUMNS.to_vec();
        if self.include_backups {
            header.push(BACKUPS_COLUMN);
        }
        header
    }

    fn row(&self, timeline: &TimelineInfo) -> Vec<String> {
        let mut row = vec![
            timeline.id.to_string(),
            timeline.parent_id.to_string(),
            timeline.switch_point_lsn.to_string(),
            timeline.start_segment.clone(),
            timeline.end_segment.clone(),
            timeline.segment_range_size.to_string(),
            timeline.segments_count.to_string(),
            timeline.status.clone(),
        ];
        if self.include_backups {
            row.push(timeline.backups.len().to_string());
        }
        row
    }

    fn build(&self, timelines: &[TimelineInfo]) -> ComfyTable {
        let mut table = ComfyTable::new();
        table.load_preset(ASCII_FULL);
        table.set_header(self.header());
        for timeline in timelines {
            table.add_row(self.row(timeline));
        }
        table
    }
}

impl<W: Write> OutputWriter for TableOutputWriter<W> {
    fn write(&mut self, timelines: &[TimelineInfo]) -> Result<()> {
        let table = self.build(timelines);
        writeln!(self.output, "{}", table)?;
        self.output.flush()?;
        tracing::debug!(
            timelines = timelines.len(),
            include_backups = self.include_backups,
            "Wrote table output"
        );
        Ok(())
    }
}
