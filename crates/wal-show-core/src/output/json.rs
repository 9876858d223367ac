//! JSON output for scripts.

use std::io::Write;

use super::OutputWriter;
use crate::error::Result;
use crate::timeline::TimelineInfo;

/// Writes all timelines as one compact JSON array.
///
/// The document is encoded in memory first, so a serialization failure leaves
/// the destination untouched.
pub struct JsonOutputWriter<W> {
    output: W,
}

impl<W: Write> JsonOutputWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Give the destination back to the caller.
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> OutputWriter for JsonOutputWriter<W> {
    fn write(&mut self, timelines: &[TimelineInfo]) -> Result<()> {
        let bytes = serde_json::to_vec(timelines)?;
        self.output.write_all(&bytes)?;
        self.output.flush()?;
        tracing::debug!(
            timelines = timelines.len(),
            bytes = bytes.len(),
            "Wrote JSON output"
        );
        Ok(())
    }
}
