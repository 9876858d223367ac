//! Loading the timelines collected from the archive.

use std::io::Read;
use std::path::Path;

use wal_show_core::TimelineInfo;

/// Read a JSON array of timelines from `path`, or from stdin when the path is
/// absent or `-`.
pub fn read_timelines(path: Option<&Path>) -> anyhow::Result<Vec<TimelineInfo>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("Failed to read timelines {}: {}", path.display(), e)
            })?;
            parse_timelines(&contents)
                .map_err(|e| anyhow::anyhow!("Invalid timelines in {}: {}", path.display(), e))
        }
        _ => {
            let mut contents = String::new();
            std::io::stdin()
                .read_to_string(&mut contents)
                .map_err(|e| anyhow::anyhow!("Failed to read timelines from stdin: {}", e))?;
            parse_timelines(&contents)
                .map_err(|e| anyhow::anyhow!("Invalid timelines on stdin: {}", e))
        }
    }
}

fn parse_timelines(contents: &str) -> serde_json::Result<Vec<TimelineInfo>> {
    serde_json::from_str(contents)
}
