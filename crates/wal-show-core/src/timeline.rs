//! Timeline descriptors handed to the output writers.
//!
//! These are produced upstream by whatever scans the archive. The writers only
//! read them. JSON keys match the document shape `wal-show --detailed-json`
//! has always emitted, so existing consumers keep working.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lsn::Lsn;

/// One timeline in the archive's WAL history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    /// Timeline ID (TLI)
    pub id: u32,

    /// TLI this timeline branched from
    pub parent_id: u32,

    /// Position at which this timeline left its parent
    pub switch_point_lsn: Lsn,

    /// First segment of the timeline's range
    pub start_segment: String,

    /// Last segment of the timeline's range
    pub end_segment: String,

    /// Number of segments present in the archive
    pub segments_count: u64,

    /// Segments absent from the range
    #[serde(default)]
    pub missing_segments: Vec<String>,

    /// Backups taken on this timeline, in collector order
    #[serde(default)]
    pub backups: Vec<BackupDetail>,

    /// Number of segments the range should contain
    pub segment_range_size: u64,

    /// Health label (e.g. "OK", "LOST_SEGMENTS"); not interpreted here
    pub status: String,
}

impl TimelineInfo {
    pub fn new(id: u32, parent_id: u32) -> Self {
        Self {
            id,
            parent_id,
            ..Self::default()
        }
    }

    pub fn with_backups(mut self, backups: Vec<BackupDetail>) -> Self {
        self.backups = backups;
        self
    }
}

/// A backup associated with a timeline's segment range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDetail {
    pub backup_name: String,

    /// When the backup finished
    pub time: DateTime<Utc>,

    /// WAL segment the backup started in
    pub wal_file_name: String,

    pub start_lsn: Lsn,

    pub finish_lsn: Lsn,

    #[serde(default)]
    pub is_permanent: bool,

    /// Any further attributes the collector attached, kept as-is.
    /// Never holds a key of the named fields above.
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// JSON keys owned by the named `BackupDetail` fields.
const BACKUP_FIELDS: [&str; 6] = [
    "backup_name",
    "time",
    "wal_file_name",
    "start_lsn",
    "finish_lsn",
    "is_permanent",
];

impl BackupDetail {
    pub fn new(backup_name: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            backup_name: backup_name.into(),
            time,
            wal_file_name: String::new(),
            start_lsn: Lsn::default(),
            finish_lsn: Lsn::default(),
            is_permanent: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Attach an extra attribute to be written alongside the named fields.
    ///
    /// Keys that belong to a named field are ignored, so the document never
    /// carries the same key twice.
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        let key = key.into();
        if BACKUP_FIELDS.contains(&key.as_str()) {
            tracing::debug!(key = %key, "Ignoring attribute that shadows a backup field");
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// Extra attributes beyond the named fields.
    pub fn attributes(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }
}
