//! Output format selection.

/// Output format requested for `wal-show`.
///
/// Requests that name no known format resolve to the default, `Table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned table for terminals (fallback for unknown requests)
    #[default]
    Table,
    /// Single JSON array with every timeline attribute
    Json,
}

impl OutputFormat {
    /// Resolve a format name from flags or config.
    ///
    /// `"table"` and `"json"` are recognised regardless of case or
    /// surrounding whitespace. Anything else, including no value at all,
    /// resolves to `OutputFormat::default()`.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("table") => Self::Table,
            Some("json") => Self::Json,
            Some(other) => {
                tracing::debug!(format = other, "Unknown output format, using default");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Resolve the numeric format code used by the archive tool
    /// (`1` table, `2` json). Other codes, `0` included, give the default.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Table,
            2 => Self::Json,
            _ => Self::default(),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}
