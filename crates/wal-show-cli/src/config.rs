use std::path::{Path, PathBuf};

use serde::Deserialize;
use wal_show_core::OutputFormat;

use crate::cli::Cli;

#[derive(Debug, Default, Deserialize)]
pub struct WalShowConfig {
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Format name; unknown names fall back to table
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default = "default_include_backups")]
    pub include_backups: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: None,
            include_backups: default_include_backups(),
        }
    }
}

fn default_include_backups() -> bool {
    true
}

/// Effective output settings after flags and config are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub format: OutputFormat,
    pub include_backups: bool,
}

impl RenderSettings {
    /// Flags win over the config file, which wins over defaults.
    pub fn resolve(cli: &Cli, config: &WalShowConfig) -> Self {
        let format = if cli.detailed_json {
            OutputFormat::Json
        } else {
            OutputFormat::resolve(cli.format.as_deref().or(config.output.format.as_deref()))
        };
        Self {
            format,
            include_backups: !cli.without_backups && config.output.include_backups,
        }
    }
}

/// Load the config named on the command line, or the default one if present.
///
/// A missing default config is not an error; a missing explicit one is.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<WalShowConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = default_config_path()?;
    if path.exists() {
        read_config(&path)
    } else {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        Ok(WalShowConfig::default())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<WalShowConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wal-show"));
        }
    }
    Ok(home_dir()?.join(".config").join("wal-show"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["wal-show"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn config(toml_text: &str) -> WalShowConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = config("");
        assert!(config.output.format.is_none());
        assert!(config.output.include_backups);
    }

    #[test]
    fn test_defaults_render_table_with_backups() {
        let settings = RenderSettings::resolve(&cli(&[]), &WalShowConfig::default());
        assert_eq!(settings.format, OutputFormat::Table);
        assert!(settings.include_backups);
    }

    #[test]
    fn test_config_format_applies_without_flag() {
        let config = config("[output]\nformat = \"json\"\n");
        let settings = RenderSettings::resolve(&cli(&[]), &config);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_format_flag_overrides_config() {
        let config = config("[output]\nformat = \"json\"\n");
        let settings = RenderSettings::resolve(&cli(&["--format", "table"]), &config);
        assert_eq!(settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_detailed_json_overrides_format() {
        let settings = RenderSettings::resolve(
            &cli(&["--format", "table", "--detailed-json"]),
            &WalShowConfig::default(),
        );
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_config_format_falls_back_to_table() {
        let config = config("[output]\nformat = \"yaml\"\n");
        let settings = RenderSettings::resolve(&cli(&[]), &config);
        assert_eq!(settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_backups_disabled_by_flag_or_config() {
        let from_flag =
            RenderSettings::resolve(&cli(&["--without-backups"]), &WalShowConfig::default());
        assert!(!from_flag.include_backups);

        let config = config("[output]\ninclude_backups = false\n");
        let from_config = RenderSettings::resolve(&cli(&[]), &config);
        assert!(!from_config.include_backups);
    }

    #[test]
    fn test_read_config_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output\nformat = ").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_config(Some(&path)).is_err());
    }
}
