//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Resolves the file from an explicit path, `PPATH_CONFIG`, or the default location.
//!
//! Notes:
//! - Unknown XML fields are rejected so typos surface instead of being ignored.
//! - A missing default file means "use built-in defaults"; a missing explicit file is an error.

use anyhow::{anyhow, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{config_env_override, default_config_path};
use super::types::{parse_mode, Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "dir_mode")]
    dir_mode: Option<String>,
    #[serde(rename = "file_mode")]
    file_mode: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag or `PPATH_CONFIG`
    Explicit(PathBuf),
    /// Platform default location
    Default(PathBuf),
    /// No file found; built-in defaults
    Builtin,
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.dir_mode.as_deref() {
        cfg.dir_mode = parse_mode(s).ok_or_else(|| anyhow!("invalid dir_mode '{}'", s.trim()))?;
    }
    if let Some(s) = parsed.file_mode.as_deref() {
        cfg.file_mode = parse_mode(s).ok_or_else(|| anyhow!("invalid file_mode '{}'", s.trim()))?;
    }
    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("config xml '{}'", path.display()))
}

/// Resolve and load the effective config.
///
/// Search order:
///  - `explicit` (from the CLI)
///  - `$PPATH_CONFIG`
///  - the platform default path, only if the file exists
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    if let Some(p) = explicit.map(Path::to_path_buf).or_else(config_env_override) {
        debug!(path = %p.display(), "loading explicit config");
        let cfg = load_config_from_xml_path(&p)?;
        return Ok((cfg, ConfigSource::Explicit(p)));
    }

    match default_config_path() {
        Some(p) if p.is_file() => {
            debug!(path = %p.display(), "loading default config");
            let cfg = load_config_from_xml_path(&p)?;
            Ok((cfg, ConfigSource::Default(p)))
        }
        _ => Ok((Config::default(), ConfigSource::Builtin)),
    }
}
