//! Default config location.

use dirs::config_dir;
use std::path::PathBuf;

use super::CONFIG_ENV;

/// OS-appropriate default config path: `<config_dir>/ppath/config.xml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("ppath");
        base.push("config.xml");
        Some(base)
    } else {
        std::env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("ppath")
                .join("config.xml")
        })
    }
}

/// Explicit config path from `PPATH_CONFIG`, if set and non-empty.
pub fn config_env_override() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
