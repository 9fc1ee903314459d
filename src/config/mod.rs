//! Configuration: permission defaults, logging settings, XML loading and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{config_env_override, default_config_path};
pub use types::{Config, LogLevel};
pub use xml::{load_config, load_config_from_xml_path, ConfigSource};

/// Mode for directories created on the caller's behalf (parents, copy targets).
pub const DEFAULT_DIR_MODE: u32 = 0o755;
/// Mode for files created by `create` / `write_file`.
pub const DEFAULT_FILE_MODE: u32 = 0o644;
/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PPATH_CONFIG";
