//! Core library for `ppath`.
//!
//! `PPath` is an immutable path value with lexical derivations (join, base,
//! dir, rel, ...) and thin filesystem delegations (stat, copy, hash, ...).
//! The one operation with real logic is [`PPath::merge_move`], which moves a
//! file or directory into a destination and merges directory trees.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod path;
pub mod platform;

pub use config::{default_config_path, load_config, load_config_from_xml_path, Config, ConfigSource, LogLevel};
pub use errors::{ErrorKind, PathError, Result};
pub use fs_ops::{merge_move, Walk};
pub use path::{FixedCwd, PPath, ProcessCwd, WorkingDir};
