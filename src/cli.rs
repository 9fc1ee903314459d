//! CLI definition and parsing.
//! Defines Args/Command and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - CLI flags override values loaded from the XML config.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::types::{parse_mode, Config, LogLevel};

/// Chainable path utilities: merge-move, copy, hashing and lexical helpers.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Path utilities with merge-move semantics")]
pub struct Args {
    /// Explicit config file (overrides PPATH_CONFIG and the default location).
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, value_parser = LogLevel::from_str, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Also write logs to this file.
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Octal mode for directories created on our behalf (e.g. 755).
    #[arg(long, global = true, value_name = "MODE")]
    pub dir_mode: Option<String>,

    /// Octal mode for files created on our behalf (e.g. 644).
    #[arg(long, global = true, value_name = "MODE")]
    pub file_mode: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print the config file location that would be used, then exit.
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Merge-move SRC into DST (directories are merged, files replace files).
    Mv {
        #[arg(value_hint = ValueHint::AnyPath)]
        src: String,
        #[arg(value_hint = ValueHint::AnyPath)]
        dst: String,
    },
    /// Copy a file or directory tree.
    Cp {
        #[arg(value_hint = ValueHint::AnyPath)]
        src: String,
        #[arg(value_hint = ValueHint::AnyPath)]
        dst: String,
    },
    /// Print the SHA-256 of a file.
    Hash {
        #[arg(value_hint = ValueHint::FilePath)]
        file: String,
    },
    /// Print PATH relative to BASE (lexical).
    Rel { path: String, base: String },
    /// Print the absolute form of PATH.
    Abs { path: String },
    /// Print the kind and size of PATH.
    Stat { path: String },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    /// Fails on a mode flag that is not valid octal.
    pub fn apply_overrides(&self, cfg: &mut Config) -> anyhow::Result<()> {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if let Some(m) = &self.dir_mode {
            cfg.dir_mode = parse_mode(m).ok_or_else(|| anyhow::anyhow!("invalid --dir-mode '{m}'"))?;
        }
        if let Some(m) = &self.file_mode {
            cfg.file_mode = parse_mode(m).ok_or_else(|| anyhow::anyhow!("invalid --file-mode '{m}'"))?;
        }
        Ok(())
    }
}

pub fn parse() -> Args {
    Args::parse()
}
