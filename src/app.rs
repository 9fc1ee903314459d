//! Application orchestrator.
//! Loads/merges config, initializes logging, and dispatches the subcommand.

use anyhow::{bail, Context, Result};
use tracing::{debug, error};

use ppath::cli::{Args, Command};
use ppath::output as out;
use ppath::{default_config_path, load_config, Config, ConfigSource, PPath, PathError, ProcessCwd};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location(&args);
        return Ok(());
    }

    let Some(command) = args.command.clone() else {
        bail!("no command given; try `ppath --help`");
    };

    let (mut cfg, source) = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut cfg)?;
    cfg.validate().context("invalid configuration")?;

    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;
    debug!(?source, ?cfg, "starting ppath");

    let result = dispatch(&cfg, &command);
    if let Err(e) = &result {
        match e.downcast_ref::<PathError>() {
            Some(pe) => error!(code = pe.code(), entries = ?pe.entry_chain(), error = %pe, "{} failed", command_name(&command)),
            None => error!(error = ?e, "{} failed", command_name(&command)),
        }
    }

    // flush file logs before exit
    drop(guard);
    result
}

fn dispatch(cfg: &Config, command: &Command) -> Result<()> {
    match command {
        Command::Mv { src, dst } => {
            PPath::from(src.as_str()).merge_move_with(&PPath::from(dst.as_str()), cfg)?;
            out::print_success(&format!("Moved '{}' -> '{}'", src, dst));
        }
        Command::Cp { src, dst } => {
            PPath::from(src.as_str()).copy_with(&PPath::from(dst.as_str()), cfg)?;
            out::print_success(&format!("Copied '{}' -> '{}'", src, dst));
        }
        Command::Hash { file } => {
            let digest = PPath::from(file.as_str()).sha256()?;
            out::print_user(&format!("{}  {}", digest, file));
        }
        Command::Rel { path, base } => {
            let rel = PPath::from(path.as_str()).rel(base)?;
            out::print_user(rel.as_str());
        }
        Command::Abs { path } => {
            let abs = PPath::from(path.as_str()).abs(&ProcessCwd)?;
            out::print_user(abs.as_str());
        }
        Command::Stat { path } => {
            let p = PPath::from(path.as_str());
            let meta = p.stat()?;
            let kind = if p.is_symlink() {
                "symlink"
            } else if meta.is_dir() {
                "directory"
            } else if meta.is_file() {
                "file"
            } else if p.is_dev() {
                "device"
            } else {
                "other"
            };
            out::print_user(&format!("{}\t{}\t{}", kind, meta.len(), p));
        }
    }
    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Mv { .. } => "mv",
        Command::Cp { .. } => "cp",
        Command::Hash { .. } => "hash",
        Command::Rel { .. } => "rel",
        Command::Abs { .. } => "abs",
        Command::Stat { .. } => "stat",
    }
}

fn print_config_location(args: &Args) {
    match load_config(args.config.as_deref()) {
        Ok((_, ConfigSource::Explicit(p))) => {
            out::print_info(&format!("Using explicit config:\n  {}", p.display()));
        }
        Ok((_, ConfigSource::Default(p))) => {
            out::print_info(&format!("Using default config:\n  {}", p.display()));
        }
        Ok((_, ConfigSource::Builtin)) => match default_config_path() {
            Some(p) => out::print_info(&format!(
                "No config file found; built-in defaults in use. Default location:\n  {}",
                p.display()
            )),
            None => out::print_info("No config file found and no default location could be determined."),
        },
        Err(e) => out::print_error(&format!("Config could not be loaded: {e:#}")),
    }
}
