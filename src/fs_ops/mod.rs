//! Filesystem operations behind `PPath`: merge-move, copy, walk, hashing,
//! plus the small primitives they share.

mod copy;
mod hash;
pub(crate) mod helpers;
mod merge;
mod walk;

pub use copy::copy_entry;
pub use hash::sha256_file;
pub use merge::merge_move;
pub use walk::{walk, Walk};

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::errors::{PathError, Result};
use crate::platform::create_dir_all_mode;

use helpers::io_step;

/// Immediate child names of `dir`, sorted byte-wise.
pub fn list_entries(dir: &Path) -> Result<Vec<OsString>> {
    let rd = fs::read_dir(dir).map_err(io_step("reading directory entries", dir))?;
    let mut names = rd
        .map(|e| e.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(io_step("reading directory entries", dir))?;
    names.sort();
    Ok(names)
}

/// Remove a file, symlink or directory tree. Missing paths succeed.
pub fn remove_all(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(io_step("delete", path)(e)),
    };
    let res = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match res {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other.map_err(io_step("delete", path)),
    }
}

/// Create the missing ancestors of `path` with the configured directory mode.
pub(crate) fn ensure_parent(config: &Config, path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!(parent = %parent.display(), mode = format!("{:o}", config.dir_mode), "creating parent directories");
            create_dir_all_mode(parent, config.dir_mode).map_err(io_step("create parent directory", parent))
        }
        _ => Ok(()),
    }
}

/// Create a brand-new file, creating missing parents first.
pub fn create_new_file(config: &Config, path: &Path) -> Result<File> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(PathError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    ensure_parent(config, path)?;

    let mut opts = OpenOptions::new();
    opts.read(true).write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(config.file_mode);
    }
    opts.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            PathError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            io_step("create file", path)(e)
        }
    })
}
