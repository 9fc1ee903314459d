//! Merge-move: move a file or directory into a destination, merging directory
//! contents when both sides are directories.
//!
//! - Missing destination: create its parents and rename the source onto it.
//! - File source: into a directory (as `dst/<name>`) or over a file (the old
//!   file is deleted first).
//! - Directory source: every child is merge-moved into the same name under
//!   the destination, then the emptied source directory is removed.
//!
//! Nothing is rolled back. A failure part way through a directory leaves the
//! children processed so far at the destination.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::{PathError, Result};

use super::helpers::io_step;
use super::{ensure_parent, list_entries};

/// Merge-move `src` into `dst`.
///
/// Both types are read through symlinks. A renamed symlink is still moved as
/// the link itself; a link to a directory merges the directory it points at
/// and the link is removed afterwards.
pub fn merge_move(config: &Config, src: &Path, dst: &Path) -> Result<()> {
    let src_meta = match fs::metadata(src) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PathError::NotFound {
                path: src.to_path_buf(),
            });
        }
        Err(e) => return Err(io_step("stat source", src)(e)),
    };

    let Some(dst_meta) = stat_optional(dst)? else {
        debug!(src = %src.display(), dst = %dst.display(), "destination missing; renaming");
        ensure_parent(config, dst)?;
        let step = if src_meta.is_dir() { "rename directory" } else { "rename file" };
        fs::rename(src, dst).map_err(io_step(step, src))?;
        info!(src = %src.display(), dest = %dst.display(), "Renamed");
        return Ok(());
    };

    if src_meta.is_file() {
        move_file_into(src, dst, &dst_meta)
    } else if src_meta.is_dir() {
        merge_dir(config, src, dst, &dst_meta)
    } else {
        Err(PathError::invalid_target(
            src,
            "source is neither a regular file nor a directory",
        ))
    }
}

/// Destination metadata, or None when nothing is there.
fn stat_optional(path: &Path) -> Result<Option<Metadata>> {
    match fs::metadata(path) {
        Ok(m) => Ok(Some(m)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_step("stat destination", path)(e)),
    }
}

fn move_file_into(src: &Path, dst: &Path, dst_meta: &Metadata) -> Result<()> {
    if dst_meta.is_dir() {
        let name = src
            .file_name()
            .ok_or_else(|| PathError::invalid_target(src, "source has no file name"))?;
        let target = dst.join(name);
        debug!(src = %src.display(), dir = %dst.display(), "moving file into directory");
        fs::rename(src, &target).map_err(io_step("move file", src))?;
        info!(src = %src.display(), dest = %target.display(), "Moved file into directory");
        Ok(())
    } else if dst_meta.is_file() {
        warn!(dest = %dst.display(), "Replacing existing file");
        fs::remove_file(dst).map_err(io_step("delete old file", dst))?;
        fs::rename(src, dst).map_err(io_step("rename file", src))?;
        info!(src = %src.display(), dest = %dst.display(), "Replaced file");
        Ok(())
    } else {
        Err(PathError::invalid_target(
            dst,
            "destination is neither a regular file nor a directory",
        ))
    }
}

fn merge_dir(config: &Config, src: &Path, dst: &Path, dst_meta: &Metadata) -> Result<()> {
    if !dst_meta.is_dir() {
        return Err(PathError::invalid_target(dst, "destination is not a directory"));
    }

    let names = list_entries(src)?;
    debug!(src = %src.display(), dst = %dst.display(), entries = names.len(), "merging directory");
    for name in names {
        merge_move(config, &src.join(&name), &dst.join(&name))
            .map_err(|e| e.in_entry(name.to_string_lossy()))?;
    }

    if fs::symlink_metadata(src).is_ok_and(|m| m.file_type().is_symlink()) {
        fs::remove_file(src).map_err(io_step("delete source link", src))?;
    } else {
        fs::remove_dir(src).map_err(io_step("delete source directory", src))?;
    }
    info!(src = %src.display(), dest = %dst.display(), "Merged directory and removed source");
    Ok(())
}
