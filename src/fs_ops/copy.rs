//! Copy helper:
//! - Files: into a directory as `dst/<name>`, otherwise create-or-overwrite `dst`
//! - Directories: recreate the tree under `dst` (created if missing) and copy every file
//!
//! Symlinks inside a copied tree are followed; walkdir reports link loops as errors.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::{PathError, Result};
use crate::platform::create_dir_all_mode;

use super::ensure_parent;
use super::helpers::io_step;

/// Copy `src` (file or directory) to `dst`.
pub fn copy_entry(config: &Config, src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PathError::NotFound {
                path: src.to_path_buf(),
            }
        } else {
            io_step("stat source", src)(e)
        }
    })?;

    if meta.is_dir() {
        copy_dir(config, src, dst)
    } else {
        copy_file(config, src, dst)
    }
}

fn copy_file(config: &Config, src: &Path, dst: &Path) -> Result<()> {
    let target = if dst.is_dir() {
        let name = src
            .file_name()
            .ok_or_else(|| PathError::invalid_target(src, "source has no file name"))?;
        dst.join(name)
    } else {
        ensure_parent(config, dst)?;
        dst.to_path_buf()
    };

    let bytes = fs::copy(src, &target).map_err(io_step("copy file", &target))?;
    info!(src = %src.display(), dest = %target.display(), bytes, "Copied file");
    Ok(())
}

fn copy_dir(config: &Config, src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() && !dst.is_dir() {
        return Err(PathError::invalid_target(
            dst,
            "destination is not a directory, cannot copy directory to file",
        ));
    }
    create_dir_all_mode(dst, config.dir_mode).map_err(io_step("create directory", dst))?;

    let mut files = 0u64;
    for entry in WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(src).to_path_buf();
            io_step("walk source tree", &at)(io::Error::from(e))
        })?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| PathError::invalid_target(entry.path(), "entry escaped the source tree"))?;
        let out = dst.join(rel);

        if entry.file_type().is_dir() {
            create_dir_all_mode(&out, config.dir_mode).map_err(io_step("create directory", &out))?;
        } else {
            fs::copy(entry.path(), &out).map_err(io_step("copy file", &out))?;
            files += 1;
        }
        debug!(path = %out.display(), "copied");
    }

    info!(src = %src.display(), dest = %dst.display(), files, "Copied directory tree");
    Ok(())
}
