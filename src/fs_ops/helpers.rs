//! I/O helper utilities.
//!
//! Provides small adapters that turn io::Error into PathError::Io with the
//! step being attempted, plus platform-aware hints for the display form.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_step("create parent directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::PathError;

/// Human-friendly hint for an io::Error as a suffix, or "" when none applies.
pub(crate) fn hint_for(e: &io::Error) -> String {
    let mut msg = String::new();

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions."),
                libc::EXDEV => Some("cross-filesystem; atomic rename not possible."),
                libc::EBUSY => Some("resource busy; ensure no other process is using it."),
                libc::ENOENT => Some("path not found; verify it exists."),
                libc::EEXIST => Some("already exists; remove the target first."),
                libc::ENOTEMPTY => Some("directory not empty."),
                libc::ENOTDIR => Some("a path component is not a directory."),
                libc::EISDIR => Some("target is a directory."),
                libc::EINVAL => Some("invalid argument; is the destination inside the source?"),
                libc::ENOSPC => Some("insufficient space on device."),
                libc::EROFS => Some("read-only filesystem; cannot write here."),
                libc::ELOOP => Some("too many symbolic link levels (ELOOP); possible symlink cycle."),
                libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments."),
                libc::EMFILE => Some("process file descriptor limit reached; close files or raise limits."),
                _ => None,
            };
            if let Some(h) = hint {
                msg.push_str(" — ");
                msg.push_str(h);
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions."),
                17 => Some("not same device; cross-filesystem move."),
                32 => Some("sharing violation; file is in use."),
                2 | 3 => Some("path not found; verify it exists."),
                80 | 183 => Some("already exists; remove the target first."),
                112 => Some("insufficient disk space."),
                206 => Some("filename or path too long (MAX_PATH exceeded)."),
                _ => None,
            };
            if let Some(h) = hint {
                msg.push_str(" — ");
                msg.push_str(h);
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        let hint = match e.kind() {
            io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions."),
            io::ErrorKind::NotFound => Some("path not found; verify it exists."),
            io::ErrorKind::AlreadyExists => Some("already exists; remove the target first."),
            _ => None,
        };
        if let Some(h) = hint {
            msg.push_str(" — ");
            msg.push_str(h);
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that wraps an io::Error
/// with the step description and the path it concerns.
pub(crate) fn io_step<'a>(step: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> PathError + 'a {
    move |source: io::Error| PathError::Io {
        step,
        path: path.to_path_buf(),
        source,
    }
}
