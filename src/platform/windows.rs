//! Windows implementations of platform helpers.
//!
//! Windows lacks POSIX mode semantics, so the `mode` arguments are accepted and ignored.

use std::fs::{self, File, FileType, OpenOptions};
use std::io;
use std::path::Path;

pub fn create_dir_all_mode(path: &Path, _mode: u32) -> io::Result<()> {
    fs::create_dir_all(path)
}

pub fn write_file_mode(path: &Path, data: &[u8], _mode: u32) -> io::Result<()> {
    fs::write(path, data)
}

/// std exposes no device file type on Windows.
pub fn is_device(_ft: &FileType) -> bool {
    false
}

pub fn open_log_file_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}
