//! Unix implementations of platform helpers.

use std::fs::{self, DirBuilder, File, FileType, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::{DirBuilderExt, FileTypeExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// `mkdir -p` with `mode` applied to every directory that gets created (umask still applies).
/// Existing directories are left alone.
pub fn create_dir_all_mode(path: &Path, mode: u32) -> io::Result<()> {
    DirBuilder::new().recursive(true).mode(mode).create(path)
}

/// Create or truncate `path` and write `data`; `mode` applies only on create.
pub fn write_file_mode(path: &Path, data: &[u8], mode: u32) -> io::Result<()> {
    let mut f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)?;
    f.write_all(data)
}

/// Block or character device.
pub fn is_device(ft: &FileType) -> bool {
    ft.is_block_device() || ft.is_char_device()
}

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists its permissions are left as they are.
pub fn open_log_file_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_dir_all_mode_respects_mode() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        create_dir_all_mode(&nested, 0o700).unwrap();
        let mode = fs::metadata(&nested).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
        // idempotent
        create_dir_all_mode(&nested, 0o700).unwrap();
    }

    #[test]
    fn write_file_mode_sets_mode_on_create() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("f.txt");
        write_file_mode(&p, b"one", 0o600).unwrap();
        assert_eq!(fs::metadata(&p).unwrap().permissions().mode() & 0o777, 0o600);
        write_file_mode(&p, b"two", 0o644).unwrap();
        assert_eq!(fs::read(&p).unwrap(), b"two");
        // existing file keeps its mode
        assert_eq!(fs::metadata(&p).unwrap().permissions().mode() & 0o777, 0o600);
    }

    #[test]
    fn dev_null_is_device() {
        let ft = fs::metadata("/dev/null").unwrap().file_type();
        assert!(is_device(&ft));
        let tmp = tempdir().unwrap();
        assert!(!is_device(&fs::metadata(tmp.path()).unwrap().file_type()));
    }

    #[test]
    fn new_log_file_gets_0600() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("ppath.log");
        let _f = open_log_file_append(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "newly created log file should be 0600");
    }
}
