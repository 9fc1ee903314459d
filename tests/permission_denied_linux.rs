#![cfg(target_os = "linux")]

use ppath::{ErrorKind, PPath, PathError};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// A read-only source subdirectory cannot give up its files: the rename out
/// of it fails, and the error names the step, the entries and the OS cause.
#[test]
fn read_only_source_dir_fails_with_wrapped_io_error() {
    // root bypasses permission checks
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }

    let td = tempdir().unwrap();
    let src = td.path().join("src");
    let dst = td.path().join("dst");
    let locked = src.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(locked.join("f.txt"), "F").unwrap();
    fs::create_dir_all(dst.join("locked")).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

    let src_p = PPath::try_from(src.as_path()).unwrap();
    let dst_p = PPath::try_from(dst.as_path()).unwrap();
    let result = src_p.merge_move(&dst_p);

    // restore so tempdir cleanup can remove the tree
    let _ = fs::set_permissions(&locked, fs::Permissions::from_mode(0o755));

    let err = result.expect_err("expected permission denied");
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(err.code(), "io");
    assert_eq!(err.entry_chain(), vec!["locked", "f.txt"]);

    let mut inner = &err;
    while let PathError::Entry { source, .. } = inner {
        inner = &**source;
    }
    match inner {
        PathError::Io { step, path, source } => {
            assert_eq!(*step, "rename file");
            assert_eq!(path, &locked.join("f.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected inner error: {other:?}"),
    }

    let msg = err.to_string();
    assert!(msg.contains("entry 'locked'"), "msg was: {msg}");
    assert!(msg.contains("[os code: 13]"), "msg was: {msg}");

    // nothing moved, nothing removed
    assert_eq!(fs::read_to_string(locked.join("f.txt")).unwrap(), "F");
    assert!(!dst.join("locked/f.txt").exists());
}
