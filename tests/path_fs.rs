use assert_fs::prelude::*;
use ppath::{ErrorKind, PPath, Walk};
use std::fs;

fn child(dir: &assert_fs::TempDir, name: &str) -> PPath {
    PPath::try_from(dir.path().join(name)).expect("utf-8 temp path")
}

#[test]
fn create_write_read_delete() {
    let dir = assert_fs::TempDir::new().unwrap();
    let p = child(&dir, "a/b/new.txt");

    drop(p.create().unwrap());
    assert!(p.is_regular());
    assert!(p.dir().is_dir());
    assert_eq!(p.create().unwrap_err().kind(), ErrorKind::AlreadyExists);

    p.write_file("payload").unwrap();
    assert_eq!(p.read_file().unwrap(), b"payload");
    assert_eq!(p.size().unwrap(), 7);

    p.nth_parent(2).delete().unwrap();
    assert!(!p.is_exist());
    assert_eq!(p.size_or_zero(), 0);
    // deleting again is fine
    p.nth_parent(2).delete().unwrap();
}

#[test]
fn stat_missing_is_not_found() {
    let dir = assert_fs::TempDir::new().unwrap();
    let p = child(&dir, "missing");
    assert_eq!(p.stat().unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(p.open().unwrap_err().kind(), ErrorKind::NotFound);
    assert!(!p.is_dir() && !p.is_regular() && !p.is_symlink() && !p.is_dev());
}

#[test]
fn rename_returns_new_value() {
    let dir = assert_fs::TempDir::new().unwrap();
    let from = child(&dir, "old.txt");
    from.write_file("x").unwrap();
    let to = from.rename(child(&dir, "new.txt")).unwrap();
    assert!(!from.is_exist());
    assert_eq!(to.read_file().unwrap(), b"x");
}

#[test]
fn copy_file_and_tree() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("src/sub").create_dir_all().unwrap();
    dir.child("src/top.txt").write_str("top").unwrap();
    dir.child("src/sub/leaf.txt").write_str("leaf").unwrap();
    dir.child("out").create_dir_all().unwrap();

    child(&dir, "src/top.txt").copy(&child(&dir, "out")).unwrap();
    dir.child("out/top.txt").assert("top");

    child(&dir, "src").copy(&child(&dir, "mirror")).unwrap();
    dir.child("mirror/top.txt").assert("top");
    dir.child("mirror/sub/leaf.txt").assert("leaf");
    // source untouched
    dir.child("src/sub/leaf.txt").assert("leaf");
}

#[test]
fn copy_file_overwrites_existing() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("a.txt").write_str("new").unwrap();
    dir.child("b.txt").write_str("old and longer").unwrap();
    child(&dir, "a.txt").copy(&child(&dir, "b.txt")).unwrap();
    dir.child("b.txt").assert("new");
}

#[test]
fn entries_and_walk() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("z.txt").touch().unwrap();
    dir.child("m").create_dir_all().unwrap();
    dir.child("m/inner.txt").touch().unwrap();
    let root = PPath::try_from(dir.path()).unwrap();

    assert_eq!(root.entries().unwrap(), vec!["m", "z.txt"]);

    let mut files = Vec::new();
    root.walk(|p, ft| {
        if ft.is_file() {
            files.push(p.rel(root.as_str())?.into_string());
        }
        Ok(Walk::Continue)
    })
    .unwrap();
    assert_eq!(files, vec!["m/inner.txt", "z.txt"]);
}

#[test]
fn hashing_and_canonicalize() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("h.txt").write_str("Hello world!").unwrap();
    let p = child(&dir, "h.txt");
    assert_eq!(
        p.sha256().unwrap(),
        "c0535e4be2b79ffd93291305436bf889314e4a3faec05ecffcbb7df31ad9e51a"
    );
    let canon = p.canonicalize().unwrap();
    assert!(canon.is_abs());
    assert_eq!(fs::read_to_string(canon.as_path()).unwrap(), "Hello world!");
}

#[cfg(unix)]
#[test]
fn symlink_and_device_predicates() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("t.txt").write_str("t").unwrap();
    let link = child(&dir, "l");
    std::os::unix::fs::symlink(dir.path().join("t.txt"), link.as_path()).unwrap();
    assert!(link.is_symlink());
    assert!(link.is_regular(), "is_regular follows the link");
    assert!(PPath::from("/dev/null").is_dev());
}

#[cfg(unix)]
#[test]
fn write_file_uses_file_mode() {
    use std::os::unix::fs::PermissionsExt;
    let dir = assert_fs::TempDir::new().unwrap();
    let p = child(&dir, "m.txt");
    p.write_file("x").unwrap();
    assert_eq!(fs::metadata(p.as_path()).unwrap().permissions().mode() & 0o777, 0o644);
    let q = child(&dir, "q.txt");
    q.write_file_with("x", &ppath::Config::with_modes(0o755, 0o600)).unwrap();
    assert_eq!(fs::metadata(q.as_path()).unwrap().permissions().mode() & 0o777, 0o600);
}
