//! Lexical behaviour of PPath through the public API (no filesystem access).
#![cfg(unix)]

use ppath::{ErrorKind, FixedCwd, PPath};
use std::path::PathBuf;

#[test]
fn new_and_join_clean_their_result() {
    assert_eq!(PPath::new(["a", "b", "c"]).as_str(), "a/b/c");
    assert_eq!(PPath::new(["a/", "./b", "../c"]).as_str(), "a/c");
    assert_eq!(PPath::new(Vec::<String>::new()).as_str(), "");
    assert_eq!(PPath::new(["a", "b"]).join(["c", "d"]).as_str(), "a/b/c/d");
    assert_eq!(PPath::from("").join(["x"]).as_str(), "x");
}

#[test]
fn base_dir_ext() {
    let p = PPath::new(["a", "b", "c.txt"]);
    assert_eq!(p.base().as_str(), "c.txt");
    assert_eq!(p.dir().as_str(), "a/b");
    assert_eq!(p.ext(), ".txt");
    assert_eq!(PPath::from("noext").ext(), "");
    assert_eq!(PPath::from("").base().as_str(), ".");
    assert_eq!(PPath::from("/").dir().as_str(), "/");
}

#[test]
fn nth_parent_stops_at_root_and_dot() {
    let p = PPath::new(["a", "b", "c", "d"]);
    assert_eq!(p.nth_parent(2).as_str(), "a/b");
    assert_eq!(p.nth_parent(10).as_str(), ".");
    assert_eq!(PPath::from("/x/y").nth_parent(5).as_str(), "/");
}

#[test]
fn split_keeps_trailing_separator() {
    let (d, f) = PPath::from("a/b/c.txt").split();
    assert_eq!((d.as_str(), f.as_str()), ("a/b/", "c.txt"));
    let (d, f) = PPath::from("file").split();
    assert_eq!((d.as_str(), f.as_str()), ("", "file"));
}

#[test]
fn rel_between_paths() {
    let p = PPath::new(["a", "b", "c", "d"]);
    assert_eq!(p.rel("a/b").unwrap().as_str(), "c/d");
    assert_eq!(PPath::from("/a/x").rel("/a/b/c").unwrap().as_str(), "../../x");
    assert_eq!(PPath::from("a").rel("/a").unwrap_err().kind(), ErrorKind::NotRelative);
}

#[test]
fn abs_against_fixed_cwd() {
    let cwd = FixedCwd(PathBuf::from("/home/u"));
    assert_eq!(PPath::from(".").abs(&cwd).unwrap().as_str(), "/home/u");
    assert_eq!(PPath::from("../v/w").abs(&cwd).unwrap().as_str(), "/home/v/w");
}

#[test]
fn predicates() {
    assert!(PPath::from("/absolute/path").is_abs());
    assert!(!PPath::from("relative/path").is_abs());
    assert!(PPath::from("relative/path").is_local());
    assert!(!PPath::from("../escape").is_local());
    assert!(PPath::from("a/b").is_valid());
    assert!(!PPath::from("/a/b").is_valid());
    assert_eq!(PPath::from("/a/b").volume_name(), "");
}

#[test]
fn shell_matching() {
    assert!(PPath::from("photo.jpg").matches("*.jpg"));
    assert!(PPath::from("dir/photo.jpg").matches("dir/*.jpg"));
    assert!(!PPath::from("dir/photo.jpg").matches("*.jpg"));
    assert!(PPath::from("log7").matches("log[0-9]"));
    assert!(!PPath::from("log7").matches("log[")); // malformed never matches
}

#[test]
fn conversions_and_display() {
    let p = PPath::from(String::from("x/y"));
    assert_eq!(p.to_string(), "x/y");
    assert_eq!(p.as_path(), std::path::Path::new("x/y"));
    let back = PPath::try_from(PathBuf::from("x/y")).unwrap();
    assert_eq!(back, p);
    assert_eq!(back.into_string(), "x/y");
}

#[test]
fn non_utf8_paths_are_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    let raw = PathBuf::from(OsStr::from_bytes(b"bad\xff"));
    let err = PPath::try_from(raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotUnicode);
}
