//! Lexical path manipulation on strings (no filesystem access).
//!
//! All helpers treat every `std::path::is_separator` character as a separator
//! and emit `MAIN_SEPARATOR` when they build a new string.

use std::path::{is_separator, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Leading volume designator (`C:` or `\\host\share` on Windows, empty elsewhere).
#[cfg(windows)]
pub(crate) fn volume_name(path: &str) -> &str {
    let b = path.as_bytes();
    if b.len() >= 2 && b[1] == b':' && b[0].is_ascii_alphabetic() {
        return &path[..2];
    }
    // UNC: two separators, a host, a separator, a share.
    if b.len() >= 5 && is_separator(b[0] as char) && is_separator(b[1] as char) && !is_separator(b[2] as char) {
        let rest = &path[2..];
        if let Some(host_end) = rest.find(is_separator) {
            let after_host = &rest[host_end + 1..];
            if after_host.is_empty() || after_host.starts_with(is_separator) {
                return "";
            }
            let share_len = after_host.find(is_separator).unwrap_or(after_host.len());
            return &path[..2 + host_end + 1 + share_len];
        }
    }
    ""
}

#[cfg(not(windows))]
pub(crate) fn volume_name(_path: &str) -> &str {
    ""
}

/// Shortest lexically equivalent path: repeated separators collapse, `.`
/// elements drop, `..` consumes the preceding element, and `..` directly
/// under the root is discarded. An empty result becomes `.`.
pub(crate) fn clean(path: &str) -> String {
    let vol = volume_name(path);
    let rest = &path[vol.len()..];
    let rooted = rest.starts_with(is_separator);

    let mut out: Vec<&str> = Vec::new();
    for elem in rest.split(is_separator) {
        match elem {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                }
            }
            e => out.push(e),
        }
    }

    let mut s = String::with_capacity(path.len());
    s.push_str(vol);
    if rooted {
        s.push(MAIN_SEPARATOR);
    }
    s.push_str(&out.join(MAIN_SEPARATOR_STR));
    if out.is_empty() && !rooted {
        s.push('.');
    }
    s
}

/// Join non-empty parts with the separator and clean; all-empty input yields "".
pub(crate) fn join<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    let mut any = false;
    for p in parts {
        let p = p.as_ref();
        if p.is_empty() {
            continue;
        }
        if any {
            joined.push(MAIN_SEPARATOR);
        }
        joined.push_str(p);
        any = true;
    }
    if any { clean(&joined) } else { String::new() }
}

/// Last element with trailing separators removed.
pub(crate) fn base(path: &str) -> String {
    if path.is_empty() {
        return ".".into();
    }
    let trimmed = path.trim_end_matches(is_separator);
    let trimmed = &trimmed[volume_name(trimmed).len()..];
    let last = match trimmed.rfind(is_separator) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    };
    if last.is_empty() {
        MAIN_SEPARATOR_STR.into()
    } else {
        last.into()
    }
}

/// Everything but the last element, cleaned.
pub(crate) fn dir(path: &str) -> String {
    let vol = volume_name(path);
    let rest = &path[vol.len()..];
    let head = match rest.rfind(is_separator) {
        Some(i) => &rest[..i + 1],
        None => "",
    };
    let d = clean(head);
    if d == "." && vol.len() > 2 {
        return vol.into();
    }
    format!("{vol}{d}")
}

/// Extension of the last element including the dot, or "".
pub(crate) fn ext(path: &str) -> &str {
    let start = path.rfind(is_separator).map(|i| i + 1).unwrap_or(0);
    match path[start..].rfind('.') {
        Some(i) => &path[start + i..],
        None => "",
    }
}

/// Split immediately after the final separator.
pub(crate) fn split(path: &str) -> (&str, &str) {
    let vol = volume_name(path);
    let rest = &path[vol.len()..];
    let cut = rest.rfind(is_separator).map(|i| vol.len() + i + 1).unwrap_or(vol.len());
    path.split_at(cut)
}

/// Relative path from `base_path` to `target`, or None when there is none lexically.
pub(crate) fn rel(base_path: &str, target: &str) -> Option<String> {
    let base_vol = volume_name(base_path);
    let targ_vol = volume_name(target);
    let base = clean(base_path);
    let targ = clean(target);
    if base == targ {
        return Some(".".into());
    }
    if !base_vol.eq_ignore_ascii_case(targ_vol) {
        return None;
    }

    let base = &base[base_vol.len()..];
    let targ = &targ[targ_vol.len()..];
    if base.starts_with(is_separator) != targ.starts_with(is_separator) {
        return None;
    }

    let elems = |s: &str| -> Vec<String> {
        s.split(is_separator)
            .filter(|e| !e.is_empty() && *e != ".")
            .map(str::to_owned)
            .collect()
    };
    let b = elems(base);
    let t = elems(targ);

    let common = b.iter().zip(t.iter()).take_while(|(x, y)| x == y).count();
    let b_rest = &b[common..];
    if b_rest.first().map(String::as_str) == Some("..") {
        return None;
    }

    let mut out: Vec<&str> = vec![".."; b_rest.len()];
    out.extend(t[common..].iter().map(String::as_str));
    if out.is_empty() {
        Some(".".into())
    } else {
        Some(out.join(MAIN_SEPARATOR_STR))
    }
}

/// Relative, non-empty, and does not climb above its starting point.
pub(crate) fn is_local(path: &str) -> bool {
    if path.is_empty() || std::path::Path::new(path).is_absolute() || !volume_name(path).is_empty() {
        return false;
    }
    if path.starts_with(is_separator) {
        return false;
    }
    let c = clean(path);
    !(c == ".." || (c.starts_with("..") && c[2..].starts_with(is_separator)))
}

/// Unrooted, slash-separated, no empty, `.` or `..` elements; `.` alone is valid.
pub(crate) fn is_valid(path: &str) -> bool {
    if path == "." {
        return true;
    }
    path.split('/').all(|e| !matches!(e, "" | "." | ".."))
}
