//! Shell-style name matching.
//!
//! Syntax:
//!   `*`        any run of non-separator characters
//!   `?`        one non-separator character
//!   `[...]`    a class of characters; `^` negates, `a-z` is a range
//!   `\c`       the literal `c` (not on Windows, where `\` is a separator)
//!
//! The whole pattern is validated up front, so a malformed pattern is an
//! error regardless of the name it is matched against.

use std::path::is_separator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BadPattern;

/// A single `[...]` class, already parsed.
struct Class {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl Class {
    fn contains(&self, c: char) -> bool {
        let hit = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        hit != self.negated
    }
}

const ESCAPES: bool = cfg!(not(windows));

/// Parse one possibly escaped class character starting at `p[0]`.
fn class_char(p: &[char]) -> Result<(char, usize), BadPattern> {
    match p.first() {
        None | Some('-') | Some(']') => Err(BadPattern),
        Some('\\') if ESCAPES => p.get(1).map(|&c| (c, 2)).ok_or(BadPattern),
        Some(&c) => Ok((c, 1)),
    }
}

/// Parse a class whose opening `[` has been consumed; returns it and the chars used.
fn parse_class(p: &[char]) -> Result<(Class, usize), BadPattern> {
    let mut i = 0;
    let negated = p.first() == Some(&'^');
    if negated {
        i += 1;
    }
    let mut ranges = Vec::new();
    loop {
        if p.get(i) == Some(&']') && !ranges.is_empty() {
            return Ok((Class { negated, ranges }, i + 1));
        }
        let (lo, n) = class_char(&p[i..])?;
        i += n;
        let mut hi = lo;
        if p.get(i) == Some(&'-') {
            let (h, n) = class_char(&p[i + 1..])?;
            hi = h;
            i += 1 + n;
        }
        if lo > hi {
            return Err(BadPattern);
        }
        ranges.push((lo, hi));
    }
}

fn validate(p: &[char]) -> Result<(), BadPattern> {
    let mut i = 0;
    while i < p.len() {
        match p[i] {
            '[' => {
                let (_, n) = parse_class(&p[i + 1..])?;
                i += 1 + n;
            }
            '\\' if ESCAPES => {
                if i + 1 >= p.len() {
                    return Err(BadPattern);
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    Ok(())
}

/// Match one non-star element at the head of `p` against `c`; returns the
/// number of pattern chars it used.
fn match_one(p: &[char], c: char) -> Option<usize> {
    match p[0] {
        '?' => (!is_separator(c)).then_some(1),
        '[' => {
            // validated already
            let (class, n) = parse_class(&p[1..]).ok()?;
            class.contains(c).then_some(1 + n)
        }
        '\\' if ESCAPES => (p.get(1) == Some(&c)).then_some(2),
        lit => (lit == c).then_some(1),
    }
}

/// Star runs never backtrack into each other: on a mismatch only the most
/// recent star grows by one char, and never across a separator.
fn match_here(p: &[char], s: &[char]) -> bool {
    let (mut pi, mut si) = (0, 0);
    // (pattern index after the star run, end of the chars the star has taken)
    let mut star: Option<(usize, usize)> = None;

    loop {
        if pi < p.len() && p[pi] == '*' {
            while pi < p.len() && p[pi] == '*' {
                pi += 1;
            }
            star = Some((pi, si));
            continue;
        }
        if pi == p.len() && si == s.len() {
            return true;
        }
        if pi < p.len()
            && let Some(&c) = s.get(si)
            && let Some(n) = match_one(&p[pi..], c)
        {
            pi += n;
            si += 1;
            continue;
        }
        match star {
            Some((after, taken)) if taken < s.len() && !is_separator(s[taken]) => {
                star = Some((after, taken + 1));
                pi = after;
                si = taken + 1;
            }
            _ => return false,
        }
    }
}

/// Match `name` against the shell `pattern`.
pub(crate) fn matches(pattern: &str, name: &str) -> Result<bool, BadPattern> {
    let p: Vec<char> = pattern.chars().collect();
    validate(&p)?;
    let s: Vec<char> = name.chars().collect();
    Ok(match_here(&p, &s))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn star_and_question() {
        assert_eq!(matches("*.txt", "notes.txt"), Ok(true));
        assert_eq!(matches("*.txt", "a/notes.txt"), Ok(false));
        assert_eq!(matches("a/*/c", "a/b/c"), Ok(true));
        assert_eq!(matches("a?c", "abc"), Ok(true));
        assert_eq!(matches("a?c", "a/c"), Ok(false));
        assert_eq!(matches("**", ""), Ok(true));
    }

    #[test]
    fn classes() {
        assert_eq!(matches("[a-c]x", "bx"), Ok(true));
        assert_eq!(matches("[^a-c]x", "bx"), Ok(false));
        assert_eq!(matches("[^a-c]x", "dx"), Ok(true));
        assert_eq!(matches("[\\]]", "]"), Ok(true));
        assert_eq!(matches("\\*", "*"), Ok(true));
        assert_eq!(matches("\\*", "a"), Ok(false));
    }

    #[test]
    fn star_runs_stay_against_the_last_star() {
        let name = "a".repeat(60);
        let started = std::time::Instant::now();
        assert_eq!(matches("*a*a*a*a*a*a*a*a*b", &name), Ok(false));
        assert_eq!(matches("*a*a*a*a*a*a*a*a*a", &name), Ok(true));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));

        assert_eq!(matches("*x*y", "axbxcy"), Ok(true));
        assert_eq!(matches("*b*", "ab/b"), Ok(false));
        assert_eq!(matches("a*/b*", "aaa/bbb"), Ok(true));
        assert_eq!(matches("*c", "abc/c"), Ok(false));
    }

    #[test]
    fn malformed() {
        assert_eq!(matches("[", "a"), Err(BadPattern));
        assert_eq!(matches("[]", "a"), Err(BadPattern));
        assert_eq!(matches("[z-a]", "a"), Err(BadPattern));
        assert_eq!(matches("ab\\", "ab"), Err(BadPattern));
        assert_eq!(matches("x[", "y"), Err(BadPattern));
    }
}
