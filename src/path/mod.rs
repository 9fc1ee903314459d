//! `PPath`: an immutable, chainable path value.
//!
//! Lexical operations (join, base, dir, ext, split, rel, ...) work on the
//! string alone. Filesystem operations delegate to std and `fs_ops`, wrapping
//! failures in [`PathError`] with the step that was attempted.

mod cwd;
pub(crate) mod lexical;
mod pattern;

pub use cwd::{FixedCwd, ProcessCwd, WorkingDir};

use std::fmt;
use std::fs::{self, File, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::{PathError, Result};
use crate::fs_ops::{self, helpers::io_step, Walk};
use crate::platform;

/// Textual filesystem location. Every derivation returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PPath(String);

impl PPath {
    /// Join `parts` and clean the result. No non-empty parts gives `""`.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PPath(lexical::join(parts))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn join<I, S>(&self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let head = std::iter::once(self.0.clone());
        PPath(lexical::join(head.chain(parts.into_iter().map(|s| s.as_ref().to_owned()))))
    }

    /// Lexically cleaned copy.
    pub fn clean(&self) -> Self {
        PPath(lexical::clean(&self.0))
    }

    /// Last element.
    pub fn base(&self) -> Self {
        PPath(lexical::base(&self.0))
    }

    /// Containing directory (lexical).
    pub fn dir(&self) -> Self {
        PPath(lexical::dir(&self.0))
    }

    pub fn nth_parent(&self, n: usize) -> Self {
        (0..n).fold(self.clone(), |p, _| p.dir())
    }

    /// Extension of the last element including the dot, or "".
    pub fn ext(&self) -> &str {
        lexical::ext(&self.0)
    }

    /// `(dir, file)` split after the final separator; `dir` keeps the separator.
    pub fn split(&self) -> (Self, Self) {
        let (d, f) = lexical::split(&self.0);
        (PPath(d.to_owned()), PPath(f.to_owned()))
    }

    /// Path of `self` relative to `base`, computed lexically.
    pub fn rel(&self, base: impl AsRef<str>) -> Result<Self> {
        let base = base.as_ref();
        lexical::rel(base, &self.0).map(PPath).ok_or_else(|| PathError::NotRelative {
            path: self.0.clone(),
            base: base.to_owned(),
        })
    }

    /// Absolute form, resolving relative paths against `cwd`.
    pub fn abs(&self, cwd: &impl WorkingDir) -> Result<Self> {
        if self.is_abs() {
            return Ok(self.clean());
        }
        let dir = cwd
            .current_dir()
            .map_err(io_step("read working directory", Path::new(".")))?;
        let dir = PPath::try_from(dir)?;
        Ok(dir.join([&self.0]))
    }

    /// Filesystem-resolved absolute path (symlinks followed).
    pub fn canonicalize(&self) -> Result<Self> {
        let real = dunce::canonicalize(self.as_path()).map_err(|e| self.not_found_or("canonicalize", e))?;
        PPath::try_from(real)
    }

    pub fn is_abs(&self) -> bool {
        self.as_path().is_absolute()
    }

    pub fn is_local(&self) -> bool {
        lexical::is_local(&self.0)
    }

    pub fn is_valid(&self) -> bool {
        lexical::is_valid(&self.0)
    }

    /// Shell-pattern match of the whole path; malformed patterns never match.
    pub fn matches(&self, pattern: &str) -> bool {
        pattern::matches(pattern, &self.0).unwrap_or(false)
    }

    pub fn volume_name(&self) -> &str {
        lexical::volume_name(&self.0)
    }

    pub fn stat(&self) -> Result<Metadata> {
        fs::metadata(self.as_path()).map_err(|e| self.not_found_or("stat", e))
    }

    pub fn size(&self) -> Result<u64> {
        Ok(self.stat()?.len())
    }

    /// Size in bytes, or 0 if the path cannot be stat'ed.
    pub fn size_or_zero(&self) -> u64 {
        self.size().unwrap_or(0)
    }

    pub fn is_exist(&self) -> bool {
        self.stat().is_ok()
    }

    pub fn is_regular(&self) -> bool {
        self.stat().map(|m| m.is_file()).unwrap_or(false)
    }

    pub fn is_dir(&self) -> bool {
        self.stat().map(|m| m.is_dir()).unwrap_or(false)
    }

    /// True for the link itself; the link is not followed.
    pub fn is_symlink(&self) -> bool {
        fs::symlink_metadata(self.as_path())
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    }

    /// Block or character device.
    pub fn is_dev(&self) -> bool {
        self.stat()
            .map(|m| platform::is_device(&m.file_type()))
            .unwrap_or(false)
    }

    pub fn open(&self) -> Result<File> {
        File::open(self.as_path()).map_err(|e| self.not_found_or("open file", e))
    }

    /// Create a new file, making missing parents. Fails if the path exists.
    pub fn create(&self) -> Result<File> {
        self.create_with(&Config::default())
    }

    pub fn create_with(&self, config: &Config) -> Result<File> {
        fs_ops::create_new_file(config, self.as_path())
    }

    pub fn read_file(&self) -> Result<Vec<u8>> {
        fs::read(self.as_path()).map_err(|e| self.not_found_or("read file", e))
    }

    /// Create or truncate the file and write `data` (file mode from the default config).
    pub fn write_file(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.write_file_with(data, &Config::default())
    }

    pub fn write_file_with(&self, data: impl AsRef<[u8]>, config: &Config) -> Result<()> {
        platform::write_file_mode(self.as_path(), data.as_ref(), config.file_mode)
            .map_err(io_step("write file", self.as_path()))
    }

    /// Recursive delete. A missing path is not an error.
    pub fn delete(&self) -> Result<()> {
        fs_ops::remove_all(self.as_path())
    }

    /// Primitive rename; returns the new location.
    pub fn rename(&self, to: impl AsRef<str>) -> Result<Self> {
        let to = PPath::from(to.as_ref());
        fs::rename(self.as_path(), to.as_path()).map_err(|e| self.not_found_or("rename", e))?;
        Ok(to)
    }

    /// Copy a file or directory tree to `dst`.
    pub fn copy(&self, dst: &PPath) -> Result<()> {
        self.copy_with(dst, &Config::default())
    }

    pub fn copy_with(&self, dst: &PPath, config: &Config) -> Result<()> {
        fs_ops::copy_entry(config, self.as_path(), dst.as_path())
    }

    /// Names of the immediate children, sorted.
    pub fn entries(&self) -> Result<Vec<String>> {
        fs_ops::list_entries(self.as_path())?
            .into_iter()
            .map(|name| {
                name.into_string().map_err(|raw| PathError::NotUnicode {
                    path: self.as_path().join(raw),
                })
            })
            .collect()
    }

    /// Depth-first walk, parents before children, siblings in name order.
    pub fn walk<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(&PPath, &fs::FileType) -> Result<Walk>,
    {
        fs_ops::walk(self.as_path(), visit)
    }

    /// Lowercase hex SHA-256 of the file contents.
    pub fn sha256(&self) -> Result<String> {
        fs_ops::sha256_file(self.as_path())
    }

    /// Merge-move `self` into `dst` with default permissions.
    pub fn merge_move(&self, dst: &PPath) -> Result<()> {
        self.merge_move_with(dst, &Config::default())
    }

    pub fn merge_move_with(&self, dst: &PPath, config: &Config) -> Result<()> {
        fs_ops::merge_move(config, self.as_path(), dst.as_path())
    }

    fn not_found_or(&self, step: &'static str, e: io::Error) -> PathError {
        if e.kind() == io::ErrorKind::NotFound {
            PathError::NotFound {
                path: self.as_path().to_path_buf(),
            }
        } else {
            io_step(step, self.as_path())(e)
        }
    }
}

impl fmt::Display for PPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for PPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for PPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PPath {
    fn from(s: &str) -> Self {
        PPath(s.to_owned())
    }
}

impl From<String> for PPath {
    fn from(s: String) -> Self {
        PPath(s)
    }
}

impl TryFrom<PathBuf> for PPath {
    type Error = PathError;

    fn try_from(p: PathBuf) -> Result<Self> {
        p.into_os_string()
            .into_string()
            .map(PPath)
            .map_err(|raw| PathError::NotUnicode { path: raw.into() })
    }
}

impl TryFrom<&Path> for PPath {
    type Error = PathError;

    fn try_from(p: &Path) -> Result<Self> {
        PPath::try_from(p.to_path_buf())
    }
}
