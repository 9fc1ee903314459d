//! Working-directory provider.
//! `abs` takes one of these explicitly instead of reading the process cwd behind the caller's back.

use std::io;
use std::path::PathBuf;

/// Source of the directory that relative paths are resolved against.
pub trait WorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// The real process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCwd;

impl WorkingDir for ProcessCwd {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// A fixed directory, for tests and sandboxed callers.
#[derive(Debug, Clone)]
pub struct FixedCwd(pub PathBuf);

impl WorkingDir for FixedCwd {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}
