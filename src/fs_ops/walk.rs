//! Depth-first tree walk with visitor control.

use std::fs::FileType;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::errors::Result;
use crate::path::PPath;

use super::helpers::io_step;

/// What the visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    /// Do not descend into the directory just visited (same as Continue for files).
    SkipDir,
    /// End the walk successfully.
    Stop,
}

/// Visit `root` and everything below it, parents first, siblings in name order.
/// Symlinks are reported, not followed.
pub fn walk<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&PPath, &FileType) -> Result<Walk>,
{
    let mut it = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = it.next() {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(root).to_path_buf();
            io_step("walk directory", &at)(io::Error::from(e))
        })?;
        let p = PPath::try_from(entry.path())?;
        match visit(&p, &entry.file_type())? {
            Walk::Continue => {}
            Walk::SkipDir => {
                if entry.file_type().is_dir() {
                    it.skip_current_dir();
                }
            }
            Walk::Stop => break,
        }
    }
    Ok(())
}
