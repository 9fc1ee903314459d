//! Content hashing.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::errors::{PathError, Result};

use super::helpers::io_step;

/// Lowercase hex SHA-256 of a file, streamed so large files are not loaded whole.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PathError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            io_step("open file", path)(e)
        }
    })?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(io_step("read file", path))?;
    Ok(hex::encode(hasher.finalize()))
}
