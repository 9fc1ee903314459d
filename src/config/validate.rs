//! Config validation logic.

use anyhow::{bail, Result};
use tracing::debug;

use super::types::Config;

const MAX_MODE: u32 = 0o7777;
/// Owner write + search; without them nested directory creation fails.
const DIR_OWNER_WX: u32 = 0o300;

impl Config {
    /// Reject permission bits that are out of range or unusable for directories.
    pub fn validate(&self) -> Result<()> {
        if self.dir_mode > MAX_MODE {
            bail!("dir_mode {:o} is out of range (max 7777)", self.dir_mode);
        }
        if self.file_mode > MAX_MODE {
            bail!("file_mode {:o} is out of range (max 7777)", self.file_mode);
        }
        if self.dir_mode & DIR_OWNER_WX != DIR_OWNER_WX {
            bail!(
                "dir_mode {:o} lacks owner write/execute; nested directories could not be created",
                self.dir_mode
            );
        }
        if let Some(lf) = &self.log_file
            && lf.is_dir()
        {
            bail!("log_file '{}' is a directory", lf.display());
        }
        debug!(dir_mode = format!("{:o}", self.dir_mode), file_mode = format!("{:o}", self.file_mode), "config validated");
        Ok(())
    }
}
