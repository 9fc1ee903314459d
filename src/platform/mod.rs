//! Platform-specific helpers.
//! Hides the Unix/Windows differences for permission bits and file types so the
//! path and merge code can stay platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{create_dir_all_mode, is_device, open_log_file_append, write_file_mode};

#[cfg(not(unix))]
pub use windows::{create_dir_all_mode, is_device, open_log_file_append, write_file_mode};
