//! Typed error definitions for ppath.
//! Every filesystem failure is wrapped with the step that was being attempted,
//! so callers get "rename file '/a/b': ..." instead of a bare OS message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::helpers::hint_for;

/// Coarse classification of a [`PathError`], stable across wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidTarget,
    Io,
    AlreadyExists,
    NotRelative,
    NotUnicode,
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Source path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid target '{}': {reason}", .path.display())]
    InvalidTarget { path: PathBuf, reason: String },

    #[error("{step} '{}': {source}{}", .path.display(), hint_for(.source))]
    Io {
        step: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("entry '{entry}': {source}")]
    Entry {
        entry: String,
        #[source]
        source: Box<PathError>,
    },

    #[error("Path already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Cannot make '{path}' relative to '{base}'")]
    NotRelative { path: String, base: String },

    #[error("Path is not valid UTF-8: {}", .path.display())]
    NotUnicode { path: PathBuf },
}

impl PathError {
    /// Classification of the innermost error (entry wrappers are transparent).
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::NotFound { .. } => ErrorKind::NotFound,
            PathError::InvalidTarget { .. } => ErrorKind::InvalidTarget,
            PathError::Io { .. } => ErrorKind::Io,
            PathError::Entry { source, .. } => source.kind(),
            PathError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            PathError::NotRelative { .. } => ErrorKind::NotRelative,
            PathError::NotUnicode { .. } => ErrorKind::NotUnicode,
        }
    }

    /// Entry names from the outermost wrapper down to the failing child.
    pub fn entry_chain(&self) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut cur = self;
        while let PathError::Entry { entry, source } = cur {
            chain.push(entry.as_str());
            cur = &**source;
        }
        chain
    }

    /// Short machine-friendly label, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidTarget => "invalid_target",
            ErrorKind::Io => "io",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::NotRelative => "not_relative",
            ErrorKind::NotUnicode => "not_unicode",
        }
    }

    pub(crate) fn invalid_target(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PathError::InvalidTarget {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn in_entry(self, entry: impl Into<String>) -> Self {
        PathError::Entry {
            entry: entry.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T, E = PathError> = std::result::Result<T, E>;
