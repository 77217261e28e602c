//! Error types for writer construction and caller-side write checks.
//!
//! This module provides:
//! - `OpenFailure`: The single way constructing a `FileWriter` can fail
//! - `OpenCause`: Why the open failed (empty path, bad mode, OS error)
//! - `ModeError`: A mode token that does not follow the fopen vocabulary
//! - `ShortWrite`: A write that accepted fewer bytes than requested

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A file could not be opened as a writer.
///
/// Carries the offending path. No writer instance exists when this is
/// returned, so there is nothing to release.
#[derive(Debug, Error)]
#[error("error opening plain file '{}' for writing", path.display())]
pub struct OpenFailure {
    /// Path that was requested
    pub path: PathBuf,
    /// The underlying cause
    #[source]
    pub cause: OpenCause,
}

impl OpenFailure {
    /// Create a new open failure for `path`.
    pub fn new(path: impl Into<PathBuf>, cause: impl Into<OpenCause>) -> Self {
        Self {
            path: path.into(),
            cause: cause.into(),
        }
    }

    /// Get the path that failed to open.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The OS error kind, if the failure came from the open call itself.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match &self.cause {
            OpenCause::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum OpenCause {
    #[error("path is empty")]
    EmptyPath,
    #[error(transparent)]
    Mode(#[from] ModeError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A mode token rejected before any file system access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("mode string is empty")]
    Empty,
    #[error("unknown access mode '{0}', expected 'r', 'w' or 'a'")]
    UnknownAccess(char),
    #[error("unsupported mode flag '{0}'")]
    UnknownFlag(char),
    #[error("mode flag '{0}' given more than once")]
    DuplicateFlag(char),
    #[error("binary ('b') and text ('t') flags are mutually exclusive")]
    ConflictingTranslation,
    /// `x` is only meaningful together with `w`
    #[error("exclusive flag 'x' requires write access ('w')")]
    ExclusiveWithoutWrite,
}

/// A write call that accepted fewer bytes than requested.
///
/// `Writer::write` never returns this; it reports short writes through its
/// count. Callers that need the check use `Writer::write_exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct ShortWrite {
    /// Number of bytes handed to the writer
    pub requested: usize,
    /// Number of bytes the writer accepted
    pub written: usize,
}

impl fmt::Display for ShortWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "short write: {} of {} byte(s) accepted",
            self.written, self.requested
        )
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
