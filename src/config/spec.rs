//! File writer specification.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ModeError, OpenFailure};
use crate::io::FileWriter;
use crate::mode::OpenMode;

/// Policy for handling existing output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExistsPolicy {
    /// Overwrite existing files
    Overwrite,
    /// Append to existing files
    Append,
    #[default]
    /// Return an error if file exists
    Error,
}

impl FileExistsPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Some(FileExistsPolicy::Overwrite),
            "append" => Some(FileExistsPolicy::Append),
            "error" => Some(FileExistsPolicy::Error),
            _ => None,
        }
    }

    /// The open mode implementing this policy.
    pub fn mode(self) -> OpenMode {
        match self {
            FileExistsPolicy::Overwrite => OpenMode::overwrite(),
            FileExistsPolicy::Append => OpenMode::append(),
            FileExistsPolicy::Error => OpenMode::create_new(),
        }
    }
}

/// Specification for a single file writer.
///
/// An explicit `mode` token takes precedence over `file_exists_policy`.
/// With neither, the file is truncated or created (`"wb"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WriterSpec {
    /// Target file path
    pub path: PathBuf,
    /// fopen-style mode token: "wb", "ab", "r+b", etc.
    #[serde(default)]
    pub mode: Option<String>,
    /// File exists policy: "overwrite", "append", "error"
    #[serde(default)]
    pub file_exists_policy: Option<FileExistsPolicy>,
}

impl WriterSpec {
    /// Create a new writer specification for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: None,
            file_exists_policy: None,
        }
    }

    /// Set the explicit mode token.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the file exists policy.
    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = Some(policy);
        self
    }

    /// Resolve the mode this spec will open with.
    pub fn resolved_mode(&self) -> Result<OpenMode, ModeError> {
        match &self.mode {
            Some(token) => token.parse(),
            None => Ok(self.policy_mode()),
        }
    }

    fn policy_mode(&self) -> OpenMode {
        self.file_exists_policy
            .map_or_else(OpenMode::overwrite, FileExistsPolicy::mode)
    }

    /// Open the described file.
    ///
    /// Fails the same way `FileWriter::open` does: the path is checked first,
    /// then the mode.
    pub fn open(&self) -> Result<FileWriter, OpenFailure> {
        match &self.mode {
            Some(token) => FileWriter::open(&self.path, token),
            None => FileWriter::open_with(&self.path, self.policy_mode()),
        }
    }
}
