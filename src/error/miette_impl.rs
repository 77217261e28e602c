//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{OpenCause, OpenFailure, ShortWrite};

/// A diagnostic wrapper for writer errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct WriterDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<OpenFailure> for WriterDiagnostic {
    fn from(e: OpenFailure) -> Self {
        let message = e.to_string();
        let help = match &e.cause {
            OpenCause::EmptyPath => "Pass a non-empty file path",
            OpenCause::Mode(_) => "Use an fopen-style mode such as \"wb\", \"ab\" or \"r+b\"",
            OpenCause::Io(_) => "Check that the parent directory exists and is writable",
        };
        WriterDiagnostic {
            message,
            source: Some(Box::new(e.cause)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<ShortWrite> for WriterDiagnostic {
    fn from(e: ShortWrite) -> Self {
        WriterDiagnostic {
            message: e.to_string(),
            source: None,
            help: Some("The sink may be full; retry the remaining bytes or give up".into()),
            severity: Severity::Warning,
        }
    }
}

impl From<OpenFailure> for miette::Report {
    fn from(e: OpenFailure) -> Self {
        miette::Report::new(WriterDiagnostic::from(e))
    }
}
