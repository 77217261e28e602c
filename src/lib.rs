//! # plainio
//!
//! Sequential byte-stream writers with scoped release of the backing resource.
//!
//! ## Overview
//!
//! plainio provides:
//! - **Writer capability**: The `Writer` trait, a minimal "accept bytes in order" sink
//! - **File-backed writer**: `FileWriter` opens a file at construction and closes it on drop
//! - **fopen-style modes**: `"wb"`, `"ab"`, `"r+b"`, `"wx"`, ... parsed and validated up front
//! - **Typed failures**: Construction either succeeds or returns `OpenFailure`
//! - **Configuration**: Describe a writer with `WriterSpec` in YAML/JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plainio::{FileWriter, Writer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut out = FileWriter::open("out.bin", "wb")?;
//!     out.write(b"ABC");
//!     out.write(b"DE");
//!     // File is flushed and closed here.
//!     drop(out);
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! - `Writer::write` returns the number of bytes accepted. A short count is
//!   not an error; callers that care compare it with the buffer length, or
//!   use `Writer::write_exact` to get a `ShortWrite`.
//! - Nothing is retried internally.
//! - Dropping a `FileWriter` flushes and closes the handle exactly once. A
//!   failure at that point is logged through the `log` facade and otherwise
//!   discarded. Call `FileWriter::finish` to receive it instead.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

pub mod config;
pub mod error;
pub mod io;
pub mod mode;

// Re-exports for convenience
pub use config::{FileExistsPolicy, WriterSpec};
pub use error::{ModeError, OpenCause, OpenFailure, ShortWrite};
pub use io::{FileWriter, InMemoryWriter, Writer};
pub use mode::{Access, OpenMode, Translation};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::WriterDiagnostic;
