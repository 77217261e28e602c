//! Configuration types for file writers.
//!
//! This module provides:
//! - `WriterSpec`: Serde-deserializable description of a file writer
//! - `FileExistsPolicy`: Shorthand for the common output modes

mod spec;

pub use spec::{FileExistsPolicy, WriterSpec};
