//! Writer capability and its implementations.
//!
//! This module provides:
//! - `Writer`: Trait for sequential byte sinks
//! - `FileWriter`: Writer backed by a local file
//! - `InMemoryWriter`: In-memory writer for testing

mod file;
mod memory;
mod writer;

pub use file::FileWriter;
#[cfg(test)]
pub(crate) use file::close_buffered;
pub use memory::InMemoryWriter;
pub use writer::Writer;
