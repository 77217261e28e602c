//! Writer capability trait definition.

use std::fmt::Debug;

use crate::error::ShortWrite;

/// Trait for sequential byte sinks.
///
/// Implementors accept bytes in call order and release whatever they hold
/// in `Drop`, whether or not an earlier write failed.
pub trait Writer: Send + Debug {
    /// Returns an identifier for this sink.
    ///
    /// This is used for error messages and logging.
    /// Convention: file path for files.
    fn id(&self) -> &str;

    /// Write `buf` and return how many bytes the sink accepted.
    ///
    /// The count may be less than `buf.len()` when the sink is exhausted or
    /// the underlying medium fails. That is not an error; callers decide
    /// whether to retry the remainder. An empty `buf` is a no-op returning 0.
    fn write(&mut self, buf: &[u8]) -> usize;

    /// Write `buf` with a single `write` call and treat a short count as
    /// an error. Nothing is retried.
    fn write_exact(&mut self, buf: &[u8]) -> Result<usize, ShortWrite> {
        let written = self.write(buf);
        if written < buf.len() {
            return Err(ShortWrite {
                requested: buf.len(),
                written,
            });
        }
        Ok(written)
    }
}

impl<W: Writer + ?Sized> Writer for &mut W {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        (**self).write(buf)
    }
}

impl<W: Writer + ?Sized> Writer for Box<W> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        (**self).write(buf)
    }
}
