//! In-memory writer for testing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Writer;

/// In-memory byte sink.
///
/// Clones share the same buffer, so a test can keep one handle to inspect
/// what a producer wrote through another. An optional capacity limit makes
/// the sink behave like an exhausted medium: writes past the limit are cut
/// short.
#[derive(Debug, Clone)]
pub struct InMemoryWriter {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
    limit: Option<usize>,
}

impl InMemoryWriter {
    /// Create a new unbounded in-memory writer.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
            limit: None,
        }
    }

    /// Create a writer that accepts at most `limit` bytes in total.
    pub fn with_limit(id: impl Into<String>, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(id)
        }
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Consume the sink and return its contents.
    pub fn into_inner(self) -> Vec<u8> {
        Arc::try_unwrap(self.buf)
            .map(|m| m.into_inner().unwrap_or_else(PoisonError::into_inner))
            .unwrap_or_else(|arc| arc.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Writer for InMemoryWriter {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&mut self, data: &[u8]) -> usize {
        let mut guard = self.lock();
        let room = match self.limit {
            Some(limit) => limit.saturating_sub(guard.len()),
            None => data.len(),
        };
        let n = data.len().min(room);
        guard.extend_from_slice(&data[..n]);
        n
    }
}
