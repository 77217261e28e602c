//! File-backed writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{OpenCause, OpenFailure};
use crate::mode::OpenMode;

use super::Writer;

/// Writer over a local file, opened at construction and closed on drop.
///
/// The handle is buffered and exclusively owned; it is never exposed. Drop
/// flushes the buffer once and closes the file exactly once. A flush failure
/// at that point cannot reach the caller and is only logged; use
/// [`FileWriter::finish`] to observe it. Bytes that could not be flushed are
/// discarded, never written on a second attempt.
#[derive(Debug)]
pub struct FileWriter {
    id: String,
    path: PathBuf,
    mode: OpenMode,
    // `None` only once released by `finish` or `Drop`.
    inner: Option<BufWriter<File>>,
    error: Option<io::Error>,
}

impl FileWriter {
    /// Open `path` with an fopen-style `mode` token such as `"wb"` or `"a+"`.
    ///
    /// The mode is validated before the file system is touched, so an
    /// invalid token never creates or truncates anything.
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<Self, OpenFailure> {
        let path = path.as_ref();
        check_path(path)?;
        let mode = mode.parse::<OpenMode>().map_err(|e| OpenFailure::new(path, e))?;
        Self::open_with(path, mode)
    }

    /// Open `path` with an already parsed mode.
    pub fn open_with(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self, OpenFailure> {
        let path = path.as_ref();
        check_path(path)?;

        let file = mode
            .options()
            .open(path)
            .map_err(|e| OpenFailure::new(path, e))?;
        log::debug!("opened plain file '{}' with mode '{}'", path.display(), mode);

        Ok(Self {
            id: path.to_string_lossy().into_owned(),
            path: path.to_path_buf(),
            mode,
            inner: Some(BufWriter::new(file)),
            error: None,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the mode the file was opened with.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// The most recent error that cut a write short, if any.
    ///
    /// Sticky: once set it is only replaced by a later failure.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Flush buffered bytes and close the file, reporting a flush failure.
    ///
    /// Dropping the writer does the same but swallows the error.
    pub fn finish(mut self) -> io::Result<()> {
        match self.inner.take() {
            Some(inner) => close_buffered(inner),
            None => Ok(()),
        }
    }

    fn record(&mut self, requested: usize, written: usize, err: io::Error) {
        log::debug!(
            "short write to '{}': {} of {} byte(s) accepted: {}",
            self.id,
            written,
            requested,
            err
        );
        self.error = Some(err);
    }
}

impl Writer for FileWriter {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        if !self.mode.is_writable() {
            let err = io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("file opened with mode '{}' is not writable", self.mode),
            );
            self.record(buf.len(), 0, err);
            return 0;
        }
        let Some(inner) = self.inner.as_mut() else {
            return 0;
        };

        let mut written = 0;
        let mut failure = None;
        while written < buf.len() {
            match inner.write(&buf[written..]) {
                Ok(0) => {
                    failure = Some(io::ErrorKind::WriteZero.into());
                    break;
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        if let Some(err) = failure {
            self.record(buf.len(), written, err);
        }
        written
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        if let Err(e) = close_buffered(inner) {
            log::warn!(
                "failed to flush plain file '{}' on close: {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Flush `inner` once, then release the sink.
///
/// Whatever the flush left in the buffer is dropped without touching the
/// sink again; `BufWriter`'s own drop would otherwise retry the write.
pub(crate) fn close_buffered<W: Write>(mut inner: BufWriter<W>) -> io::Result<()> {
    let res = inner.flush();
    let (sink, _unflushed) = inner.into_parts();
    drop(sink);
    res
}

fn check_path(path: &Path) -> Result<(), OpenFailure> {
    if path.as_os_str().is_empty() {
        return Err(OpenFailure::new(path, OpenCause::EmptyPath));
    }
    Ok(())
}
