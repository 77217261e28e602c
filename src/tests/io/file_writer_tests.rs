//! Tests for the file-backed writer.

use crate::error::{ModeError, OpenCause, OpenFailure};
use crate::{FileWriter, OpenMode, Writer};
use std::fs;
use std::io;
use std::path::Path;

#[test]
fn writes_are_concatenated_in_call_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    {
        let mut w = FileWriter::open(&path, "wb").unwrap();
        assert_eq!(w.write(b"ABC"), 3);
        assert_eq!(w.write(b"DE"), 2);
    }

    assert_eq!(fs::read(&path).unwrap(), b"ABCDE".to_vec());
}

#[test]
fn many_writes_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seq.bin");

    let chunks: Vec<Vec<u8>> = (0u8..50).map(|i| vec![i; i as usize + 1]).collect();
    {
        let mut w = FileWriter::open(&path, "wb").unwrap();
        for chunk in &chunks {
            assert_eq!(w.write(chunk), chunk.len());
        }
    }

    assert_eq!(fs::read(&path).unwrap(), chunks.concat());
}

#[test]
fn zero_length_write_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");
    fs::write(&path, b"abc").unwrap();

    {
        let mut w = FileWriter::open(&path, "ab").unwrap();
        assert_eq!(w.write(&[]), 0);
        assert!(w.error().is_none());
    }

    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());
}

#[test]
fn drop_without_writes_leaves_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.bin");

    let w = FileWriter::open(&path, "wb").unwrap();
    drop(w);

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn truncate_mode_discards_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"previous content").unwrap();

    {
        let mut w = FileWriter::open(&path, "w").unwrap();
        w.write(b"new");
    }

    assert_eq!(fs::read(&path).unwrap(), b"new".to_vec());
}

#[test]
fn append_mode_writes_after_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    fs::write(&path, b"abc").unwrap();

    {
        let mut w = FileWriter::open(&path, "a").unwrap();
        w.write(b"def");
    }

    assert_eq!(fs::read(&path).unwrap(), b"abcdef".to_vec());
}

#[test]
fn read_update_mode_overwrites_from_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("greeting.txt");
    fs::write(&path, b"hello").unwrap();

    {
        let mut w = FileWriter::open(&path, "r+b").unwrap();
        assert_eq!(w.write(b"J"), 1);
    }

    assert_eq!(fs::read(&path).unwrap(), b"Jello".to_vec());
}

#[test]
fn read_only_mode_accepts_no_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    fs::write(&path, b"data").unwrap();

    {
        let mut w = FileWriter::open(&path, "r").unwrap();
        assert_eq!(w.write(b"xyz"), 0);
        let err = w.error().expect("sticky error is set");
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    assert_eq!(fs::read(&path).unwrap(), b"data".to_vec());
}

#[test]
fn missing_parent_directory_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.bin");

    let err = FileWriter::open(&path, "wb").unwrap_err();

    assert_eq!(err.path(), path.as_path());
    assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    assert!(!path.exists());
}

#[test]
fn read_mode_on_missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = FileWriter::open(&path, "r+").unwrap_err();

    assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    assert!(!path.exists());
}

#[test]
fn exclusive_mode_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taken.bin");
    fs::write(&path, b"keep me").unwrap();

    let err = FileWriter::open(&path, "wbx").unwrap_err();

    assert_eq!(err.io_kind(), Some(io::ErrorKind::AlreadyExists));
    assert_eq!(fs::read(&path).unwrap(), b"keep me".to_vec());
}

#[test]
fn invalid_mode_leaves_existing_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");
    fs::write(&path, b"original").unwrap();

    let err = FileWriter::open(&path, "wq").unwrap_err();

    assert!(matches!(
        err.cause,
        OpenCause::Mode(ModeError::UnknownFlag('q'))
    ));
    assert_eq!(fs::read(&path).unwrap(), b"original".to_vec());
}

#[test]
fn invalid_mode_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.bin");

    let err = FileWriter::open(&path, "write-binary-truncate").unwrap_err();

    assert!(matches!(err.cause, OpenCause::Mode(_)));
    assert_eq!(err.path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn empty_path_is_rejected() {
    let err = FileWriter::open("", "wb").unwrap_err();

    assert!(matches!(err.cause, OpenCause::EmptyPath));
    assert_eq!(err.path(), Path::new(""));
}

#[test]
fn open_with_parsed_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let w = FileWriter::open_with(&path, OpenMode::create_new()).unwrap();

    assert_eq!(w.mode(), OpenMode::create_new());
    assert_eq!(w.path(), path.as_path());
    assert_eq!(w.id(), path.to_string_lossy());
}

#[test]
fn finish_flushes_and_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let mut w = FileWriter::open(&path, "wb").unwrap();
    w.write(b"payload");
    w.finish().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"payload".to_vec());
}

#[test]
fn handle_is_released_on_early_return() {
    fn produce(path: &Path) -> Result<(), OpenFailure> {
        let mut w = FileWriter::open(path, "wb")?;
        w.write(b"partial");
        let _second = FileWriter::open(path.with_file_name("missing/x"), "wb")?;
        w.write(b" never written");
        Ok(())
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    assert!(produce(&path).is_err());
    assert_eq!(fs::read(&path).unwrap(), b"partial".to_vec());
}

#[test]
fn file_writer_as_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boxed.bin");

    {
        let mut w: Box<dyn Writer> = Box::new(FileWriter::open(&path, "wb").unwrap());
        assert_eq!(w.write(b"boxed"), 5);
        assert_eq!(w.write_exact(b"!"), Ok(1));
    }

    assert_eq!(fs::read(&path).unwrap(), b"boxed!".to_vec());
}

/// A device whose every write fails, counting the attempts.
struct FullDevice {
    attempts: std::rc::Rc<std::cell::Cell<usize>>,
}

impl io::Write for FullDevice {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts.set(self.attempts.get() + 1);
        Err(io::ErrorKind::StorageFull.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_close_flush_is_not_retried() {
    let attempts = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut buffered = io::BufWriter::new(FullDevice {
        attempts: attempts.clone(),
    });
    io::Write::write_all(&mut buffered, b"ABCDE").unwrap();
    assert_eq!(attempts.get(), 0);

    let err = crate::io::close_buffered(buffered).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    // The writer is gone and the device saw a single write.
    assert_eq!(attempts.get(), 1);
}

#[cfg(target_os = "linux")]
#[test]
fn drop_on_full_device_swallows_flush_error() {
    let mut w = FileWriter::open("/dev/full", "ab").unwrap();

    assert_eq!(w.write(b"ABCDE"), 5);
    assert!(w.error().is_none());
    drop(w);
}

#[cfg(target_os = "linux")]
#[test]
fn finish_on_full_device_reports_storage_full() {
    let mut w = FileWriter::open("/dev/full", "ab").unwrap();
    w.write(b"ABCDE");

    let err = w.finish().unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::StorageFull);
}

#[cfg(target_os = "linux")]
#[test]
fn oversized_write_on_full_device_is_short() {
    let mut w = FileWriter::open("/dev/full", "ab").unwrap();
    let buf = vec![0x5Au8; 20000];

    let written = w.write(&buf);

    assert!(written < buf.len());
    assert_eq!(
        w.error().map(|e| e.kind()),
        Some(io::ErrorKind::StorageFull)
    );
    assert_eq!(w.write_exact(&buf).unwrap_err().requested, buf.len());
}
