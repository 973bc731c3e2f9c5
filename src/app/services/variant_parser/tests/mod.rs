//! Test utilities for variant parser testing
//!
//! This module provides fixtures and a log capture helper shared across the
//! parser test modules.

use std::io::{BufRead, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;


/// Tab-delimited percentile content with one line of every kind
pub fn create_tab_percentile_content() -> String {
    [
        "# chrom\tstart\tend\tpercentile",
        "chr7\t1000\t2000\t0.95",
        "chr1\t10\t20",
        "chrX\t300\tbad\t0.9",
        "",
        "chr2\t400\t500\t0.1",
    ]
    .join("\n")
}

/// Comma-delimited score content from the end-to-end example
pub fn create_comma_score_content() -> String {
    "# comment\nchr1,100,200,0.5\nchrX,300,bad,0.9\n\nchr2,400,500,0.1\n".to_string()
}

/// Helper to create a temporary data folder holding `filename` with `content`
pub fn create_data_folder(filename: &str, content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(filename), content).unwrap();
    dir
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a debug-level subscriber and return its result with the captured output
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

/// Reader wrapper that raises a flag when it is dropped
pub struct DropTrackingReader<R> {
    inner: R,
    released: Arc<AtomicBool>,
}

impl<R: BufRead> DropTrackingReader<R> {
    pub fn new(inner: R) -> (Self, Arc<AtomicBool>) {
        let released = Arc::new(AtomicBool::new(false));
        let reader = Self {
            inner,
            released: Arc::clone(&released),
        };
        (reader, released)
    }
}

impl<R: BufRead> Read for DropTrackingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: BufRead> BufRead for DropTrackingReader<R> {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl<R> Drop for DropTrackingReader<R> {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Number of descriptors of this process currently open on `path`
#[cfg(target_os = "linux")]
pub fn open_descriptors_for(path: &std::path::Path) -> usize {
    let target = std::fs::canonicalize(path).unwrap();
    std::fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| std::fs::read_link(entry.path()).ok())
        .filter(|link| *link == target)
        .count()
}
