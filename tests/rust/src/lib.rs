//! Shared test helpers for the tracelog integration suite.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink capturing everything a subscriber writes.
///
/// Clone-friendly: all clones share the same buffer, so a test can hand one
/// clone to the subscriber and inspect another after emitting events.
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output as one UTF-8 string.
    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    /// Captured output parsed as one JSON record per line.
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.contents()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl<'a> MakeWriter<'a> for CaptureBuffer {
    type Writer = CaptureHandle;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureHandle {
            bytes: self.bytes.clone(),
        }
    }
}

/// Single writer handed to the subscriber for each write.
pub struct CaptureHandle {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A JSON subscriber matching the shape of the production file layer,
/// writing into `buffer`.
pub fn json_subscriber(buffer: &CaptureBuffer) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .with_writer(buffer.clone())
        .finish()
}
