//! Shared utilities for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use context_logger::{Emitter, Logger};

/// An in-memory writer that can be read back after logging.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Every emitted line parsed as JSON.
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.text()
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is one JSON object"))
            .collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger writing records and diagnostics to separate captures.
#[allow(dead_code)]
pub fn capture_logger() -> (Logger, Capture, Capture) {
    let out = Capture::default();
    let diag = Capture::default();
    let logger = Logger::new(Arc::new(Emitter::new(out.clone(), diag.clone())));
    (logger, out, diag)
}
