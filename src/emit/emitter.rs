//! JSON line writer.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::emit::error::EmitError;
use crate::record::LogRecord;

type SharedWriter = Mutex<Box<dyn Write + Send>>;

/// Writes records to an output stream, one JSON object per line.
pub struct Emitter {
    out: SharedWriter,
    diagnostics: SharedWriter,
}

impl Emitter {
    /// Emit to `out`, report failures to `diagnostics`.
    pub fn new(out: impl Write + Send + 'static, diagnostics: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            diagnostics: Mutex::new(Box::new(diagnostics)),
        }
    }

    /// Records to stdout, diagnostics to stderr.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Write `record`. Failures are reported on the diagnostic stream and
    /// the record is dropped.
    pub fn emit(&self, record: &LogRecord) {
        if let Err(e) = self.try_emit(record) {
            self.report(&e);
        }
    }

    /// Write any serializable value as one line, returning failures.
    pub fn try_emit<T: Serialize + ?Sized>(&self, record: &T) -> Result<(), EmitError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(&line)?;
        out.flush()?;
        Ok(())
    }

    fn report(&self, err: &EmitError) {
        tracing::debug!(error = %err, "log record dropped");
        let mut diagnostics = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(diagnostics, "{err}");
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").finish_non_exhaustive()
    }
}
