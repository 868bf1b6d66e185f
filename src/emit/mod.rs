//! Record emission.
//!
//! # Data Flow
//! ```text
//! LogRecord
//!     → serde_json, into a buffer (no lock held)
//!     → output lock taken, one write_all of the whole line
//!     → on failure: diagnostic line, record dropped
//! ```
//!
//! # Design Decisions
//! - One JSON object per line, newline-terminated
//! - Writers sit behind a mutex so concurrent lines never interleave
//! - The only place a failure is reported instead of returned

pub mod emitter;
pub mod error;

pub use emitter::Emitter;
pub use error::EmitError;
