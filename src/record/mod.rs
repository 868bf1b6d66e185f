//! Log record assembly.
//!
//! # Data Flow
//! ```text
//! log call (level, [LogArg])
//!     → assembler.rs reads the active LogContext
//!     → context fields copied into Details (empty ones left out)
//!     → args.rs extraction yields message + optional stack
//!     → LogRecord handed to the emitter
//! ```
//!
//! # Design Decisions
//! - Errors are marked explicitly at the call site (`LogArg::Error`)
//! - Tags and metadata keys come out in ascending order
//! - Absent fields are `None` and skipped on serialization, never null

pub mod args;
pub mod assembler;
pub mod types;

pub use args::{ErrorArg, LogArg};
pub use assembler::RecordAssembler;
pub use types::{Details, Level, LogRecord};
