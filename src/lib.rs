//! Context-scoped structured logging.
//!
//! A unit of work binds a [`LogContext`]; every log call inside it, however
//! deeply nested, emits one JSON line carrying that context's session id,
//! category, tags and metadata.

pub mod config;
pub mod context;
pub mod emit;
pub mod logger;
pub mod record;
pub mod scope;

pub use context::{create_context, ContextData, LogContext};
pub use emit::{EmitError, Emitter};
pub use logger::{debug, default_logger, error, info, warn, Logger};
pub use record::{ErrorArg, Level, LogArg, LogRecord, RecordAssembler};
pub use scope::{current_context, run_with_context, run_with_context_async, FutureExt, Scoped};
