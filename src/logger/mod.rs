//! Logger entry points.
//!
//! # Data Flow
//! ```text
//! info!("fetch failed", LogArg::error(&err))
//!     → Logger::log(level, args)
//!     → context: pinned one, else scope::current_context()
//!     → RecordAssembler → Emitter
//! ```
//!
//! # Design Decisions
//! - The process-wide default logger is created once, on first use, and
//!   never reconfigured
//! - A pinned context is the explicit alternative to scope binding

pub mod default;
mod macros;

use std::sync::Arc;

use crate::context::LogContext;
use crate::emit::Emitter;
use crate::record::{Level, LogArg, RecordAssembler};
use crate::scope::current_context;

pub use default::{debug, default_logger, error, info, warn};

/// Assembles and emits records for one output stream.
#[derive(Debug, Clone)]
pub struct Logger {
    emitter: Arc<Emitter>,
    assembler: RecordAssembler,
    context: Option<LogContext>,
}

impl Logger {
    /// A logger that resolves the bound context at every call.
    pub fn new(emitter: Arc<Emitter>) -> Self {
        Self {
            emitter,
            assembler: RecordAssembler::new(),
            context: None,
        }
    }

    /// A logger writing to stdout.
    pub fn stdout() -> Self {
        Self::new(Arc::new(Emitter::stdout()))
    }

    /// A copy of this logger that always uses `context`, ignoring scope
    /// bindings.
    pub fn with_context(&self, context: LogContext) -> Self {
        Self {
            context: Some(context),
            ..self.clone()
        }
    }

    pub fn with_assembler(mut self, assembler: RecordAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// The context the next call would use.
    pub fn context(&self) -> LogContext {
        self.context.clone().unwrap_or_else(current_context)
    }

    pub fn log(&self, level: Level, args: &[LogArg]) {
        let record = match &self.context {
            Some(context) => self.assembler.assemble(level, context, args),
            None => self.assembler.assemble(level, &current_context(), args),
        };
        self.emitter.emit(&record);
    }

    pub fn debug(&self, args: &[LogArg]) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: &[LogArg]) {
        self.log(Level::Info, args);
    }

    pub fn warn(&self, args: &[LogArg]) {
        self.log(Level::Warn, args);
    }

    pub fn error(&self, args: &[LogArg]) {
        self.log(Level::Error, args);
    }
}
