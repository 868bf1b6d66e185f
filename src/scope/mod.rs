//! Scope binding subsystem.
//!
//! # Data Flow
//! ```text
//! Synchronous unit of work:
//!     run_with_context(ctx, f)
//!     → stack.rs pushes ctx on the thread's binding stack
//!     → f runs; current_context() sees ctx
//!     → guard drop pops back to the previous depth (also on panic)
//!
//! Asynchronous unit of work:
//!     fut.with_log_context(ctx)
//!     → future.rs pushes ctx on entry to every poll, pops on exit
//!     → binding follows the task across .await and worker threads
//! ```
//!
//! # Design Decisions
//! - One binding stack per thread; threads never see each other's bindings
//! - Async bindings exist only while their future is polled, so tasks
//!   interleaved on one worker stay isolated
//! - Retrieval is total: no binding means an empty context

pub mod future;
pub mod stack;

pub use future::{run_with_context_async, FutureExt, Scoped};
pub use stack::{current_context, run_with_context};
