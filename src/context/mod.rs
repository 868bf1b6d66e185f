//! Logging context subsystem.
//!
//! # Data Flow
//! ```text
//! ContextData (plain value: tags, category, metadata, session id)
//!     → builder.rs wraps one snapshot in a LogContext
//!     → with_* / without_* mutators copy the snapshot, apply a delta
//!     → new LogContext returned, receiver untouched
//!     → scope binding / record assembly read it, never write it
//! ```
//!
//! # Design Decisions
//! - Snapshots live behind an `Arc`, so clones are cheap and shareable
//!   across threads without locks
//! - Ordered collections (`BTreeSet`, `BTreeMap`) keep output deterministic
//! - Mutators are total: empty input is a no-op, never an error

pub mod builder;
pub mod data;

pub use builder::{create_context, LogContext};
pub use data::ContextData;
