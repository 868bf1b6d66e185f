//! Seed configuration.
//!
//! # Data Flow
//! ```text
//! seed file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → SeedConfig (validated, immutable)
//!     → base_context() → LogContext every unit of work builds on
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so an empty file is a valid seed
//! - Validation reports all problems at once, not just the first
//! - Only the demo binary reads files; the library core takes values

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DiagnosticsConfig, SeedConfig};
pub use validation::{validate_config, ValidationError};
