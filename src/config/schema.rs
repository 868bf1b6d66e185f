//! Seed configuration schema.
//!
//! ```toml
//! [context]
//! category = "api"
//! tags = ["user-service"]
//! metadata = { region = "eu-west-1" }
//!
//! [diagnostics]
//! filter = "context_logger=debug"
//! ```

use serde::{Deserialize, Serialize};

use crate::context::{ContextData, LogContext};

/// Root of a seed file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Fields every unit of work starts from.
    pub context: ContextData,

    /// Internal diagnostics settings.
    pub diagnostics: DiagnosticsConfig,
}

impl SeedConfig {
    pub fn base_context(&self) -> LogContext {
        LogContext::from_data(&self.context)
    }
}

/// Settings for the crate's own `tracing` output (stderr).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            filter: "context_logger=info".to_string(),
        }
    }
}
