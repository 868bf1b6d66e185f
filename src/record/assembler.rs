//! Merge the active context and call arguments into a record.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::context::LogContext;
use crate::record::args::{extract_message, LogArg};
use crate::record::types::{Details, Level, LogRecord};

/// Builds [`LogRecord`]s. Holds only the clock used for timestamps.
#[derive(Debug, Clone, Copy)]
pub struct RecordAssembler {
    clock: fn() -> DateTime<Utc>,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    /// Use `clock` instead of the system clock.
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }

    pub fn assemble(&self, level: Level, context: &LogContext, args: &[LogArg]) -> LogRecord {
        self.assemble_at(level, context, args, (self.clock)())
    }

    pub fn assemble_at(
        &self,
        level: Level,
        context: &LogContext,
        args: &[LogArg],
        at: DateTime<Utc>,
    ) -> LogRecord {
        let (message, stack) = extract_message(args);

        let tags = (!context.tags().is_empty())
            .then(|| context.tags().iter().cloned().collect::<Vec<_>>());
        let metadata = (!context.metadata().is_empty()).then(|| context.metadata().clone());

        LogRecord {
            level,
            message,
            session_id: non_empty(context.session_id()),
            details: Details {
                tags,
                category: non_empty(context.category()),
                metadata,
                stack,
                timestamp: format_timestamp(at),
            },
        }
    }
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// RFC3339 in UTC with second precision, e.g. `2026-10-16T09:30:00Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
