//! Record types and their wire representation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully assembled log event.
///
/// Field order here is the key order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub level: Level,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    pub details: Details,
}

/// Context and diagnostic fields of a record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Details {
    /// Sorted ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,

    /// RFC3339, UTC.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(level: Level) -> LogRecord {
        LogRecord {
            level,
            message: None,
            session_id: None,
            details: Details {
                tags: None,
                category: None,
                metadata: None,
                stack: None,
                timestamp: "2026-10-16T09:30:00Z".to_string(),
            },
        }
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let json = serde_json::to_string(&bare(Level::Warn)).unwrap();
        assert_eq!(
            json,
            r#"{"level":"warn","details":{"timestamp":"2026-10-16T09:30:00Z"}}"#
        );
    }

    #[test]
    fn test_key_order_is_stable() {
        let mut record = bare(Level::Info);
        record.message = Some("go".into());
        record.session_id = Some("req-1".into());
        record.details.tags = Some(vec!["a".into(), "b".into()]);
        record.details.category = Some("api".into());
        record.details.metadata = Some(BTreeMap::from([("k".to_string(), "v".to_string())]));
        record.details.stack = Some("trace".into());

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"level":"info","message":"go","sessionId":"req-1","details":"#,
                r#"{"tags":["a","b"],"category":"api","metadata":{"k":"v"},"#,
                r#""stack":"trace","timestamp":"2026-10-16T09:30:00Z"}}"#
            )
        );
    }

    #[test]
    fn test_level_names() {
        for (level, name) in [
            (Level::Debug, "debug"),
            (Level::Info, "info"),
            (Level::Warn, "warn"),
            (Level::Error, "error"),
        ] {
            assert_eq!(level.to_string(), name);
            assert_eq!(serde_json::to_value(level).unwrap(), name);
        }
    }
}
