//! Core data types for Logs Mock.
//!
//! Records serialize to the JSON shape served by the list endpoint; the
//! detail view flattens a record together with per-request supplementary
//! fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// All levels, in the order used for uniform sampling.
    pub const ALL: [Level; 3] = [Level::Info, Level::Warn, Level::Error];

    /// Returns the wire name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
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

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            other => Err(Error::InvalidInput(format!(
                "unknown level '{}', expected one of info, warn, error",
                other
            ))),
        }
    }
}

/// A single generated log record, as returned by the list endpoint.
///
/// Records are created once at startup and never modified. The `id` is the
/// 1-based generation index rendered as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub service: String,
    pub trace_id: String,
    pub duration_ms: u32,
}

/// A record merged with supplementary fields for the detail endpoint.
///
/// The supplementary fields are regenerated on every lookup, so two lookups
/// of the same id agree on the record fields only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDetail {
    #[serde(flatten)]
    pub record: LogRecord,
    pub stack_trace: String,
    pub user_id: String,
    pub request_id: String,
    pub metadata: RequestMetadata,
}

/// Client metadata attached to a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMetadata {
    pub ip: String,
    pub user_agent: String,
}
