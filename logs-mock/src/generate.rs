//! Synthetic record generation.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::{Level, LogDetail, LogRecord, RequestMetadata};

/// Services a generated record may come from.
pub const SERVICES: [&str; 6] = ["api", "auth", "db", "cache", "worker", "scheduler"];

/// Messages a generated record may carry.
pub const MESSAGES: [&str; 10] = [
    "Request processed successfully",
    "Database connection established",
    "Cache miss, fetching from database",
    "User authentication successful",
    "API rate limit warning",
    "Slow query detected",
    "Memory usage high",
    "Request timeout",
    "Invalid request payload",
    "Service health check passed",
];

const STACK_TRACE: &str = "  at handleRequest (server.js:42:15)\n  at processTicksAndRejections (internal/process/task_queues.js:93:5)";

const USER_AGENT: &str = "Mozilla/5.0...";

/// Uniform draw from one of the fixed, non-empty pools above.
fn choose<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> &'a T {
    pool.choose(rng).expect("sampling pools are non-empty")
}

/// Generates `count` records spread evenly over `window`, starting at `start`.
///
/// Record `i` gets id `i + 1` and timestamp `start + window * i / count`.
/// All other fields are drawn independently and uniformly from `rng`.
pub fn generate_records<R: Rng + ?Sized>(
    count: usize,
    start: DateTime<Utc>,
    window: TimeDelta,
    rng: &mut R,
) -> Vec<LogRecord> {
    let window_ms = i128::from(window.num_milliseconds());
    let count_divisor = count.max(1) as i128;

    (0..count)
        .map(|index| {
            let offset_ms = (window_ms * index as i128 / count_divisor) as i64;
            LogRecord {
                id: (index + 1).to_string(),
                timestamp: start + TimeDelta::milliseconds(offset_ms),
                level: *choose(&Level::ALL, rng),
                message: choose(&MESSAGES, rng).to_string(),
                service: choose(&SERVICES, rng).to_string(),
                trace_id: format!("trace-{}", rng.random_range(1000..=9999)),
                duration_ms: rng.random_range(1..=500),
            }
        })
        .collect()
}

/// Merges `record` with freshly drawn supplementary detail fields.
pub fn generate_detail<R: Rng + ?Sized>(record: &LogRecord, rng: &mut R) -> LogDetail {
    LogDetail {
        record: record.clone(),
        stack_trace: STACK_TRACE.to_string(),
        user_id: format!("user-{}", rng.random_range(1..=100)),
        request_id: format!("req-{}", rng.random_range(10000..=99999)),
        metadata: RequestMetadata {
            ip: format!("192.168.1.{}", rng.random_range(1..=255)),
            user_agent: USER_AGENT.to_string(),
        },
    }
}
