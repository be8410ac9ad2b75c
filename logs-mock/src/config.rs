//! Configuration for corpus generation.

use chrono::TimeDelta;

/// Number of records generated when no count is configured.
pub const DEFAULT_RECORD_COUNT: usize = 10_000;

/// Page size used by list queries that do not specify a limit.
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Configuration for generating a [`LogStore`](crate::LogStore).
///
/// # Example
///
/// ```
/// use logs_mock::{Config, LogStore};
///
/// let config = Config {
///     record_count: 500,
///     seed: Some(42),
///     ..Default::default()
/// };
/// let store = LogStore::generate(&config);
/// assert_eq!(store.len(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of records to generate.
    pub record_count: usize,

    /// Seed for the record generator.
    ///
    /// When `None` (the default), every process start produces a different
    /// corpus. When set, levels, messages, services, trace ids and durations
    /// are reproducible. Timestamps are always anchored to the time of
    /// generation.
    pub seed: Option<u64>,

    /// Time span covered by the corpus.
    ///
    /// The first record is stamped `window` before generation time and the
    /// remaining records are spaced evenly after it. With the default count
    /// and window this is one record every 8.64 seconds.
    pub window: TimeDelta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: None,
            window: TimeDelta::hours(24),
        }
    }
}
