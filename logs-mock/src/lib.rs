//! Logs Mock - a log-query service over a synthetic, in-memory corpus.
//!
//! The service exists to exercise a client's pagination and prefetch logic
//! against a backend with a stable shape. A fixed number of log records is
//! generated once at startup and then served read-only.
//!
//! # Architecture
//!
//! A [`LogStore`] owns the generated records in id order. Queries never
//! mutate it, so the HTTP layer shares a single `Arc<LogStore>` across all
//! request handlers without locking.
//!
//! # Key Concepts
//!
//! - **LogStore**: The ordered, immutable record collection. Answers list
//!   queries and id lookups.
//! - **Filtered view**: The subsequence of the store matching the request's
//!   level filter (or the whole store when no filter is given).
//! - **Cursor**: An opaque token encoding the offset of the next page within
//!   the filtered view. A cursor is only meaningful for the filter that
//!   produced it.
//!
//! # Example
//!
//! ```
//! use logs_mock::{Config, ListQuery, Level, LogStore};
//!
//! let store = LogStore::generate(&Config {
//!     record_count: 1_000,
//!     seed: Some(7),
//!     ..Default::default()
//! });
//!
//! let mut query = ListQuery::new(100).with_level(Level::Error);
//! let mut seen = 0;
//! loop {
//!     let page = store.list(&query);
//!     seen += page.items.len();
//!     match page.next_cursor {
//!         Some(cursor) => query.cursor = Some(cursor),
//!         None => break,
//!     }
//! }
//! assert!(seen <= 1_000);
//! ```

mod config;
mod cursor;
mod error;
mod generate;
mod model;
#[cfg(feature = "http-server")]
pub mod server;
mod store;

pub use config::{Config, DEFAULT_PAGE_LIMIT, DEFAULT_RECORD_COUNT};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use generate::{MESSAGES, SERVICES, generate_detail, generate_records};
pub use model::{Level, LogDetail, LogRecord, RequestMetadata};
pub use store::{LevelFilter, ListQuery, LogStore, Page};
