//! The in-memory record store and its pagination contract.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::Config;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::generate::{generate_detail, generate_records};
use crate::model::{Level, LogDetail, LogRecord};

/// Level predicate applied before paging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelFilter {
    /// Every record matches.
    #[default]
    All,
    /// Only records with this level match.
    Only(Level),
    /// No record matches, e.g. a level name the corpus never uses.
    Nothing,
}

impl LevelFilter {
    pub fn matches(&self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(l) => *l == level,
            LevelFilter::Nothing => false,
        }
    }
}

impl From<Option<Level>> for LevelFilter {
    fn from(level: Option<Level>) -> Self {
        level.map_or(LevelFilter::All, LevelFilter::Only)
    }
}

/// Parameters of a single list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Where the page starts in the filtered view. `None` starts at the top.
    pub cursor: Option<Cursor>,
    /// Maximum number of records on the page.
    pub limit: usize,
    /// Which records make up the filtered view.
    pub level: LevelFilter,
}

impl ListQuery {
    /// Creates an unfiltered query for the first page.
    pub fn new(limit: usize) -> Self {
        Self {
            cursor: None,
            limit,
            level: LevelFilter::All,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = LevelFilter::Only(level);
        self
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

/// One page of a list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    /// Records on this page, in store order.
    pub items: Vec<&'a LogRecord>,
    /// Cursor for the following page, or `None` on the last page.
    pub next_cursor: Option<Cursor>,
    /// Size of the whole filtered view, not of this page.
    pub total: usize,
}

/// Ordered, immutable collection of generated log records.
///
/// Records are kept in id order. The store is built once and then only read,
/// so it can be shared between request handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    /// Generates a store according to `config`.
    ///
    /// The corpus covers the `config.window` leading up to now.
    pub fn generate(config: &Config) -> Self {
        let start = Utc::now() - config.window;
        let records = match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_records(config.record_count, start, config.window, &mut rng)
            }
            None => generate_records(config.record_count, start, config.window, &mut rand::rng()),
        };
        Self { records }
    }

    /// Wraps pre-built records. They are served in the order given.
    pub fn from_records(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Returns the records matching `level`, in store order.
    pub fn filtered(&self, level: impl Into<LevelFilter>) -> Vec<&LogRecord> {
        let filter = level.into();
        self.records
            .iter()
            .filter(|r| filter.matches(r.level))
            .collect()
    }

    /// Answers a list query.
    ///
    /// The filtered view is rebuilt on every call and the page is the slice
    /// `[offset, offset + limit)` of it, clamped to its length. A cursor past
    /// the end yields an empty page. `next_cursor` is set only while records
    /// remain after this page, so following it from the first page visits
    /// every record of the view exactly once. A zero limit yields an empty
    /// page whose `next_cursor` points back at the same offset.
    pub fn list(&self, query: &ListQuery) -> Page<'_> {
        let view = self.filtered(query.level);
        let total = view.len();
        let start = query.cursor.map(|c| c.offset()).unwrap_or(0);
        let end = start.saturating_add(query.limit);

        let items = if start < total {
            view[start..end.min(total)].to_vec()
        } else {
            Vec::new()
        };
        let next_cursor = (end < total).then(|| Cursor::at(end));

        Page {
            items,
            next_cursor,
            total,
        }
    }

    /// Finds a record by id with a linear scan.
    pub fn get(&self, id: &str) -> Result<&LogRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Finds a record by id and merges it with freshly drawn detail fields.
    pub fn detail<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Result<LogDetail> {
        let record = self.get(id)?;
        Ok(generate_detail(record, rng))
    }
}
