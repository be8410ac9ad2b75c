//! HTTP request types for the log server.

use serde::Deserialize;

use crate::{Cursor, Level, LevelFilter, ListQuery, Result};

/// Query parameters for `GET /logs`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Opaque cursor from a previous page's `nextCursor`.
    pub cursor: Option<String>,
    /// Maximum number of records to return.
    pub limit: Option<usize>,
    /// Only return records of this level.
    pub level: Option<String>,
}

impl ListParams {
    /// Validate the parameters and turn them into a store query.
    ///
    /// Empty `cursor` and `level` values are treated as absent. A level name
    /// the corpus never uses filters out every record rather than failing.
    pub fn to_query(&self, default_limit: usize) -> Result<ListQuery> {
        let limit = self.limit.unwrap_or(default_limit);

        let cursor = match self.cursor.as_deref() {
            Some(token) if !token.is_empty() => Some(Cursor::decode(token)?),
            _ => None,
        };

        let level = match self.level.as_deref() {
            Some(level) if !level.is_empty() => level
                .parse::<Level>()
                .map_or(LevelFilter::Nothing, LevelFilter::Only),
            _ => LevelFilter::All,
        };

        Ok(ListQuery {
            cursor,
            limit,
            level,
        })
    }
}
