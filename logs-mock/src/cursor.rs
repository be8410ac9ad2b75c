//! Pagination cursors.
//!
//! A cursor is the start offset of the next page within a filtered view,
//! carried on the wire as standard base64 of the offset's decimal digits.
//! For example, offset `100` travels as `MTAw`.
//!
//! Cursors are positional. One issued under a level filter and replayed
//! under a different filter is reinterpreted against the new view and may
//! skip or repeat records; it is never rejected for that reason.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Resume position for a paginated list query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// Creates a cursor pointing at `offset` in the filtered view.
    pub fn at(offset: usize) -> Self {
        Cursor(offset)
    }

    /// Offset into the filtered view where the page starts.
    pub fn offset(&self) -> usize {
        self.0
    }

    /// Encodes the cursor into its opaque wire token.
    pub fn encode(&self) -> String {
        STANDARD.encode(self.0.to_string())
    }

    /// Decodes a wire token produced by [`Cursor::encode`].
    ///
    /// Fails with [`Error::InvalidCursor`] when the token is not valid base64
    /// or the decoded payload is not a non-negative decimal integer.
    pub fn decode(token: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|e| Error::InvalidCursor(format!("not base64: {}", e)))?;
        let payload = std::str::from_utf8(&bytes)
            .map_err(|_| Error::InvalidCursor("payload is not UTF-8".to_string()))?;
        let offset = payload
            .parse::<usize>()
            .map_err(|e| Error::InvalidCursor(format!("payload is not an offset: {}", e)))?;
        Ok(Cursor(offset))
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Cursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Cursor::decode(s)
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
