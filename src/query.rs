//! Query-string construction for collection fetches.
//!
//! Toshl list endpoints filter through query parameters (`from`, `to`,
//! `accounts`, `categories`, `page`, `per_page`, ...). [`QueryString`] collects
//! them, formats dates the way the API expects (`YYYY-MM-DD`) and
//! percent-encodes the result.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toshl_api::QueryString;
//!
//! let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//!
//! let query = QueryString::date_range(from, to)
//!     .unwrap()
//!     .param("per_page", "200")
//!     .build();
//!
//! assert_eq!(query, "from=2024-01-01&per_page=200&to=2024-01-31");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Date format used by the Toshl API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while building a query string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The start of a date range lies after its end.
    #[error("Invalid date range: 'from' ({from}) is after 'to' ({to}).")]
    InvertedDateRange {
        /// Requested start date.
        from: NaiveDate,
        /// Requested end date.
        to: NaiveDate,
    },
}

/// Builder for URL query strings.
///
/// Parameters are kept sorted by key; setting a key twice keeps the last
/// value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryString {
    params: BTreeMap<String, String>,
}

impl QueryString {
    /// Creates an empty query string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query with the mandatory `from`/`to` pair of the entries
    /// endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvertedDateRange`] if `from` is after `to`.
    pub fn date_range(from: NaiveDate, to: NaiveDate) -> Result<Self, QueryError> {
        if from > to {
            return Err(QueryError::InvertedDateRange { from, to });
        }

        Ok(Self::new().date("from", from).date("to", to))
    }

    /// Sets a plain parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Sets a date parameter, formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date(self, key: impl Into<String>, date: NaiveDate) -> Self {
        self.param(key, date.format(DATE_FORMAT))
    }

    /// Sets a comma-separated list parameter. An empty list is skipped.
    #[must_use]
    pub fn list<I, S>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|value| value.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");

        if joined.is_empty() {
            self
        } else {
            self.param(key, joined)
        }
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders the percent-encoded query string, without a leading `?`.
    #[must_use]
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}
