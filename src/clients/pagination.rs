//! Cursor-based pagination over the `Link` response header.
//!
//! Collection endpoints answer with a `Link` header such as
//!
//! ```text
//! <https://api.toshl.com/entries?from=2024-01-01&to=2024-01-31&page=2>; rel="next"
//! ```
//!
//! The query string of the `next` URL is a self-contained cursor: it already
//! repeats every filter of the original request, so it replaces the previous
//! query instead of being merged into it.

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};

/// Query string identifying the next page of a collection.
///
/// # Example
///
/// ```rust
/// use toshl_api::clients::PageCursor;
///
/// let header = r#"<https://api.toshl.com/entries?from=2020-01-01&page=2>; rel="next""#;
/// let cursor = PageCursor::from_link_header(header).unwrap();
/// assert_eq!(cursor.as_str(), "from=2020-01-01&page=2");
///
/// assert!(PageCursor::from_link_header(r#"<https://api.toshl.com/entries?page=0>; rel="first""#).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    /// Extracts the `next` cursor from a `Link` header value.
    ///
    /// Returns `None` when the header is empty, has no `next` relation, or the
    /// `next` URL carries no query string.
    #[must_use]
    pub fn from_link_header(header: &str) -> Option<Self> {
        parse_next_link(header).map(Self)
    }

    /// Returns the cursor as a query string without the leading `?`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the cursor, returning the query string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Returns the query string of the `rel="next"` target in a `Link` header.
///
/// Entries are located by their `<...>` delimiters rather than by splitting on
/// commas, so a cursor such as `tags=1,2` survives intact.
#[must_use]
pub fn parse_next_link(header: &str) -> Option<String> {
    let mut rest = header;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let target = &after[..end];
        let tail = &after[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());

        if has_next_relation(&tail[..params_end]) {
            return query_of(target);
        }

        rest = &tail[params_end..];
    }

    None
}

fn has_next_relation(params: &str) -> bool {
    params.split(';').any(|param| {
        param.split_once('=').is_some_and(|(key, value)| {
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_end_matches(',')
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        })
    })
}

fn query_of(target: &str) -> Option<String> {
    let (_, query) = target.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    let query = query.trim_start_matches('?');

    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

/// Follows `next` cursors until the last page, collecting every page body.
///
/// Pages are fetched strictly in order, one at a time. If any page fails the
/// whole walk fails and the pages already fetched are dropped.
///
/// There is no page cap unless one is set with [`PaginationWalker::max_pages`];
/// a server whose `next` link points back to an earlier page would otherwise
/// be followed indefinitely.
#[derive(Debug)]
pub struct PaginationWalker<'a> {
    client: &'a HttpClient,
    max_pages: Option<u32>,
}

impl<'a> PaginationWalker<'a> {
    /// Creates an uncapped walker over the given client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self {
            client,
            max_pages: None,
        }
    }

    /// Caps the number of pages requested. The first page is always fetched.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetches `path` and every following page, returning the bodies in
    /// request order.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] raised by any page request, or
    /// [`HttpError::PageLimitExceeded`] when a cap is set and the server still
    /// offers a `next` page after it is reached.
    pub async fn collect(&self, path: &str, query: Option<&str>) -> Result<Vec<String>, HttpError> {
        let mut pages = Vec::new();
        let mut query = query.map(str::to_string);

        loop {
            let mut builder = HttpRequest::builder(HttpMethod::Get, path);
            if let Some(query) = query.take() {
                builder = builder.query(query);
            }

            let response = self.client.request(builder.build()).await?;
            let next = response.next_cursor();
            pages.push(response.body);

            let Some(cursor) = next else {
                return Ok(pages);
            };

            if let Some(limit) = self.max_pages {
                if pages.len() >= limit as usize {
                    return Err(HttpError::PageLimitExceeded { limit });
                }
            }

            tracing::debug!(path, page = pages.len() + 1, cursor = cursor.as_str(), "following next page");
            query = Some(cursor.into_inner());
        }
    }
}
