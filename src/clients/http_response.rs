//! HTTP response types for the Toshl API client.
//!
//! [`HttpResponse`] is the raw result of one exchange: status, headers and the
//! fully-read body text. The body is never decoded here.

use std::collections::HashMap;

use crate::clients::errors::UnexpectedStatusError;
use crate::clients::pagination::PageCursor;

/// A raw response from the Toshl API.
///
/// Header names are stored lower-cased; use [`HttpResponse::header`] for
/// case-insensitive lookup.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use toshl_api::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("Location".to_string(), vec!["https://api.toshl.com/accounts/42".to_string()]);
///
/// let response = HttpResponse::new(201, headers, String::new());
/// assert!(response.is_ok());
/// assert_eq!(response.header("location"), Some("https://api.toshl.com/accounts/42"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as received.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, lower-casing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            code,
            headers: normalized,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Location` header value, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns the cursor for the next page, read from the `Link` header(s).
    ///
    /// When the server sends several `Link` headers the first one carrying a
    /// `next` relation wins.
    #[must_use]
    pub fn next_cursor(&self) -> Option<PageCursor> {
        self.headers
            .get("link")?
            .iter()
            .find_map(|value| PageCursor::from_link_header(value))
    }

    /// Converts a non-2xx response into an [`UnexpectedStatusError`].
    ///
    /// # Errors
    ///
    /// Returns the status code and body when the status is outside `[200, 300)`.
    pub fn error_for_status(self) -> Result<Self, UnexpectedStatusError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(UnexpectedStatusError {
                code: self.code,
                body: self.body,
            })
        }
    }
}
