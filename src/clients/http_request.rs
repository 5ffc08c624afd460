//! HTTP request types for the Toshl API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request is
//! plain data: an endpoint path, an optional query string and an optional,
//! already-encoded JSON body. Turning it into a wire request is the job of
//! [`RequestFactory`](crate::clients::RequestFactory).

use std::fmt;

/// HTTP methods used by the Toshl API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that mutate server state.
    ///
    /// Responses to write methods are status-checked by the transport; GET
    /// responses are returned whatever their status.
    #[must_use]
    pub const fn is_write(self) -> bool {
        !matches!(self, Self::Get)
    }

    pub(crate) const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request to be sent to the Toshl API.
///
/// # Example
///
/// ```rust
/// use toshl_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "entries")
///     .query("from=2024-01-01&to=2024-01-31")
///     .build();
///
/// assert_eq!(request.query.as_deref(), Some("from=2024-01-01&to=2024-01-31"));
///
/// let request = HttpRequest::builder(HttpMethod::Post, "accounts")
///     .body(r#"{"name":"Wallet","currency":{"code":"EUR"}}"#)
///     .build();
///
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint path, relative to the base URL.
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
    /// JSON-encoded request body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Option<String>,
    body: Option<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Sets the query string. A leading `?` is dropped; an empty string
    /// clears it.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.strip_prefix('?').unwrap_or(&query);
        self.query = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        self
    }

    /// Sets the JSON-encoded request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_only_get_is_a_read() {
        assert!(!HttpMethod::Get.is_write());
        assert!(HttpMethod::Post.is_write());
        assert!(HttpMethod::Put.is_write());
        assert!(HttpMethod::Delete.is_write());
    }

    #[test]
    fn test_builder_creates_bare_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "accounts").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "accounts");
        assert!(request.query.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_strips_leading_question_mark() {
        let request = HttpRequest::builder(HttpMethod::Get, "entries")
            .query("?page=2")
            .build();

        assert_eq!(request.query.as_deref(), Some("page=2"));
    }

    #[test]
    fn test_builder_treats_empty_query_as_absent() {
        let request = HttpRequest::builder(HttpMethod::Get, "entries")
            .query("")
            .build();
        assert!(request.query.is_none());

        let request = HttpRequest::builder(HttpMethod::Get, "entries")
            .query("?")
            .build();
        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_keeps_body_verbatim() {
        let body = r#"{"amount":-12.5,"currency":{"code":"EUR"}}"#;
        let request = HttpRequest::builder(HttpMethod::Put, "entries/7")
            .body(body)
            .build();

        assert_eq!(request.body.as_deref(), Some(body));
    }
}
