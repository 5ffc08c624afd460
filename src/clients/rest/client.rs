//! REST client implementation for the Toshl API.
//!
//! This module provides the [`RestClient`] type, the facade through which
//! resource mappers reach the transport.

use crate::clients::rest::RestError;
use crate::clients::{
    extract_id, CreatedId, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    PaginationWalker,
};
use crate::config::ToshlConfig;

/// Resource client for the Toshl API.
///
/// Holds only immutable state (the transport and the page cap), so it is
/// `Send + Sync` and can be shared across tasks without locking.
///
/// # Example
///
/// ```rust,ignore
/// use toshl_api::{AccessToken, RestClient, ToshlConfig};
///
/// let config = ToshlConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let me = client.fetch_one("me", None).await?;
/// client.delete("categories/42").await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Optional cap on pages per collection fetch.
    max_pages: Option<u32>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying [`HttpClient`] cannot be
    /// created.
    pub fn new(config: &ToshlConfig) -> Result<Self, RestError> {
        Ok(Self::from_http_client(
            HttpClient::new(config)?,
            config.max_pages(),
        ))
    }

    /// Wraps an existing [`HttpClient`].
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient, max_pages: Option<u32>) -> Self {
        Self {
            http_client,
            max_pages,
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Fetches a single resource (or a non-paginated listing).
    ///
    /// The status is not checked: a 404 comes back as an ordinary response
    /// for the caller to interpret.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for transport failures.
    pub async fn fetch_one(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, normalize_path(path)?);
        if let Some(query) = query {
            builder = builder.query(query);
        }

        Ok(self.http_client.request(builder.build()).await?)
    }

    /// Fetches every page of a collection and returns the page bodies in
    /// request order.
    ///
    /// Either all pages are returned or an error is; a failure on any page
    /// discards the pages fetched before it.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] if any page request fails or the configured
    /// page cap is exceeded.
    pub async fn fetch_collection(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<Vec<String>, RestError> {
        let path = normalize_path(path)?;

        Ok(PaginationWalker::new(&self.http_client)
            .max_pages(self.max_pages)
            .collect(&path, query)
            .await?)
    }

    /// Creates a resource and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] wrapping:
    /// - `UnexpectedStatus` for a non-2xx response
    /// - `MalformedLocation` when the write succeeded but the `Location`
    ///   header is missing or carries no identifier
    /// - `Transport` for network failures
    pub async fn create(&self, path: &str, body: impl Into<String>) -> Result<CreatedId, RestError> {
        let request = HttpRequest::builder(HttpMethod::Post, normalize_path(path)?)
            .body(body)
            .build();

        let response = self.http_client.request(request).await?;
        let id = extract_id(response.location().unwrap_or_default()).map_err(HttpError::from)?;

        Ok(id)
    }

    /// Sends a POST that is not a creation (move, reorder, merge) and returns
    /// the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for non-2xx responses and transport failures.
    pub async fn post(&self, path: &str, body: impl Into<String>) -> Result<HttpResponse, RestError> {
        let request = HttpRequest::builder(HttpMethod::Post, normalize_path(path)?)
            .body(body)
            .build();

        Ok(self.http_client.request(request).await?)
    }

    /// Replaces a resource and returns the updated representation verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for non-2xx responses and transport failures.
    pub async fn replace(&self, path: &str, body: impl Into<String>) -> Result<String, RestError> {
        let request = HttpRequest::builder(HttpMethod::Put, normalize_path(path)?)
            .body(body)
            .build();

        Ok(self.http_client.request(request).await?.body)
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for non-2xx responses and transport failures.
    pub async fn delete(&self, path: &str) -> Result<(), RestError> {
        let request = HttpRequest::builder(HttpMethod::Delete, normalize_path(path)?).build();

        self.http_client.request(request).await?;
        Ok(())
    }
}

/// Strips leading and trailing slashes from an endpoint path.
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/accounts/")?, "accounts");
/// assert_eq!(normalize_path("entries/12")?, "entries/12");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim().trim_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    #[test]
    fn test_normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/accounts").unwrap(), "accounts");
        assert_eq!(normalize_path("accounts/").unwrap(), "accounts");
        assert_eq!(normalize_path("//entries/12//").unwrap(), "entries/12");
    }

    #[test]
    fn test_normalize_path_keeps_nested_paths() {
        assert_eq!(
            normalize_path("accounts/42/move").unwrap(),
            "accounts/42/move"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
    }

    #[test]
    fn test_normalize_path_only_slashes_returns_error() {
        assert!(matches!(
            normalize_path("///"),
            Err(RestError::InvalidPath { path }) if path == "///"
        ));
    }

    #[test]
    fn test_rest_client_takes_page_cap_from_config() {
        let config = ToshlConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .max_pages(7)
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();

        assert_eq!(client.max_pages, Some(7));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
