//! Construction of outbound requests.
//!
//! [`RequestFactory`] turns an [`HttpRequest`] into a `reqwest::Request`
//! carrying the URL, authentication and content headers. It performs no I/O.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::config::{BaseUrl, ToshlConfig};
use crate::error::ConfigError;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client name sent in the `User-Agent` header.
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Builds authenticated requests against a fixed base URL.
///
/// Every request gets:
/// - `Authorization: Bearer <token>`
/// - `User-Agent: [<prefix> | ]toshl-api-rust/<version>`
/// - `Accept: application/json`
///
/// and, when a body is attached to a POST or PUT, `Content-Type: application/json`.
///
/// # Example
///
/// ```rust
/// use toshl_api::{AccessToken, ToshlConfig};
/// use toshl_api::clients::{HttpMethod, HttpRequest, RequestFactory};
///
/// let config = ToshlConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let factory = RequestFactory::new(&config).unwrap();
///
/// let request = HttpRequest::builder(HttpMethod::Get, "accounts").build();
/// let wire = factory.build(&request).unwrap();
///
/// assert_eq!(wire.url().as_str(), "https://api.toshl.com/accounts");
/// assert_eq!(wire.headers()["authorization"], "Bearer token");
/// assert!(wire.headers().get("content-type").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RequestFactory {
    base_url: BaseUrl,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl RequestFactory {
    /// Creates a factory from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderValue`] if the token or user agent
    /// prefix contains characters that cannot appear in a header.
    pub fn new(config: &ToshlConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}{SDK_NAME}/{SDK_VERSION}");

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", config.access_token().as_ref()))
                .map_err(|_| ConfigError::InvalidHeaderValue {
                    header: "Authorization",
                })?;
        authorization.set_sensitive(true);

        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|_| ConfigError::InvalidHeaderValue {
                header: "User-Agent",
            })?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, authorization);
        default_headers.insert(USER_AGENT, user_agent);
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            base_url: config.base_url().clone(),
            default_headers,
            timeout: config.timeout(),
        })
    }

    /// Returns the base URL requests are built against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Returns the full URL for `request`: `<base>/<path>[?<query>]`.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let path = request.path.trim_start_matches('/');
        let mut url = format!("{}/{path}", self.base_url);

        if let Some(query) = request.query.as_deref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }

        url
    }

    /// Builds the wire request.
    ///
    /// A body on a GET request is ignored, so GETs never carry `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the joined URL does not parse.
    pub fn build(&self, request: &HttpRequest) -> Result<reqwest::Request, HttpError> {
        let url = self.url_for(request);
        let parsed =
            reqwest::Url::parse(&url).map_err(|_| HttpError::InvalidUrl { url: url.clone() })?;

        let mut wire = reqwest::Request::new(request.http_method.as_reqwest(), parsed);
        *wire.headers_mut() = self.default_headers.clone();
        *wire.timeout_mut() = self.timeout;

        if let Some(body) = request.body.as_ref().filter(|_| request.http_method.is_write()) {
            wire.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *wire.body_mut() = Some(body.clone().into());
        }

        Ok(wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::HttpMethod;
    use crate::config::AccessToken;

    fn factory() -> RequestFactory {
        let config = ToshlConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .base_url(BaseUrl::new("https://api.example.com/").unwrap())
            .build()
            .unwrap();
        RequestFactory::new(&config).unwrap()
    }

    #[test]
    fn test_authorization_header_on_every_method() {
        let factory = factory();
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ] {
            let request = HttpRequest::builder(method, "accounts").body("{}").build();
            let wire = factory.build(&request).unwrap();
            assert_eq!(
                wire.headers().get(AUTHORIZATION).unwrap(),
                "Bearer test-token",
                "missing Authorization for {method}"
            );
        }
    }

    #[test]
    fn test_get_never_has_content_type() {
        let factory = factory();
        let request = HttpRequest::builder(HttpMethod::Get, "accounts")
            .body(r#"{"ignored":true}"#)
            .build();
        let wire = factory.build(&request).unwrap();

        assert!(wire.headers().get(CONTENT_TYPE).is_none());
        assert!(wire.body().is_none());
    }

    #[test]
    fn test_write_with_body_has_json_content_type() {
        let factory = factory();
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let request = HttpRequest::builder(method, "accounts")
                .body(r#"{"name":"Cash"}"#)
                .build();
            let wire = factory.build(&request).unwrap();

            assert_eq!(
                wire.headers().get(CONTENT_TYPE).unwrap(),
                "application/json"
            );
            let body = wire.body().and_then(reqwest::Body::as_bytes).unwrap();
            assert_eq!(body, br#"{"name":"Cash"}"#);
        }
    }

    #[test]
    fn test_delete_without_body_has_no_content_type() {
        let request = HttpRequest::builder(HttpMethod::Delete, "accounts/1").build();
        let wire = factory().build(&request).unwrap();

        assert_eq!(wire.method(), &reqwest::Method::DELETE);
        assert!(wire.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_user_agent_names_client_and_version() {
        let request = HttpRequest::builder(HttpMethod::Get, "me").build();
        let wire = factory().build(&request).unwrap();

        let user_agent = wire.headers().get(USER_AGENT).unwrap().to_str().unwrap();
        assert_eq!(user_agent, format!("{SDK_NAME}/{SDK_VERSION}"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ToshlConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .user_agent_prefix("Budgeteer/2.1")
            .build()
            .unwrap();
        let factory = RequestFactory::new(&config).unwrap();

        let user_agent = factory.default_headers().get(USER_AGENT).unwrap();
        assert!(user_agent.to_str().unwrap().starts_with("Budgeteer/2.1 | "));
    }

    #[test]
    fn test_url_joins_path_and_query() {
        let factory = factory();
        let request = HttpRequest::builder(HttpMethod::Get, "/entries")
            .query("from=2024-01-01&to=2024-01-31")
            .build();

        assert_eq!(
            factory.url_for(&request),
            "https://api.example.com/entries?from=2024-01-01&to=2024-01-31"
        );
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let request = HttpRequest::builder(HttpMethod::Get, "accounts/9").build();
        assert_eq!(
            factory().url_for(&request),
            "https://api.example.com/accounts/9"
        );
    }

    #[test]
    fn test_timeout_is_stamped_on_request() {
        let config = ToshlConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .timeout(Duration::from_millis(750))
            .build()
            .unwrap();
        let factory = RequestFactory::new(&config).unwrap();
        let wire = factory
            .build(&HttpRequest::builder(HttpMethod::Get, "me").build())
            .unwrap();

        assert_eq!(wire.timeout(), Some(&Duration::from_millis(750)));
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let config = ToshlConfig::builder()
            .access_token(AccessToken::new("bad\ntoken").unwrap())
            .build()
            .unwrap();

        assert!(matches!(
            RequestFactory::new(&config),
            Err(ConfigError::InvalidHeaderValue {
                header: "Authorization"
            })
        ));
    }
}
