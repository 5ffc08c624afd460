//! HTTP transport for Toshl API communication.
//!
//! [`HttpClient`] executes exactly one request/response exchange per call.
//! It does not retry; retry policy belongs to the caller.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::request_factory::RequestFactory;
use crate::config::ToshlConfig;

/// HTTP client for making requests to the Toshl API.
///
/// The client handles:
/// - Request construction through its [`RequestFactory`]
/// - The per-request timeout from [`ToshlConfig::timeout`]
/// - Reading the complete response body before returning
/// - Status validation for write methods (POST, PUT, DELETE)
///
/// GET responses are returned whatever their status; interpreting a 404 or a
/// 500 on a read is left to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so one instance
/// can serve concurrent calls from many tasks.
///
/// # Example
///
/// ```rust,ignore
/// use toshl_api::{AccessToken, ToshlConfig};
/// use toshl_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ToshlConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "me").build();
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Builds authenticated wire requests.
    factory: RequestFactory,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Config`] if the token or user agent cannot be
    /// used as header values, and [`HttpError::Transport`] if the TLS backend
    /// fails to initialize.
    pub fn new(config: &ToshlConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Self::with_reqwest_client(config, builder.build()?)
    }

    /// Creates a new HTTP client on top of an existing `reqwest::Client`.
    ///
    /// Useful to share a connection pool or to route through a proxy. The
    /// configured timeout is still applied to each request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Config`] if the token or user agent cannot be
    /// used as header values.
    pub fn with_reqwest_client(
        config: &ToshlConfig,
        client: reqwest::Client,
    ) -> Result<Self, HttpError> {
        Ok(Self {
            client,
            factory: RequestFactory::new(config)?,
        })
    }

    /// Returns the request factory used by this client.
    #[must_use]
    pub const fn factory(&self) -> &RequestFactory {
        &self.factory
    }

    /// Sends a single request and returns the raw response.
    ///
    /// The body is always read to the end before this returns, on success and
    /// on status failure alike.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the request URL is invalid (`InvalidUrl`)
    /// - the exchange fails or times out, including while reading the body (`Transport`)
    /// - a write method receives a non-2xx status (`UnexpectedStatus`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let wire = self.factory.build(&request)?;
        let method = request.http_method;

        tracing::debug!(%method, url = %wire.url(), "sending Toshl API request");

        let res = self.client.execute(wire).await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(%method, path = %request.path, status = code, "received Toshl API response");

        let response = HttpResponse::new(code, headers, body);

        if method.is_write() {
            return Ok(response.error_for_status()?);
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
