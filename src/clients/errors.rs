//! HTTP-specific error types for the Toshl API client.
//!
//! - [`UnexpectedStatusError`]: a write request received a non-2xx response
//! - [`MalformedLocationError`]: a create succeeded but no identifier could be
//!   read from its `Location` header
//! - [`HttpError`]: unified error type for every transport operation
//!
//! # Example
//!
//! ```rust,ignore
//! use toshl_api::clients::HttpError;
//!
//! match client.delete("accounts/42").await {
//!     Ok(()) => println!("deleted"),
//!     Err(HttpError::UnexpectedStatus(e)) => {
//!         println!("API error {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when a write request receives a status outside `[200, 300)`.
///
/// Carries the status code and the raw response body so the caller can
/// decide how to recover.
///
/// # Example
///
/// ```rust
/// use toshl_api::clients::UnexpectedStatusError;
///
/// let error = UnexpectedStatusError {
///     code: 404,
///     body: r#"{"error_id":"error.object.not_found"}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unexpected status {code}: {body}")]
pub struct UnexpectedStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Why a `Location` header could not be turned into an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLocationReason {
    /// The header was absent or empty.
    Empty,
    /// The value is neither an absolute URL nor a root-relative path.
    Unparsable,
    /// The path has fewer than two non-empty segments.
    TooFewSegments,
}

impl std::fmt::Display for MalformedLocationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "header is empty"),
            Self::Unparsable => write!(f, "value is not a URL"),
            Self::TooFewSegments => write!(f, "path does not contain a resource id"),
        }
    }
}

/// Error returned when a successful create response carries no usable
/// `Location` header.
///
/// The write itself succeeded; only the new identifier is unknown.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Cannot parse resource id from Location '{location}': {reason}")]
pub struct MalformedLocationError {
    /// The header value as received (empty when the header was missing).
    pub location: String,
    /// What was wrong with it.
    pub reason: MalformedLocationReason,
}

/// Unified error type for all HTTP-related errors.
///
/// Read requests never produce [`HttpError::UnexpectedStatus`]; only writes
/// validate the status code.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, timeout or body-read failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A write request received a non-2xx response.
    #[error(transparent)]
    UnexpectedStatus(#[from] UnexpectedStatusError),

    /// A create succeeded but the new identifier could not be extracted.
    #[error(transparent)]
    MalformedLocation(#[from] MalformedLocationError),

    /// The client configuration cannot be turned into request headers.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request URL built from the base URL, path and query is invalid.
    #[error("Invalid request URL '{url}'")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
    },

    /// A collection fetch would have requested more pages than allowed.
    #[error("Pagination exceeded the configured limit of {limit} pages")]
    PageLimitExceeded {
        /// The configured page limit.
        limit: u32,
    },
}
