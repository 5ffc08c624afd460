//! REST-specific error types for the Toshl API client.
//!
//! - [`RestError::InvalidPath`]: the endpoint path is empty after normalization
//! - [`RestError::Http`]: wraps the underlying [`HttpError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use toshl_api::clients::HttpError;
//! use toshl_api::clients::rest::RestError;
//!
//! match client.create("accounts", body).await {
//!     Ok(id) => println!("created {id}"),
//!     Err(RestError::Http(HttpError::MalformedLocation(e))) => {
//!         println!("created, but the id is unknown: {e}");
//!     }
//!     Err(e) => println!("create failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use toshl_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The endpoint path is invalid.
    ///
    /// Returned when a path is empty after stripping slashes.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MalformedLocationError, MalformedLocationReason, UnexpectedStatusError};

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "//".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: //");
    }

    #[test]
    fn test_http_error_message_is_transparent() {
        let rest_error: RestError = HttpError::UnexpectedStatus(UnexpectedStatusError {
            code: 409,
            body: "conflict".to_string(),
        })
        .into();

        assert_eq!(rest_error.to_string(), "Unexpected status 409: conflict");
    }

    #[test]
    fn test_malformed_location_is_distinguishable() {
        let rest_error: RestError = HttpError::MalformedLocation(MalformedLocationError {
            location: String::new(),
            reason: MalformedLocationReason::Empty,
        })
        .into();

        assert!(matches!(
            rest_error,
            RestError::Http(HttpError::MalformedLocation(_))
        ));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let _: &dyn std::error::Error = &RestError::InvalidPath {
            path: String::new(),
        };
        let _: &dyn std::error::Error =
            &RestError::Http(HttpError::PageLimitExceeded { limit: 3 });
    }
}
