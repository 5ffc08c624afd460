//! Error types for the Toshl API client.
//!
//! This module contains error types used for configuration and validation.
//! HTTP-level errors live in [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use toshl_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// A configuration error is fatal for the client being built: nothing is sent
/// until the configuration validates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Toshl personal token.")]
    EmptyAccessToken,

    /// Base URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.toshl.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A configured value cannot be sent as an HTTP header.
    #[error("Invalid value for the '{header}' header. Header values must be visible ASCII without line breaks.")]
    InvalidHeaderValue {
        /// The header the value was meant for.
        header: &'static str,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
