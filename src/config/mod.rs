//! Configuration types for the Toshl API client.
//!
//! # Overview
//!
//! - [`ToshlConfig`]: all client settings
//! - [`ToshlConfigBuilder`]: a builder for constructing [`ToshlConfig`] instances
//! - [`AccessToken`]: a validated bearer token with masked debug output
//! - [`BaseUrl`]: a validated API base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use toshl_api::{AccessToken, ToshlConfig};
//!
//! let config = ToshlConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.toshl.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, DEFAULT_BASE_URL};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Toshl API client.
///
/// Immutable once built. `Clone`, `Send` and `Sync`, so a single
/// configuration can back any number of clients.
#[derive(Clone, Debug)]
pub struct ToshlConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    max_pages: Option<u32>,
}

impl ToshlConfig {
    /// Creates a new builder for constructing a `ToshlConfig`.
    #[must_use]
    pub fn builder() -> ToshlConfigBuilder {
        ToshlConfigBuilder::new()
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout, if configured.
    ///
    /// `None` means requests are not bounded by the client.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the maximum number of pages a collection fetch may follow.
    ///
    /// `None` (the default) means pagination runs until the server stops
    /// sending a `next` link.
    #[must_use]
    pub const fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ToshlConfig>();
};

/// Builder for constructing [`ToshlConfig`] instances.
///
/// Only `access_token` is required.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
/// - `max_pages`: `None`
#[derive(Debug, Default)]
pub struct ToshlConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    max_pages: Option<u32>,
}

impl ToshlConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bearer token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    ///
    /// The timeout covers connecting, sending and reading the full body.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Caps the number of pages a single collection fetch may request.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Builds the [`ToshlConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<ToshlConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ToshlConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
            max_pages: self.max_pages,
        })
    }
}
