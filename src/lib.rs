//! # Toshl API Rust Client
//!
//! The transport core of a client for the [Toshl Finance](https://toshl.com)
//! API: authenticated requests, creation-id extraction and cursor pagination
//! for the account, budget, category and entry endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ToshlConfig`] and [`ToshlConfigBuilder`]
//! - A validated bearer token ([`AccessToken`]) and base URL ([`BaseUrl`])
//! - A resource facade, [`RestClient`], with `fetch_one`, `fetch_collection`,
//!   `create`, `replace` and `delete`
//! - `Link`-header pagination that returns every page or fails as a whole
//! - `Location`-header id extraction for creates
//! - A [`QueryString`] helper for collection filters
//!
//! Bodies are exchanged as JSON text. Mapping them to resource types is left
//! to the calling code.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use toshl_api::{AccessToken, ToshlConfig};
//!
//! let config = ToshlConfig::builder()
//!     .access_token(AccessToken::new("your-personal-token").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use toshl_api::{QueryString, RestClient};
//!
//! let client = RestClient::new(&config)?;
//!
//! // Single resource: the status is not checked on reads
//! let account = client.fetch_one("accounts/42", None).await?;
//! if account.is_ok() {
//!     println!("{}", account.body);
//! }
//!
//! // Every page of a collection, in order
//! let query = QueryString::date_range(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! )?;
//! let pages = client.fetch_collection("entries", Some(&query.build())).await?;
//!
//! // Writes are status-checked
//! let id = client.create("categories", r#"{"name":"Travel","type":"expense"}"#).await?;
//! client.delete(&format!("categories/{id}")).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync` and hold no mutable state
//! - **No hidden retries**: one call is one exchange
//! - **Errors, not logs**: failures are returned as typed errors; `tracing`
//!   only records traffic at debug level

pub mod clients;
pub mod config;
pub mod error;
pub mod query;

pub use config::{AccessToken, BaseUrl, ToshlConfig, ToshlConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use query::{QueryError, QueryString};

pub use clients::{
    extract_id, CreatedId, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, MalformedLocationError, PageCursor, PaginationWalker, RequestFactory,
    RestClient, RestError, UnexpectedStatusError,
};
