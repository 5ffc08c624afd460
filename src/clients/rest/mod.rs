//! Resource-level client for the Toshl API.
//!
//! [`RestClient`] exposes the verbs resource mappers build on:
//!
//! | Method               | HTTP   | Status checked | Returns                      |
//! |----------------------|--------|----------------|------------------------------|
//! | `fetch_one`          | GET    | no             | raw response                 |
//! | `fetch_collection`   | GET xN | no             | every page body, in order    |
//! | `create`             | POST   | yes            | id from `Location`           |
//! | `post`               | POST   | yes            | raw response                 |
//! | `replace`            | PUT    | yes            | updated body                 |
//! | `delete`             | DELETE | yes            | nothing                      |
//!
//! Bodies go in as JSON text and come back as JSON text; decoding them into
//! accounts, budgets, categories or entries is the caller's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use toshl_api::{AccessToken, RestClient, ToshlConfig};
//!
//! let config = ToshlConfig::builder()
//!     .access_token(AccessToken::new("token")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! let id = client
//!     .create("accounts", r#"{"name":"Wallet","currency":{"code":"EUR"}}"#)
//!     .await?;
//! let pages = client
//!     .fetch_collection("entries", Some("from=2024-01-01&to=2024-12-31"))
//!     .await?;
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
