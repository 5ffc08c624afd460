//! HTTP client types for Toshl API communication.
//!
//! This module provides the transport layer every resource operation goes
//! through: authenticated request construction, single-exchange execution,
//! creation-id extraction and cursor pagination.
//!
//! # Overview
//!
//! - [`RequestFactory`]: builds authenticated `reqwest` requests, no I/O
//! - [`HttpClient`]: executes one request and returns an [`HttpResponse`]
//! - [`extract_id`]: reads a [`CreatedId`] out of a `Location` header
//! - [`PaginationWalker`]: follows `Link: <...>; rel="next"` cursors
//! - [`rest::RestClient`]: the resource-level facade
//! - [`HttpError`]: unified transport error type
//!
//! # Status handling
//!
//! Only write methods (POST, PUT, DELETE) turn a non-2xx status into
//! [`HttpError::UnexpectedStatus`]. GET responses are handed back whatever
//! their status.
//!
//! # Retry Behavior
//!
//! None. Every call is one exchange; a failure is returned to the caller
//! as-is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod location;
mod pagination;
mod request_factory;
pub mod rest;

pub use errors::{HttpError, MalformedLocationError, MalformedLocationReason, UnexpectedStatusError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use location::{extract_id, CreatedId};
pub use pagination::{parse_next_link, PageCursor, PaginationWalker};
pub use request_factory::{RequestFactory, SDK_NAME, SDK_VERSION};

pub use rest::{RestClient, RestError};
