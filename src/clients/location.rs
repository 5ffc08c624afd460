//! Resource identifiers from `Location` headers.
//!
//! A successful create answers with `Location: https://api.toshl.com/accounts/42`;
//! the identifier is the last path segment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::errors::{MalformedLocationError, MalformedLocationReason};

/// Identifier of a newly created resource.
///
/// Serializes as a bare string.
///
/// # Example
///
/// ```rust
/// use toshl_api::clients::extract_id;
///
/// let id = extract_id("https://api.toshl.com/accounts/abc123").unwrap();
/// assert_eq!(id.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedId(String);

impl CreatedId {
    /// Consumes the identifier, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for CreatedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the resource identifier from a `Location` header value.
///
/// Absolute URLs and root-relative paths (`/accounts/42`) are accepted. Query
/// and fragment are ignored. The path must have at least two non-empty
/// segments so that the identifier is distinct from the collection path.
///
/// # Errors
///
/// Returns [`MalformedLocationError`] when the value is empty, cannot be
/// parsed, or its path is too short to contain an identifier.
pub fn extract_id(location: &str) -> Result<CreatedId, MalformedLocationError> {
    let malformed = |reason| MalformedLocationError {
        location: location.to_string(),
        reason,
    };

    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(malformed(MalformedLocationReason::Empty));
    }

    let path = match reqwest::Url::parse(trimmed) {
        Ok(url) => url.path().to_string(),
        Err(_) if trimmed.starts_with('/') && !trimmed.starts_with("//") => trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
        Err(_) => return Err(malformed(MalformedLocationReason::Unparsable)),
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [_, .., id] => Ok(CreatedId((*id).to_string())),
        _ => Err(malformed(MalformedLocationReason::TooFewSegments)),
    }
}
