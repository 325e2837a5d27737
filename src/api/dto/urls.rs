//! DTOs for the shortened URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortenedUrl;

/// Request to shorten a single URL.
///
/// `original_url` is an `Option` so that a missing field reaches the
/// validator and comes back as a field-level message instead of a
/// deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[validate(
        required(message = "This field is required."),
        url(message = "Enter a valid URL."),
        length(max = 2083, message = "URL must be at most 2083 characters.")
    )]
    pub original_url: Option<String>,
}

/// A shortened URL as returned by the API.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub original_url: String,
    pub short_url: String,
}

impl UrlResponse {
    pub fn from_record(record: &ShortenedUrl, short_url: String) -> Self {
        Self {
            original_url: record.original_url.clone(),
            short_url,
        }
    }
}
