//! Shortened URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and the original URL it resolves to.
///
/// Records are immutable once created: no update or delete operation is
/// exposed anywhere in the service, and `created_at` is assigned by the
/// database exactly once.
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenedUrl {
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// `created_at` is intentionally absent; the store assigns it on insert.
#[derive(Debug, Clone)]
pub struct NewShortenedUrl {
    pub original_url: String,
    pub short_code: String,
}
