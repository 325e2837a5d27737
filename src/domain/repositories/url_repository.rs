//! Repository trait for the shortened URL mapping store.

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Mapping store interface: a persistent key-value table keyed by short code.
///
/// The existence check and the insert are separate operations, so two
/// concurrent creators can sample the same code between check and insert.
/// `insert` is atomic and reports that race as a distinct conflict error,
/// which the creation workflow retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when `short_code` already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError>;

    /// Looks up a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortenedUrl>, AppError>;

    /// Returns true if a mapping with the given code is present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Cheap connectivity probe used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
