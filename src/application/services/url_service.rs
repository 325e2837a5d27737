//! Shortened URL creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::ShortCodeGenerator;
use serde_json::json;
use tracing::warn;

/// Insert attempts before giving up when the store keeps reporting conflicts.
///
/// The generator pre-checks uniqueness, but the check and the insert are two
/// separate statements, so concurrent creators can sample the same code in
/// between. The store's unique constraint is the safety net; a conflicting
/// insert gets a freshly generated code and another try.
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Service for creating and resolving shortened URLs.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: ShortCodeGenerator,
}

impl UrlService {
    pub fn new(repository: Arc<dyn UrlRepository>, generator: ShortCodeGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates a mapping with a server-generated short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLength`] if the generator is misconfigured,
    /// [`AppError::Internal`] when the conflict retry budget is exhausted or
    /// on database errors.
    pub async fn create_short_url(&self, original_url: String) -> Result<ShortenedUrl, AppError> {
        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let short_code = self.generator.generate(self.repository.as_ref()).await?;

            match self
                .repository
                .insert(NewShortenedUrl {
                    original_url: original_url.clone(),
                    short_code,
                })
                .await
            {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => {
                    warn!(
                        "Short code collided on insert (attempt {attempt}/{MAX_INSERT_ATTEMPTS}), \
                         regenerating"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to insert a unique short code",
            json!({ "attempts": MAX_INSERT_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no mapping exists for the code.
    pub async fn get_by_code(&self, short_code: &str) -> Result<ShortenedUrl, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_code": short_code }))
            })
    }

    /// Builds the public short URL from a request base origin and a code.
    pub fn short_url(&self, origin: &str, short_code: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), short_code)
    }

    /// Database connectivity probe used by the health endpoint.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
