//! Unique short code generation.
//!
//! Candidates are sampled from the 62-symbol alphanumeric alphabet with the
//! OS CSPRNG and checked against the mapping store. When every candidate at
//! the requested length collides, the length grows by one and the attempt
//! budget resets; collision probability drops 62x per added character, so
//! escalation terminates quickly in practice.

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::{error, warn};

/// Symbol set for short codes: upper/lowercase Latin letters and digits.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length bounds and retry budget for code generation.
///
/// Built once from [`crate::config::Config`] and handed to the generator at
/// construction. `max_length` is tied to the `short_code` column width and
/// never exceeded, even under escalation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    /// Samples per length before escalating to the next length.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_length: 8,
            min_length: 6,
            max_length: 12,
            max_attempts: 10,
        }
    }
}

/// Stateless generator of store-unique short codes.
pub struct ShortCodeGenerator {
    config: GeneratorConfig,
}

impl ShortCodeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates a unique code of the configured default length.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_with_length`].
    pub async fn generate(&self, repository: &dyn UrlRepository) -> Result<String, AppError> {
        self.generate_with_length(repository, self.config.default_length)
            .await
    }

    /// Generates a code of exactly `length` characters that is absent from
    /// the store at the moment of the check.
    ///
    /// Up to `max_attempts` candidates are sampled at the requested length;
    /// the first one the store does not know is returned. If all of them
    /// collide, the length is increased by one with a fresh attempt budget,
    /// and a warning is logged so operators can spot alphabet exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLength`] when `length` is outside the
    /// configured bounds (checked before any store query is made), or when
    /// escalation would push the length past `max_length`. Store errors
    /// propagate unchanged.
    pub async fn generate_with_length(
        &self,
        repository: &dyn UrlRepository,
        length: usize,
    ) -> Result<String, AppError> {
        let mut length = length;
        self.validate_length(length)?;

        loop {
            for _ in 0..self.config.max_attempts {
                let code = sample_code(length);

                if !repository.code_exists(&code).await? {
                    return Ok(code);
                }
            }

            warn!(
                "Failed to generate unique short code after {} attempts for code length {}. \
                 Trying with greater code length.",
                self.config.max_attempts, length
            );

            length += 1;
            self.validate_length(length)?;
        }
    }

    fn validate_length(&self, length: usize) -> Result<(), AppError> {
        if length < self.config.min_length || length > self.config.max_length {
            error!("Invalid short code length: {length}");
            return Err(AppError::invalid_length(
                format!(
                    "Length must be between {} and {}. Current length: {}",
                    self.config.min_length, self.config.max_length, length
                ),
                json!({
                    "length": length,
                    "min_length": self.config.min_length,
                    "max_length": self.config.max_length,
                }),
            ));
        }
        Ok(())
    }
}

/// Samples `length` characters independently and uniformly from [`ALPHABET`].
///
/// Entropy comes from the OS CSPRNG. Bytes at or above the largest multiple
/// of the alphabet size (248) are rejected and redrawn, so the modulo mapping
/// stays uniform across all 62 symbols.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
fn sample_code(length: usize) -> String {
    const ZONE: u8 = u8::MAX - (u8::MAX % ALPHABET.len() as u8);

    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if byte < ZONE {
                code.push(ALPHABET[(byte % ALPHABET.len() as u8) as usize] as char);
                if code.len() == length {
                    break;
                }
            }
        }
    }

    code
}
