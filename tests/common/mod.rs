#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use shortly::application::services::UrlService;
use shortly::domain::entities::{NewShortenedUrl, ShortenedUrl};
use shortly::domain::repositories::UrlRepository;
use shortly::error::AppError;
use shortly::state::AppState;
use shortly::utils::code_generator::{GeneratorConfig, ShortCodeGenerator};

/// Mapping store backed by a process-local hash map, keyed by short code.
///
/// Mirrors the store contract the handlers rely on: atomic insert that
/// reports duplicate codes as a conflict, lookup, and existence check.
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, ShortenedUrl>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seed(&self, short_code: &str, original_url: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().insert(
            short_code.to_string(),
            ShortenedUrl::new(
                id,
                original_url.to_string(),
                short_code.to_string(),
                Utc::now(),
            ),
        );
    }

    pub fn get(&self, short_code: &str) -> Option<ShortenedUrl> {
        self.records.lock().unwrap().get(short_code).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let mut records = self.records.lock().unwrap();

        if records.contains_key(&new_url.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "shortened_urls_short_code_key" }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = ShortenedUrl::new(
            id,
            new_url.original_url,
            new_url.short_code.clone(),
            Utc::now(),
        );
        records.insert(new_url.short_code, record.clone());

        Ok(record)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortenedUrl>, AppError> {
        Ok(self.records.lock().unwrap().get(short_code).cloned())
    }

    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.records.lock().unwrap().contains_key(short_code))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let generator = ShortCodeGenerator::new(GeneratorConfig::default());
    let url_service = Arc::new(UrlService::new(repository.clone(), generator));

    (AppState { url_service }, repository)
}
