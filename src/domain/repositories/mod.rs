//! Repository trait definitions for the domain layer.
//!
//! Mock implementations are auto-generated via `mockall` for unit tests;
//! the PostgreSQL implementation lives in `crate::infrastructure::persistence`.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
