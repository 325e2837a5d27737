//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! uses a separate struct (`NewShortenedUrl`) following the new-type pattern.

pub mod shortened_url;

pub use shortened_url::{NewShortenedUrl, ShortenedUrl};
