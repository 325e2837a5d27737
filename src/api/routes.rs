//! API route configuration.

use crate::api::handlers::{create_url_handler, retrieve_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /urls`                - Create a shortened URL
/// - `GET  /urls/{short_code}`   - Retrieve a shortened URL
///
/// Collection listing, updates, and deletes are intentionally not routed;
/// axum's method routing answers those requests with 405.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_url_handler))
        .route("/urls/{short_code}", get(retrieve_url_handler))
}
