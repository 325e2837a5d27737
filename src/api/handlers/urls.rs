//! Handlers for creating and retrieving shortened URLs.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::urls::{CreateUrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored URL and its short form, built from the
/// request's own origin:
///
/// ```json
/// { "original_url": "https://example.com/some/long/path",
///   "short_url": "http://s.example.com/Ab3xYz09" }
/// ```
///
/// # Errors
///
/// Returns 400 with field-level messages when the body is malformed JSON,
/// `original_url` is missing, over-long, or not a syntactically valid URL.
pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let original_url = payload.original_url.ok_or_else(|| {
        AppError::bad_request(
            "Validation failed",
            json!({ "original_url": ["This field is required."] }),
        )
    })?;

    let origin = request_origin(&headers)?;

    let record = state.url_service.create_short_url(original_url).await?;
    let short_url = state.url_service.short_url(&origin, &record.short_code);

    Ok((
        StatusCode::CREATED,
        Json(UrlResponse::from_record(&record, short_url)),
    ))
}

/// Retrieves a shortened URL by its code.
///
/// # Endpoint
///
/// `GET /api/urls/{short_code}`
///
/// Reads never mutate the record; repeated calls return the same mapping.
///
/// # Errors
///
/// Returns 404 when the code is unknown.
pub async fn retrieve_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UrlResponse>, AppError> {
    let origin = request_origin(&headers)?;

    let record = state.url_service.get_by_code(&short_code).await?;
    let short_url = state.url_service.short_url(&origin, &record.short_code);

    Ok(Json(UrlResponse::from_record(&record, short_url)))
}
