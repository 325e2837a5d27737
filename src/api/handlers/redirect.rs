//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Responds `302 Found` with `Location` set to the stored URL verbatim. A
/// query string on the short URL itself is dropped, never appended to the
/// redirect target.
///
/// # Errors
///
/// Returns 404 when the short code is unknown.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.get_by_code(&short_code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, record.original_url)]).into_response())
}
