//! Handler for link shortening endpoints.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the given destination.
///
/// # Endpoints
///
/// - `POST /v1/shortener`
/// - `POST /api/shorten` (front-end alias)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/r/aB3xYz" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the body is malformed, the `url` field is
/// missing or not a string, or the URL is empty.
/// Returns 500 Internal Server Error on store failure, including a redirect
/// code collision (collisions are not retried).
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let short_url = state.registrar.register(&payload.url).await?;

    Ok(Json(ShortenResponse { short_url }))
}
