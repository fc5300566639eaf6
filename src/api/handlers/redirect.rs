//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Check cache for the destination
/// 2. On cache miss, query the database
/// 3. Backfill the cache from a detached task
/// 4. Increment the click counter from a detached task
/// 5. Return 307 Temporary Redirect without waiting on either task
///
/// # Errors
///
/// Returns 404 Not Found if the redirect code is unknown.
/// Returns 500 Internal Server Error on store or cache transport failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let destination = state.resolver.resolve(&code).await?;

    Ok(Redirect::temporary(&destination))
}

/// Rejects redirect requests with an empty code segment.
///
/// # Endpoint
///
/// `GET /r/` (the `{code}` route never matches an empty segment)
pub async fn empty_code_handler() -> AppError {
    AppError::validation("Redirect code is required")
}
