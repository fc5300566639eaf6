//! Handler for the link listing endpoint.

use axum::{extract::State, Json};

use crate::api::dto::links::{LinkItem, LinksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /v1/links`
///
/// # Response
///
/// ```json
/// {
///   "links": [
///     {
///       "redirect_code": "aB3xYz",
///       "destiny_url": "https://example.com",
///       "short_url": "http://localhost:8080/r/aB3xYz",
///       "clicks": 42,
///       "created_at": "2026-08-30T12:00:00Z"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error on database failure.
pub async fn links_handler(State(state): State<AppState>) -> Result<Json<LinksResponse>, AppError> {
    let links = state.links.list_all().await?;

    let links = links
        .into_iter()
        .map(|link| {
            let short_url = state.registrar.short_url(&link.redirect_code);
            LinkItem::from_link(link, short_url)
        })
        .collect();

    Ok(Json(LinksResponse { links }))
}
