//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::NewLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating shortened links.
///
/// Generates a random redirect code, persists the mapping and returns the
/// fully qualified short URL. The cache stays cold on registration; it is
/// populated lazily by the first redirect (see
/// [`super::resolver::RedirectResolver`]).
pub struct LinkRegistrar {
    links: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkRegistrar {
    /// Creates a new registrar.
    ///
    /// `base_url` is the public base for generated short URLs, e.g.
    /// `https://s.example.com`; a trailing slash is tolerated.
    pub fn new(links: Arc<dyn LinkRepository>, base_url: String) -> Self {
        Self { links, base_url }
    }

    /// Creates a short link for `destination_url` and returns the short URL.
    ///
    /// The destination is stored as given; it is not validated as a URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `destination_url` is empty (no store
    ///   write is performed)
    /// - [`AppError::Conflict`] if the generated code collides with an
    ///   existing one; collisions are not retried
    /// - [`AppError::Internal`] on store failure
    pub async fn register(&self, destination_url: &str) -> Result<String, AppError> {
        if destination_url.is_empty() {
            return Err(AppError::validation("URL is required"));
        }

        let new_link = NewLink {
            redirect_code: generate_code(),
            destiny_url: destination_url.to_string(),
        };

        let link = self.links.insert(new_link).await?;

        tracing::info!(code = %link.redirect_code, "short link created");

        Ok(self.short_url(&link.redirect_code))
    }

    /// Constructs the full short URL for a redirect code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/r/{}", self.base_url.trim_end_matches('/'), code)
    }
}
