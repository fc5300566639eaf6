//! Cache-aside redirect resolution with fire-and-forget click accounting.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Resolves redirect codes to destination URLs.
///
/// Lookup order is cache first, store on a miss. Two side effects are
/// dispatched per successful resolution without being awaited:
///
/// - on a cache miss, the cache is backfilled with the destination;
/// - the store's click counter is incremented.
///
/// Both run on detached tasks that outlive the originating request; their
/// failures are logged and never surface to the caller, and the synchronous
/// response never waits on them.
pub struct RedirectResolver {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    cache_ttl: Duration,
}

impl RedirectResolver {
    /// Creates a new resolver.
    ///
    /// `cache_ttl` is applied to every backfilled entry; the TTL is not
    /// refreshed on cache hits, so an entry expires `cache_ttl` after its
    /// first write regardless of subsequent traffic.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            links,
            cache,
            cache_ttl,
        }
    }

    /// Resolves a redirect code to its destination URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is unknown to both cache and store
    /// - [`AppError::Internal`] on store or cache transport failure on the
    ///   synchronous path
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let destination = match self.cache.get(code).await? {
            Some(url) => {
                debug!(code, "cache hit");
                url
            }
            None => {
                debug!(code, "cache miss");

                let url = self
                    .links
                    .find_destination(code)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Redirect code not found: {code}")))?;

                self.spawn_cache_backfill(code, &url);

                url
            }
        };

        self.spawn_click_increment(code);

        Ok(destination)
    }

    /// Writes the resolved destination into the cache from a detached task.
    ///
    /// Concurrent backfills of the same code are idempotent: the destination
    /// is immutable, so every writer stores the same value.
    fn spawn_cache_backfill(&self, code: &str, destination: &str) {
        let cache = Arc::clone(&self.cache);
        let code = code.to_string();
        let destination = destination.to_string();
        let ttl = self.cache_ttl;

        tokio::spawn(async move {
            if let Err(e) = cache.set_with_expiry(&code, &destination, ttl).await {
                warn!(code, error = %e, "cache backfill failed");
            }
        });
    }

    /// Increments the click counter from a detached task.
    ///
    /// A failed increment silently undercounts; there is no retry or
    /// reconciliation.
    fn spawn_click_increment(&self, code: &str) {
        let links = Arc::clone(&self.links);
        let code = code.to_string();

        tokio::spawn(async move {
            if let Err(e) = links.increment_clicks(&code).await {
                warn!(code, error = %e, "click increment failed");
            }
        });
    }
}
