#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use urlshort::application::services::{LinkRegistrar, RedirectResolver};
use urlshort::domain::entities::{Link, NewLink};
use urlshort::domain::repositories::LinkRepository;
use urlshort::error::AppError;
use urlshort::infrastructure::cache::{CacheResult, CacheService};
use urlshort::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";
pub const CACHE_TTL: Duration = Duration::from_secs(86_400);

/// In-memory link store used instead of PostgreSQL in integration tests.
///
/// Increments happen under a single lock, mirroring the atomicity the real
/// repository delegates to the database.
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
        }
    }

    /// Inserts a link directly, bypassing the registrar.
    pub fn seed(&self, code: &str, url: &str) {
        self.seed_at(code, url, Utc::now());
    }

    /// Inserts a link with an explicit creation time, for ordering tests.
    pub fn seed_at(&self, code: &str, url: &str, created_at: DateTime<Utc>) {
        self.links.lock().unwrap().push(Link::new(
            code.to_string(),
            url.to_string(),
            0,
            created_at,
        ));
    }

    pub fn clicks(&self, code: &str) -> Option<i64> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.redirect_code == code)
            .map(|l| l.clicks)
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn find(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.redirect_code == code)
            .cloned()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.redirect_code == new_link.redirect_code) {
            return Err(AppError::conflict("Duplicate redirect code"));
        }

        let link = Link::new(new_link.redirect_code, new_link.destiny_url, 0, Utc::now());
        links.push(link.clone());

        Ok(link)
    }

    async fn find_destination(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.redirect_code == code)
            .map(|l| l.destiny_url.clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        let mut links = self.links.lock().unwrap();

        if let Some(link) = links.iter_mut().find(|l| l.redirect_code == code) {
            link.clicks += 1;
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(links)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// A link store where every call fails, simulating an unreachable database.
pub struct UnreachableLinkRepository;

#[async_trait]
impl LinkRepository for UnreachableLinkRepository {
    async fn insert(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::internal("store unreachable"))
    }

    async fn find_destination(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(AppError::internal("store unreachable"))
    }

    async fn increment_clicks(&self, _code: &str) -> Result<(), AppError> {
        Err(AppError::internal("store unreachable"))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Err(AppError::internal("store unreachable"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("store unreachable"))
    }
}

/// In-memory cache used instead of Redis in integration tests.
///
/// TTLs are accepted and ignored; tests never outlive an entry.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Pre-populates an entry, simulating a warm cache.
    pub fn preload(&self, code: &str, url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), url.to_string());
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.lock().unwrap().contains_key(code)
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get(&self, code: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(code).cloned())
    }

    async fn set_with_expiry(
        &self,
        code: &str,
        destination: &str,
        _ttl: Duration,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), destination.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Builds an [`AppState`] wired to the given fakes.
pub fn test_state(links: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> AppState {
    let registrar = Arc::new(LinkRegistrar::new(links.clone(), BASE_URL.to_string()));
    let resolver = Arc::new(RedirectResolver::new(links.clone(), cache.clone(), CACHE_TTL));

    AppState::new(registrar, resolver, links, cache)
}

/// Polls the repository until the click count for `code` reaches `expected`.
///
/// Click increments are fire-and-forget, so tests observe them with eventual
/// consistency rather than immediately after the response.
pub async fn wait_for_clicks(repo: &InMemoryLinkRepository, code: &str, expected: i64) {
    for _ in 0..500 {
        if repo.clicks(code) == Some(expected) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    panic!(
        "click count for {code} did not reach {expected}, got {:?}",
        repo.clicks(code)
    );
}

/// Creation timestamp offset helper for ordering tests.
pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - ChronoDuration::minutes(minutes)
}
