//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{LinkRegistrar, RedirectResolver};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;

/// Process-wide shared state.
///
/// Holds explicitly constructed, injected dependencies so handlers and
/// services remain testable with fakes; nothing here is an ambient global.
#[derive(Clone)]
pub struct AppState {
    pub registrar: Arc<LinkRegistrar>,
    pub resolver: Arc<RedirectResolver>,
    pub links: Arc<dyn LinkRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        registrar: Arc<LinkRegistrar>,
        resolver: Arc<RedirectResolver>,
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            registrar,
            resolver,
            links,
            cache,
        }
    }
}
