//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// A single link in the listing, including its public short URL.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub redirect_code: String,
    pub destiny_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkItem {
    /// Builds a listing item from a stored link and its short URL.
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            redirect_code: link.redirect_code,
            destiny_url: link.destiny_url,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Response wrapping all links, newest first.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub links: Vec<LinkItem>,
}
