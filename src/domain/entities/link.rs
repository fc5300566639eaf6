//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with its click counter.
///
/// Both the redirect code and the destination are immutable once the row is
/// created; only `clicks` changes over the lifetime of a link, and only via
/// atomic store-level increments.
///
/// The `destiny_url` naming matches the persisted schema and the public JSON
/// wire format.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub redirect_code: String,
    pub destiny_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        redirect_code: String,
        destiny_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            redirect_code,
            destiny_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `clicks` starts at zero and `created_at` is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub redirect_code: String,
    pub destiny_url: String,
}
