//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses runtime-checked SQLx queries with bound parameters, so the crate
/// builds without a live database.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (redirect_code, destiny_url)
            VALUES ($1, $2)
            RETURNING redirect_code, destiny_url, clicks, created_at
            "#,
        )
        .bind(&new_link.redirect_code)
        .bind(&new_link.destiny_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_destination(&self, code: &str) -> Result<Option<String>, AppError> {
        let destination = sqlx::query_scalar::<_, String>(
            "SELECT destiny_url FROM links WHERE redirect_code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(destination)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        // Single atomic statement; concurrent increments never lose updates.
        sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE redirect_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT redirect_code, destiny_url, clicks, created_at
            FROM links
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
