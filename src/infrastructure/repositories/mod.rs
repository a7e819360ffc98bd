// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_category;
mod sqlite_post;
mod sqlite_tag;

pub use error::map_sqlx;
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_post::SqlitePostRepository;
pub use sqlite_tag::SqliteTagRepository;

use crate::domain::errors::DomainResult;
use sqlx::SqlitePool;
use std::collections::HashSet;

/// Slugs in `table` starting with `prefix`.
/// `prefix` is restricted to `[a-z0-9-]`, so it carries no LIKE wildcards.
async fn slugs_with_prefix(
    pool: &SqlitePool,
    table: &'static str,
    prefix: &str,
) -> DomainResult<HashSet<String>> {
    let sql = format!("SELECT slug FROM {table} WHERE slug LIKE ?");
    let slugs: Vec<String> = sqlx::query_scalar(&sql)
        .bind(format!("{prefix}%"))
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    Ok(slugs.into_iter().collect())
}
