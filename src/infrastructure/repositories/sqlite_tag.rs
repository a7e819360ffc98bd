use super::{map_sqlx, slugs_with_prefix};
use crate::domain::catalog::{NewTag, Slug, SlugIndex, Tag, TagId, TagRepository, TagText};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::HashSet;
use std::sync::Arc;

const COLUMNS: &str = "id, tag, slug, public, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTagRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    tag: String,
    slug: String,
    public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            tag: TagText::new(row.tag)?,
            slug: Slug::new(row.slug)?,
            public: row.public,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugIndex for SqliteTagRepository {
    async fn slugs_with_prefix(&self, prefix: &str) -> DomainResult<HashSet<String>> {
        slugs_with_prefix(&self.pool, "tags", prefix).await
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn insert(&self, tag: &NewTag, slug: Slug) -> DomainResult<Tag> {
        let sql = format!(
            "INSERT INTO tags (tag, slug, public, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TagRow>(&sql)
            .bind(tag.tag.as_str())
            .bind(slug.as_str())
            .bind(tag.public)
            .bind(tag.created_at)
            .bind(tag.updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn update(&self, tag: &Tag) -> DomainResult<Tag> {
        let sql = format!(
            "UPDATE tags SET tag = ?, public = ?, updated_at = ? WHERE id = ? RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TagRow>(&sql)
            .bind(tag.tag.as_str())
            .bind(tag.public)
            .bind(tag.updated_at)
            .bind(i64::from(tag.id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;

        Tag::try_from(row)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let sql = format!("SELECT {COLUMNS} FROM tags WHERE id = ?");
        let row = sqlx::query_as::<_, TagRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let sql = format!("SELECT {COLUMNS} FROM tags WHERE slug = ?");
        let row = sqlx::query_as::<_, TagRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Tag>> {
        let sql = if include_drafts {
            format!("SELECT {COLUMNS} FROM tags ORDER BY tag")
        } else {
            format!("SELECT {COLUMNS} FROM tags WHERE public = 1 ORDER BY tag")
        };
        let rows = sqlx::query_as::<_, TagRow>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
