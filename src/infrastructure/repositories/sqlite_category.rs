use super::{map_sqlx, slugs_with_prefix};
use crate::domain::catalog::{
    Category, CategoryId, CategoryName, CategoryRepository, NewCategory, Slug, SlugIndex,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::HashSet;
use std::sync::Arc;

const COLUMNS: &str = "id, name, slug, description, public, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            public: row.public,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SlugIndex for SqliteCategoryRepository {
    async fn slugs_with_prefix(&self, prefix: &str) -> DomainResult<HashSet<String>> {
        slugs_with_prefix(&self.pool, "categories", prefix).await
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: &NewCategory, slug: Slug) -> DomainResult<Category> {
        let sql = format!(
            "INSERT INTO categories (name, slug, description, public, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(category.name.as_str())
            .bind(slug.as_str())
            .bind(category.description.as_str())
            .bind(category.public)
            .bind(category.created_at)
            .bind(category.updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        let sql = format!(
            "UPDATE categories SET name = ?, description = ?, public = ?, updated_at = ?
             WHERE id = ? RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(category.name.as_str())
            .bind(category.description.as_str())
            .bind(category.public)
            .bind(category.updated_at)
            .bind(i64::from(category.id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE id = ?");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE slug = ?");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Category>> {
        let sql = if include_drafts {
            format!("SELECT {COLUMNS} FROM categories ORDER BY name")
        } else {
            format!("SELECT {COLUMNS} FROM categories WHERE public = 1 ORDER BY name")
        };
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
