use super::{map_sqlx, slugs_with_prefix};
use crate::domain::catalog::{
    AuthorId, CategoryId, ExternalLink, Level, NewPost, Post, PostFilter, PostId, PostRepository,
    PostTitle, Slug, SlugIndex, TagId,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

const COLUMNS: &str = "id, title, description, slug, text, category_id, level, link_external_tool, public, author_id, created_at, updated_at";
const ALIASED_COLUMNS: &str = "p.id, p.title, p.description, p.slug, p.text, p.category_id, p.level, p.link_external_tool, p.public, p.author_id, p.created_at, p.updated_at";

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn tag_ids(&self, post_id: i64) -> DomainResult<Vec<TagId>> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT tag_id FROM post_tags WHERE post_id = ? ORDER BY tag_id")
                .bind(post_id)
                .fetch_all(&*self.pool)
                .await
                .map_err(map_sqlx)?;

        ids.into_iter().map(TagId::new).collect()
    }

    /// Tag ids for many posts in one round trip, keyed by post id.
    async fn tag_ids_by_post(&self, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<TagId>>> {
        let mut by_post: HashMap<i64, Vec<TagId>> = HashMap::new();
        if post_ids.is_empty() {
            return Ok(by_post);
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT post_id, tag_id FROM post_tags WHERE post_id IN (");
        let mut ids = builder.separated(", ");
        for id in post_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY post_id, tag_id");

        let pairs: Vec<(i64, i64)> = builder
            .build_query_as()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        for (post_id, tag_id) in pairs {
            by_post.entry(post_id).or_default().push(TagId::new(tag_id)?);
        }
        Ok(by_post)
    }

    async fn hydrate(&self, row: PostRow) -> DomainResult<Post> {
        let tag_ids = self.tag_ids(row.id).await?;
        row.into_post(tag_ids)
    }
}

async fn replace_tags(conn: &mut SqliteConnection, post_id: i64, tag_ids: &[TagId]) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(i64::from(*tag_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    description: String,
    slug: String,
    text: String,
    category_id: i64,
    level: Option<i64>,
    link_external_tool: Option<String>,
    public: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tag_ids: Vec<TagId>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            description: self.description,
            slug: Slug::new(self.slug)?,
            text: self.text,
            category_id: CategoryId::new(self.category_id)?,
            level: self.level.map(Level::try_from).transpose()?,
            tag_ids,
            link_external_tool: self.link_external_tool.map(ExternalLink::new).transpose()?,
            public: self.public,
            author_id: AuthorId::new(self.author_id)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl SlugIndex for SqlitePostRepository {
    async fn slugs_with_prefix(&self, prefix: &str) -> DomainResult<HashSet<String>> {
        slugs_with_prefix(&self.pool, "posts", prefix).await
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert(&self, post: &NewPost, slug: Slug) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO posts (title, description, slug, text, category_id, level, link_external_tool, public, author_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(post.title.as_str())
            .bind(post.description.as_str())
            .bind(slug.as_str())
            .bind(post.text.as_str())
            .bind(i64::from(post.category_id))
            .bind(post.level.map(Level::as_i64))
            .bind(post.link_external_tool.as_ref().map(ExternalLink::as_str))
            .bind(post.public)
            .bind(i64::from(post.author_id))
            .bind(post.created_at)
            .bind(post.updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        replace_tags(&mut tx, row.id, &post.tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(post.tag_ids.clone())
    }

    async fn update(&self, post: &Post) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "UPDATE posts SET title = ?, description = ?, text = ?, category_id = ?, level = ?,
                link_external_tool = ?, public = ?, updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(post.title.as_str())
            .bind(post.description.as_str())
            .bind(post.text.as_str())
            .bind(i64::from(post.category_id))
            .bind(post.level.map(Level::as_i64))
            .bind(post.link_external_tool.as_ref().map(ExternalLink::as_str))
            .bind(post.public)
            .bind(post.updated_at)
            .bind(i64::from(post.id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        replace_tags(&mut tx, row.id, &post.tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(post.tag_ids.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {COLUMNS} FROM posts WHERE id = ?");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {COLUMNS} FROM posts WHERE slug = ?");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => self.hydrate(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ALIASED_COLUMNS} FROM posts p"));

        if let Some(tag_id) = filter.tag_id {
            builder.push(" JOIN post_tags pt ON pt.post_id = p.id AND pt.tag_id = ");
            builder.push_bind(i64::from(tag_id));
        }

        builder.push(" WHERE 1 = 1");
        if !filter.include_drafts {
            builder.push(" AND p.public = 1");
        }
        if let Some(category_id) = filter.category_id {
            builder.push(" AND p.category_id = ");
            builder.push_bind(i64::from(category_id));
        }
        if let Some(level) = filter.level {
            builder.push(" AND p.level = ");
            builder.push_bind(level.as_i64());
        }
        builder.push(" ORDER BY p.created_at DESC, p.id DESC");

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tags = self.tag_ids_by_post(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let tag_ids = tags.remove(&row.id).unwrap_or_default();
                row.into_post(tag_ids)
            })
            .collect()
    }
}
