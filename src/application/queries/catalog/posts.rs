use super::{CatalogQueryService, GetBySlugQuery};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{Level, PostFilter, PostId, RecordKind},
};

#[derive(Default)]
pub struct ListPostsQuery {
    pub include_drafts: bool,
    pub category_slug: Option<String>,
    pub tag_slug: Option<String>,
    pub level: Option<i64>,
}

impl CatalogQueryService {
    /// # Errors
    ///
    /// Returns not found for an unknown, malformed or hidden slug.
    pub async fn get_post_by_slug(&self, query: GetBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = Self::parse_slug(&query.slug, RecordKind::Post)?;
        let post = self
            .posts
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Self::ensure_visible(post.public, query.include_drafts, RecordKind::Post)?;
        Ok(post.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown or hidden post.
    pub async fn get_post_by_id(&self, id: i64, include_drafts: bool) -> ApplicationResult<PostDto> {
        let id = PostId::new(id)?;
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Self::ensure_visible(post.public, include_drafts, RecordKind::Post)?;
        Ok(post.into())
    }

    /// Lists posts newest first. Category and tag filters are given as slugs.
    ///
    /// # Errors
    ///
    /// Returns not found when a filter slug does not resolve to a visible record, and a
    /// validation error for an out-of-range level.
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let mut filter = PostFilter {
            include_drafts: query.include_drafts,
            level: query.level.map(Level::try_from).transpose()?,
            ..PostFilter::default()
        };

        if let Some(raw) = query.category_slug.as_deref() {
            let slug = Self::parse_slug(raw, RecordKind::Category)?;
            let category = self
                .categories
                .find_by_slug(&slug)
                .await?
                .ok_or_else(|| ApplicationError::not_found("category not found"))?;
            Self::ensure_visible(category.public, query.include_drafts, RecordKind::Category)?;
            filter.category_id = Some(category.id);
        }

        if let Some(raw) = query.tag_slug.as_deref() {
            let slug = Self::parse_slug(raw, RecordKind::Tag)?;
            let tag = self
                .tags
                .find_by_slug(&slug)
                .await?
                .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
            Self::ensure_visible(tag.public, query.include_drafts, RecordKind::Tag)?;
            filter.tag_id = Some(tag.id);
        }

        let posts = self.posts.list(&filter).await?;
        tracing::debug!(count = posts.len(), "listed posts");
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
