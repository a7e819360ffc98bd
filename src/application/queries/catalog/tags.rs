use super::{CatalogQueryService, GetBySlugQuery};
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::RecordKind,
};

impl CatalogQueryService {
    /// # Errors
    ///
    /// Returns not found for an unknown, malformed or hidden slug.
    pub async fn get_tag_by_slug(&self, query: GetBySlugQuery) -> ApplicationResult<TagDto> {
        let slug = Self::parse_slug(&query.slug, RecordKind::Tag)?;
        let tag = self
            .tags
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        Self::ensure_visible(tag.public, query.include_drafts, RecordKind::Tag)?;
        Ok(tag.into())
    }

    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_tags(&self, include_drafts: bool) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tags.list(include_drafts).await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
