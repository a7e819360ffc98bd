use super::{CatalogQueryService, GetBySlugQuery};
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::RecordKind,
};

impl CatalogQueryService {
    /// # Errors
    ///
    /// Returns not found for an unknown, malformed or hidden slug.
    pub async fn get_category_by_slug(
        &self,
        query: GetBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let slug = Self::parse_slug(&query.slug, RecordKind::Category)?;
        let category = self
            .categories
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        Self::ensure_visible(category.public, query.include_drafts, RecordKind::Category)?;
        Ok(category.into())
    }

    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_categories(&self, include_drafts: bool) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list(include_drafts).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
