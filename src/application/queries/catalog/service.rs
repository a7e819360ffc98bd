use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::catalog::{CategoryRepository, PostRepository, RecordKind, Slug, TagRepository},
};

pub struct CatalogQueryService {
    pub(super) posts: Arc<dyn PostRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) tags: Arc<dyn TagRepository>,
}

/// Lookup by slug. Non-public records are hidden unless `include_drafts` is set.
pub struct GetBySlugQuery {
    pub slug: String,
    pub include_drafts: bool,
}

impl GetBySlugQuery {
    #[must_use]
    pub fn public(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            include_drafts: false,
        }
    }
}

impl CatalogQueryService {
    #[must_use]
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            posts,
            categories,
            tags,
        }
    }

    /// A malformed slug cannot match any record, so it is reported as not found.
    pub(super) fn parse_slug(raw: &str, kind: RecordKind) -> ApplicationResult<Slug> {
        Slug::new(raw).map_err(|_| ApplicationError::not_found(format!("{kind} not found")))
    }

    pub(super) fn ensure_visible(
        public: bool,
        include_drafts: bool,
        kind: RecordKind,
    ) -> ApplicationResult<()> {
        if public || include_drafts {
            Ok(())
        } else {
            Err(ApplicationError::not_found(format!("{kind} not found")))
        }
    }
}
