// src/application/commands/catalog/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::catalog::{CategoryRepository, PostRepository, SlugAssigner, TagRepository},
};

pub struct CatalogCommandService {
    pub(super) posts: Arc<dyn PostRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) slug_assigner: Arc<SlugAssigner>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CatalogCommandService {
    #[must_use]
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        slug_assigner: Arc<SlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            categories,
            tags,
            slug_assigner,
            clock,
        }
    }
}
