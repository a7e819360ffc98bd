// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryCategoryRepo, InMemoryPostRepo, InMemoryTagRepo};
use catalog_core::application::commands::catalog::{
    CatalogCommandService, CreateCategoryCommand, CreateTagCommand,
};
use catalog_core::application::dto::{CategoryDto, TagDto};
use catalog_core::application::queries::catalog::CatalogQueryService;
use catalog_core::application::services::ApplicationServices;
use catalog_core::domain::catalog::services::DEFAULT_SUFFIX_LIMIT;
use catalog_core::infrastructure::util::DefaultSlugGenerator;

/// Services wired to in-memory repositories, keeping handles to the repositories
/// so tests can inspect or sabotage them.
pub struct TestCatalog {
    pub posts: Arc<InMemoryPostRepo>,
    pub categories: Arc<InMemoryCategoryRepo>,
    pub tags: Arc<InMemoryTagRepo>,
    pub services: ApplicationServices,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::with_suffix_limit(DEFAULT_SUFFIX_LIMIT)
    }

    pub fn with_suffix_limit(limit: u32) -> Self {
        let posts = Arc::new(InMemoryPostRepo::new());
        let categories = Arc::new(InMemoryCategoryRepo::new());
        let tags = Arc::new(InMemoryTagRepo::new());

        let services = ApplicationServices::new(
            posts.clone(),
            categories.clone(),
            tags.clone(),
            Arc::new(FixedClock),
            Arc::new(DefaultSlugGenerator),
            limit,
        );

        Self {
            posts,
            categories,
            tags,
            services,
        }
    }

    pub fn commands(&self) -> &CatalogCommandService {
        &self.services.catalog_commands
    }

    pub fn queries(&self) -> &CatalogQueryService {
        &self.services.catalog_queries
    }

    pub async fn category(&self, name: &str, public: bool) -> CategoryDto {
        self.commands()
            .create_category(CreateCategoryCommand {
                name: name.into(),
                description: String::new(),
                public,
            })
            .await
            .expect("create category")
    }

    pub async fn tag(&self, tag: &str, public: bool) -> TagDto {
        self.commands()
            .create_tag(CreateTagCommand {
                tag: tag.into(),
                public,
            })
            .await
            .expect("create tag")
    }
}
