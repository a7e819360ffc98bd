// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::catalog::CatalogCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::catalog::CatalogQueryService,
    },
    domain::catalog::{CategoryRepository, PostRepository, SlugAssigner, TagRepository},
};

pub struct ApplicationServices {
    pub catalog_commands: Arc<CatalogCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_suffix_limit: u32,
    ) -> Self {
        let slug_assigner = Arc::new(SlugAssigner::new(Arc::clone(&slugger), slug_suffix_limit));

        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&posts),
            Arc::clone(&categories),
            Arc::clone(&tags),
            Arc::clone(&slug_assigner),
            Arc::clone(&clock),
        ));

        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&posts),
            Arc::clone(&categories),
            Arc::clone(&tags),
        ));

        Self {
            catalog_commands,
            catalog_queries,
        }
    }
}
