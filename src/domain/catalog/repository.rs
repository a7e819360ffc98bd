#![allow(clippy::missing_errors_doc)]
use crate::domain::catalog::entity::{Category, NewCategory, NewPost, NewTag, Post, Tag};
use crate::domain::catalog::value_objects::{CategoryId, Level, PostId, Slug, TagId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashSet;

/// Lookup of slugs already stored in one table.
///
/// Every method of the repository traits below fails with a
/// [`DomainError`](crate::domain::errors::DomainError) when the store rejects or cannot
/// serve the call.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    /// Every stored slug starting with `prefix`.
    async fn slugs_with_prefix(&self, prefix: &str) -> DomainResult<HashSet<String>>;
}

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub include_drafts: bool,
    pub category_id: Option<CategoryId>,
    pub tag_id: Option<TagId>,
    pub level: Option<Level>,
}

#[async_trait]
pub trait PostRepository: SlugIndex {
    async fn insert(&self, post: &NewPost, slug: Slug) -> DomainResult<Post>;
    async fn update(&self, post: &Post) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>>;
}

#[async_trait]
pub trait CategoryRepository: SlugIndex {
    async fn insert(&self, category: &NewCategory, slug: Slug) -> DomainResult<Category>;
    async fn update(&self, category: &Category) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Category>>;
}

#[async_trait]
pub trait TagRepository: SlugIndex {
    async fn insert(&self, tag: &NewTag, slug: Slug) -> DomainResult<Tag>;
    async fn update(&self, tag: &Tag) -> DomainResult<Tag>;
    async fn delete(&self, id: TagId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Tag>>;
}
