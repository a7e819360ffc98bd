// src/application/commands/catalog/posts.rs
use std::collections::BTreeSet;

use super::CatalogCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{
        AuthorId, CategoryId, ExternalLink, Level, NewPost, PostId, PostTitle, RecordKind, TagId,
    },
};

#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: String,
    pub description: String,
    pub text: String,
    pub category_id: i64,
    pub level: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub link_external_tool: Option<String>,
    pub public: bool,
    pub author_id: i64,
}

impl CreatePostCommand {
    #[must_use]
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    description: String,
    text: String,
    category_id: Option<i64>,
    level: Option<i64>,
    tag_ids: Vec<i64>,
    link_external_tool: Option<String>,
    public: bool,
    author_id: Option<i64>,
}

impl CreatePostCommandBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn tag_ids(mut self, tag_ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    #[must_use]
    pub fn link_external_tool(mut self, link: impl Into<String>) -> Self {
        self.link_external_tool = Some(link.into());
        self
    }

    #[must_use]
    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    #[must_use]
    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] when the title, category or author is unset.
    pub fn build(self) -> ApplicationResult<CreatePostCommand> {
        let required = |field: &str| ApplicationError::validation(format!("{field} is required"));
        Ok(CreatePostCommand {
            title: self.title.ok_or_else(|| required("title"))?,
            description: self.description,
            text: self.text,
            category_id: self.category_id.ok_or_else(|| required("category_id"))?,
            level: self.level,
            tag_ids: self.tag_ids,
            link_external_tool: self.link_external_tool,
            public: self.public,
            author_id: self.author_id.ok_or_else(|| required("author_id"))?,
        })
    }
}

/// Partial update. The slug is never part of it: it is fixed at creation.
#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub category_id: Option<i64>,
    pub level: Option<Option<i64>>,
    pub tag_ids: Option<Vec<i64>>,
    pub link_external_tool: Option<Option<String>>,
}

impl CatalogCommandService {
    /// Creates a post with a fresh unique slug.
    ///
    /// # Errors
    ///
    /// Fails on invalid fields, an unknown category or tag, or when no free slug can be
    /// claimed.
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let category_id = self.existing_category(command.category_id).await?;
        let tag_ids = self.existing_tags(command.tag_ids).await?;
        let level = command.level.map(Level::try_from).transpose()?;
        let link_external_tool = ExternalLink::parse_optional(command.link_external_tool)?;
        let author_id = AuthorId::new(command.author_id)?;
        let now = self.clock.now();

        let new_post = NewPost {
            title,
            description: command.description,
            text: command.text,
            category_id,
            level,
            tag_ids,
            link_external_tool,
            public: command.public,
            author_id,
            created_at: now,
            updated_at: now,
        };

        let posts = &*self.posts;
        let draft = &new_post;
        let created = self
            .insert_with_unique_slug(posts, RecordKind::Post, new_post.title.as_str(), move |slug| {
                posts.insert(draft, slug)
            })
            .await?;

        tracing::info!(post_id = created.id.0, slug = %created.slug, "post created");
        Ok(created.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown post, category or tag, and a validation error
    /// for bad fields.
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        let now = self.clock.now();

        if let Some(title) = command.title {
            post.set_title(PostTitle::new(title)?, now);
        }
        if let Some(description) = command.description {
            post.description = description;
        }
        if let Some(text) = command.text {
            post.text = text;
        }
        if let Some(category_id) = command.category_id {
            post.category_id = self.existing_category(category_id).await?;
        }
        if let Some(level) = command.level {
            post.level = level.map(Level::try_from).transpose()?;
        }
        if let Some(tag_ids) = command.tag_ids {
            post.tag_ids = self.existing_tags(tag_ids).await?;
        }
        if let Some(link) = command.link_external_tool {
            post.link_external_tool = ExternalLink::parse_optional(link)?;
        }

        post.slug = self.slug_assigner.assign_slug_on_create(
            Some(&post.slug),
            false,
            post.title.as_str(),
            RecordKind::Post,
            |_| false,
        )?;
        post.touch(now);

        let updated = self.posts.update(&post).await?;
        Ok(updated.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown id.
    pub async fn set_post_public(&self, id: i64, public: bool) -> ApplicationResult<PostDto> {
        let id = PostId::new(id)?;
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if post.public == public {
            return Ok(post.into());
        }

        post.set_public(public, self.clock.now());
        let updated = self.posts.update(&post).await?;
        tracing::info!(post_id = updated.id.0, public, "post visibility changed");
        Ok(updated.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown id.
    pub async fn delete_post(&self, id: i64) -> ApplicationResult<()> {
        let id = PostId::new(id)?;
        if self.posts.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }
        self.posts.delete(id).await?;
        tracing::info!(post_id = id.0, "post deleted");
        Ok(())
    }

    async fn existing_category(&self, id: i64) -> ApplicationResult<CategoryId> {
        let id = CategoryId::new(id)?;
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(ApplicationError::not_found(format!("category {} not found", id.0))),
        }
    }

    async fn existing_tags(&self, ids: Vec<i64>) -> ApplicationResult<Vec<TagId>> {
        let unique: BTreeSet<i64> = ids.into_iter().collect();
        let mut tag_ids = Vec::with_capacity(unique.len());
        for raw in unique {
            let id = TagId::new(raw)?;
            if self.tags.find_by_id(id).await?.is_none() {
                return Err(ApplicationError::not_found(format!("tag {raw} not found")));
            }
            tag_ids.push(id);
        }
        Ok(tag_ids)
    }
}
