// src/application/commands/catalog/tags.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{NewTag, RecordKind, TagId, TagText},
};

pub struct CreateTagCommand {
    pub tag: String,
    pub public: bool,
}

pub struct UpdateTagCommand {
    pub id: i64,
    pub tag: String,
}

impl CatalogCommandService {
    /// Creates a tag with a fresh unique slug.
    ///
    /// # Errors
    ///
    /// Fails on invalid input, duplicate tag text, or when no free slug can be claimed.
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let tag = TagText::new(command.tag)?;
        let now = self.clock.now();

        let new_tag = NewTag {
            tag,
            public: command.public,
            created_at: now,
            updated_at: now,
        };

        let tags = &*self.tags;
        let draft = &new_tag;
        let created = self
            .insert_with_unique_slug(tags, RecordKind::Tag, new_tag.tag.as_str(), move |slug| {
                tags.insert(draft, slug)
            })
            .await?;

        tracing::info!(tag_id = created.id.0, slug = %created.slug, "tag created");
        Ok(created.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown id and a validation error for bad text.
    pub async fn update_tag(&self, command: UpdateTagCommand) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let mut tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        tag.set_text(TagText::new(command.tag)?, self.clock.now());
        tag.slug = self.slug_assigner.assign_slug_on_create(
            Some(&tag.slug),
            false,
            tag.tag.as_str(),
            RecordKind::Tag,
            |_| false,
        )?;

        let updated = self.tags.update(&tag).await?;
        Ok(updated.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown id.
    pub async fn set_tag_public(&self, id: i64, public: bool) -> ApplicationResult<TagDto> {
        let id = TagId::new(id)?;
        let mut tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        if tag.public == public {
            return Ok(tag.into());
        }

        tag.set_public(public, self.clock.now());
        let updated = self.tags.update(&tag).await?;
        tracing::info!(tag_id = updated.id.0, public, "tag visibility changed");
        Ok(updated.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown id.
    pub async fn delete_tag(&self, id: i64) -> ApplicationResult<()> {
        let id = TagId::new(id)?;
        if self.tags.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("tag not found"));
        }
        self.tags.delete(id).await?;
        tracing::info!(tag_id = id.0, "tag deleted");
        Ok(())
    }
}
