// src/application/commands/catalog/categories.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{CategoryId, CategoryName, NewCategory, RecordKind},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CatalogCommandService {
    /// Creates a category with a fresh unique slug.
    ///
    /// # Errors
    ///
    /// Fails on invalid input, a duplicate name, or when no free slug can be claimed.
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let now = self.clock.now();

        let new_category = NewCategory {
            name,
            description: command.description,
            public: command.public,
            created_at: now,
            updated_at: now,
        };

        let categories = &*self.categories;
        let draft = &new_category;
        let created = self
            .insert_with_unique_slug(
                categories,
                RecordKind::Category,
                new_category.name.as_str(),
                move |slug| categories.insert(draft, slug),
            )
            .await?;

        tracing::info!(category_id = created.id.0, slug = %created.slug, "category created");
        Ok(created.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown id and a validation error for a bad name.
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let now = self.clock.now();

        if let Some(name) = command.name {
            category.rename(CategoryName::new(name)?, now);
        }
        if let Some(description) = command.description {
            category.description = description;
            category.updated_at = now;
        }

        category.slug = self.slug_assigner.assign_slug_on_create(
            Some(&category.slug),
            false,
            category.name.as_str(),
            RecordKind::Category,
            |_| false,
        )?;

        let updated = self.categories.update(&category).await?;
        Ok(updated.into())
    }

    /// # Errors
    ///
    /// Returns not found for an unknown id.
    pub async fn set_category_public(
        &self,
        id: i64,
        public: bool,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(id)?;
        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        if category.public == public {
            return Ok(category.into());
        }

        category.set_public(public, self.clock.now());
        let updated = self.categories.update(&category).await?;
        tracing::info!(category_id = updated.id.0, public, "category visibility changed");
        Ok(updated.into())
    }

    /// Deleting a category also deletes its posts.
    ///
    /// # Errors
    ///
    /// Returns not found for an unknown id.
    pub async fn delete_category(&self, id: i64) -> ApplicationResult<()> {
        let id = CategoryId::new(id)?;
        if self.categories.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }
        self.categories.delete(id).await?;
        tracing::info!(category_id = id.0, "category deleted");
        Ok(())
    }
}
