use crate::domain::catalog::{Category, Level, Post, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub text: String,
    pub category_id: i64,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub link_external_tool: Option<String>,
    pub public: bool,
    pub author_id: i64,
    pub absolute_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let absolute_url = post.absolute_url();
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            description: post.description,
            slug: post.slug.into_inner(),
            text: post.text,
            category_id: post.category_id.into(),
            level: post.level,
            tag_ids: post.tag_ids.into_iter().map(Into::into).collect(),
            link_external_tool: post.link_external_tool.map(|link| link.into_inner()),
            public: post.public,
            author_id: post.author_id.into(),
            absolute_url,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub public: bool,
    pub absolute_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        let absolute_url = category.absolute_url();
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
            public: category.public,
            absolute_url,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    pub tag: String,
    pub slug: String,
    pub public: bool,
    pub absolute_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        let absolute_url = tag.absolute_url();
        Self {
            id: tag.id.into(),
            tag: tag.tag.into_inner(),
            slug: tag.slug.into_inner(),
            public: tag.public,
            absolute_url,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }
}
