// src/domain/catalog/entity.rs
use crate::domain::catalog::value_objects::{
    AuthorId, CategoryId, CategoryName, ExternalLink, Level, PostId, PostTitle, RecordKind,
    Slug, TagId, TagText,
};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub description: String,
    pub slug: Slug,
    pub text: String,
    pub category_id: CategoryId,
    pub level: Option<Level>,
    pub tag_ids: Vec<TagId>,
    pub link_external_tool: Option<ExternalLink>,
    pub public: bool,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Relative url of the post inside the catalog (route `catalog_post`).
    #[must_use]
    pub fn absolute_url(&self) -> String {
        RecordKind::Post.route_for(&self.slug)
    }

    pub fn set_public(&mut self, public: bool, now: DateTime<Utc>) {
        self.public = public;
        self.updated_at = now;
    }

    pub fn set_title(&mut self, title: PostTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Post: {}", self.title)
    }
}

/// A post that has not been persisted yet. The slug is supplied at insert time.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub description: String,
    pub text: String,
    pub category_id: CategoryId,
    pub level: Option<Level>,
    pub tag_ids: Vec<TagId>,
    pub link_external_tool: Option<ExternalLink>,
    pub public: bool,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub description: String,
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    #[must_use]
    pub fn absolute_url(&self) -> String {
        RecordKind::Category.route_for(&self.slug)
    }

    pub fn set_public(&mut self, public: bool, now: DateTime<Utc>) {
        self.public = public;
        self.updated_at = now;
    }

    pub fn rename(&mut self, name: CategoryName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: String,
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub tag: TagText,
    pub slug: Slug,
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    #[must_use]
    pub fn absolute_url(&self) -> String {
        RecordKind::Tag.route_for(&self.slug)
    }

    pub fn set_public(&mut self, public: bool, now: DateTime<Utc>) {
        self.public = public;
        self.updated_at = now;
    }

    pub fn set_text(&mut self, tag: TagText, now: DateTime<Utc>) {
        self.tag = tag;
        self.updated_at = now;
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub tag: TagText,
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
