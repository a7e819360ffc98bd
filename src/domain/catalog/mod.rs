pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Category, NewCategory, NewPost, NewTag, Post, Tag};
pub use repository::{CategoryRepository, PostFilter, PostRepository, SlugIndex, TagRepository};
pub use services::{SlugAssigner, SlugGenerator};
pub use value_objects::{
    AuthorId, CategoryId, CategoryName, ExternalLink, Level, PostId, PostTitle, RecordKind, Slug,
    TagId, TagText,
};
