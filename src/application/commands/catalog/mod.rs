// src/application/commands/catalog/mod.rs
mod categories;
mod posts;
mod service;
mod slug;
mod tags;

pub use categories::{CreateCategoryCommand, UpdateCategoryCommand};
pub use posts::{CreatePostCommand, CreatePostCommandBuilder, UpdatePostCommand};
pub use service::CatalogCommandService;
pub use tags::{CreateTagCommand, UpdateTagCommand};
