pub mod catalog;

pub use catalog::{CategoryDto, PostDto, TagDto};
