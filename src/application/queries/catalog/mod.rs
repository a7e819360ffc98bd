mod categories;
mod posts;
mod service;
mod tags;

pub use posts::ListPostsQuery;
pub use service::{CatalogQueryService, GetBySlugQuery};
