// tests/support/mocks/mod.rs
pub mod catalog_repos;
pub mod time;
pub mod util;

pub use catalog_repos::{InMemoryCategoryRepo, InMemoryPostRepo, InMemoryTagRepo};
pub use time::fixed_now;
pub use util::FixedClock;
