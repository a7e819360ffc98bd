// src/application/ports/util.rs
pub use crate::domain::catalog::services::SlugGenerator;
