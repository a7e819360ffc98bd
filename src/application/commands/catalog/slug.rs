// src/application/commands/catalog/slug.rs
use std::collections::HashSet;
use std::future::Future;

use super::CatalogCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        catalog::{RecordKind, Slug, SlugIndex},
        errors::{DomainError, DomainResult},
    },
};

/// How many times a create is re-attempted after the unique index rejects its slug.
const INSERT_RETRIES: u32 = 1;

impl CatalogCommandService {
    /// Assigns a fresh slug against the current contents of `index` and hands it to
    /// `insert`. A slug rejected by the store is excluded and the create retried once.
    pub(super) async fn insert_with_unique_slug<I, T, F, Fut>(
        &self,
        index: &I,
        kind: RecordKind,
        display_text: &str,
        mut insert: F,
    ) -> ApplicationResult<T>
    where
        I: SlugIndex + ?Sized,
        F: FnMut(Slug) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        let stem = self.slug_assigner.stem(display_text, kind)?;
        let prefix = self.slug_assigner.candidate_prefix(&stem, kind);
        let mut rejected: HashSet<String> = HashSet::new();
        let mut attempt = 0;

        loop {
            let taken = index.slugs_with_prefix(prefix).await?;
            let slug = self.slug_assigner.assign_slug_on_create(
                None,
                true,
                display_text,
                kind,
                |candidate| taken.contains(candidate) || rejected.contains(candidate),
            )?;

            match insert(slug.clone()).await {
                Ok(record) => {
                    tracing::debug!(%kind, %slug, attempt, "slug assigned");
                    return Ok(record);
                }
                Err(err) if err.is_slug_conflict() && attempt < INSERT_RETRIES => {
                    tracing::warn!(%kind, %slug, "slug claimed concurrently, retrying create");
                    rejected.insert(slug.into_inner());
                    attempt += 1;
                }
                Err(err) if err.is_slug_conflict() => {
                    return Err(DomainError::UniquenessConflict(format!(
                        "{kind} slug {slug} still taken after retry"
                    ))
                    .into());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
