// src/domain/catalog/services/mod.rs
use std::sync::Arc;

use crate::domain::catalog::value_objects::{RecordKind, Slug};
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_SUFFIX_LIMIT: u32 = 1000;

/// Turns free text into a slug-ish string. Output is re-sanitized by [`SlugAssigner`].
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Domain service that derives a record's slug once, when the record is first created.
///
/// Collisions are resolved by appending `-2`, `-3`, ... to the stem, trimming the
/// stem so the result still fits the record kind's slug column.
pub struct SlugAssigner {
    generator: Arc<dyn SlugGenerator>,
    suffix_limit: u32,
}

impl SlugAssigner {
    #[must_use]
    pub fn new(generator: Arc<dyn SlugGenerator>, suffix_limit: u32) -> Self {
        Self {
            generator,
            suffix_limit,
        }
    }

    #[must_use]
    pub fn with_default_limit(generator: Arc<dyn SlugGenerator>) -> Self {
        Self::new(generator, DEFAULT_SUFFIX_LIMIT)
    }

    /// Returns the slug for a record.
    ///
    /// When `is_new` is false the stored `current` slug is returned untouched and
    /// `display_text` is ignored. Otherwise a fresh slug is derived and checked
    /// against `is_taken` until a free candidate is found.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidInput`] when `display_text` normalizes to nothing.
    /// - [`DomainError::UniquenessConflict`] when every suffix up to the limit is taken.
    /// - [`DomainError::Validation`] when `is_new` is false but `current` is missing.
    pub fn assign_slug_on_create<F>(
        &self,
        current: Option<&Slug>,
        is_new: bool,
        display_text: &str,
        kind: RecordKind,
        is_taken: F,
    ) -> DomainResult<Slug>
    where
        F: FnMut(&str) -> bool,
    {
        if !is_new {
            return current.cloned().ok_or_else(|| {
                DomainError::Validation(format!("persisted {kind} has no slug"))
            });
        }

        let stem = self.stem(display_text, kind)?;
        self.disambiguate(&stem, kind, is_taken)
    }

    /// Normalized, width-limited slug before any numeric suffix.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] when `display_text` normalizes to nothing.
    pub fn stem(&self, display_text: &str, kind: RecordKind) -> DomainResult<String> {
        if display_text.trim().is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "{kind} display text cannot be empty"
            )));
        }

        let normalized = sanitize(&self.generator.slugify(display_text));
        let stem = truncate_stem(&normalized, kind.max_slug_len());
        if stem.is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "{display_text:?} has no url-safe characters"
            )));
        }
        Ok(stem.to_string())
    }

    /// Prefix shared by `stem` and every suffixed candidate [`Self::assign_slug_on_create`]
    /// can derive from it. Suffixes shorten the stem to fit the column, so this is the
    /// stem cut for the widest suffix allowed.
    #[must_use]
    pub fn candidate_prefix<'a>(&self, stem: &'a str, kind: RecordKind) -> &'a str {
        let widest_suffix = format!("-{}", u64::from(self.suffix_limit) + 1).len();
        truncate_stem(stem, kind.max_slug_len().saturating_sub(widest_suffix))
    }

    fn disambiguate<F>(&self, stem: &str, kind: RecordKind, mut is_taken: F) -> DomainResult<Slug>
    where
        F: FnMut(&str) -> bool,
    {
        if !is_taken(stem) {
            return Slug::new(stem);
        }

        let max_len = kind.max_slug_len();
        for n in 2..=u64::from(self.suffix_limit) + 1 {
            let suffix = format!("-{n}");
            let base = truncate_stem(stem, max_len.saturating_sub(suffix.len()));
            if base.is_empty() {
                break;
            }
            let candidate = format!("{base}{suffix}");
            if !is_taken(&candidate) {
                return Slug::new(candidate);
            }
        }

        Err(DomainError::UniquenessConflict(format!(
            "no free {kind} slug for {stem:?} after {} suffixes",
            self.suffix_limit
        )))
    }
}

/// Keeps `[a-z0-9]`, lowercases ASCII, and collapses every other run into one hyphen.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_hyphen = false;
    for c in raw.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

// Input is ASCII after `sanitize`, so byte slicing is on char boundaries.
fn truncate_stem(stem: &str, max_len: usize) -> &str {
    if stem.len() <= max_len {
        stem
    } else {
        stem[..max_len].trim_end_matches('-')
    }
}
