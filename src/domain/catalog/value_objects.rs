// src/domain/catalog/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! positive_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            /// # Errors
            ///
            /// Returns [`DomainError::Validation`] when `id` is zero or negative.
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(
                        concat!($label, " id must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_id!(PostId, "post");
positive_id!(CategoryId, "category");
positive_id!(TagId, "tag");
positive_id!(AuthorId, "author");

/// Which catalog table a record lives in. Drives slug column width and routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Post,
    Category,
    Tag,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RecordKind::Post => "post",
            RecordKind::Category => "category",
            RecordKind::Tag => "tag",
        }
    }

    #[must_use]
    pub const fn max_slug_len(self) -> usize {
        match self {
            RecordKind::Post => 210,
            RecordKind::Category | RecordKind::Tag => 50,
        }
    }

    #[must_use]
    pub fn route_for(self, slug: &Slug) -> String {
        format!("/catalog/{}/{}/", self.as_str(), slug)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn bounded_text(value: String, field: &str, max_chars: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max_chars {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub const MAX_CHARS: usize = 110;

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] for blank text and
    /// [`DomainError::Validation`] when it exceeds [`Self::MAX_CHARS`].
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "title", Self::MAX_CHARS).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub const MAX_CHARS: usize = 110;

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] for blank text and
    /// [`DomainError::Validation`] when it exceeds [`Self::MAX_CHARS`].
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "category name", Self::MAX_CHARS).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagText(String);

impl TagText {
    pub const MAX_CHARS: usize = 80;

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInput`] for blank text and
    /// [`DomainError::Validation`] when it exceeds [`Self::MAX_CHARS`].
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "tag", Self::MAX_CHARS).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe identifier: lowercase ASCII alphanumeric runs joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] unless `value` is lowercase kebab-case.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug must be lowercase kebab-case: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Level::Beginner => 1,
            Level::Intermediate => 2,
            Level::Advanced => 3,
        }
    }
}

impl TryFrom<i64> for Level {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Beginner),
            2 => Ok(Level::Intermediate),
            3 => Ok(Level::Advanced),
            other => Err(DomainError::Validation(format!(
                "level must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink(String);

impl ExternalLink {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] unless `value` is an absolute http(s) url.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !value.chars().any(char::is_whitespace) => {
                Ok(Self(value))
            }
            _ => Err(DomainError::Validation(
                "external tool link must be an absolute http(s) url".into(),
            )),
        }
    }

    /// Blank input means "no link".
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`] for non-blank input.
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(v) if v.trim().is_empty() => Ok(None),
            Some(v) => Self::new(v.trim().to_string()).map(Some),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert!(PostId::new(0).is_err());
        assert!(TagId::new(-3).is_err());
        assert_eq!(i64::from(CategoryId::new(7).unwrap()), 7);
    }

    #[test]
    fn title_limits_are_in_chars() {
        let exact = "é".repeat(PostTitle::MAX_CHARS);
        assert!(PostTitle::new(exact).is_ok());
        let over = "a".repeat(PostTitle::MAX_CHARS + 1);
        assert!(PostTitle::new(over).is_err());
        assert!(PostTitle::new("   ").is_err());
    }

    #[test]
    fn tag_text_is_capped_at_80() {
        assert!(TagText::new("a".repeat(80)).is_ok());
        assert!(TagText::new("a".repeat(81)).is_err());
    }

    #[test]
    fn slug_rejects_non_kebab_case() {
        assert!(Slug::new("hola-mundo").is_ok());
        assert!(Slug::new("python-2").is_ok());
        for bad in ["", "-a", "a-", "a--b", "Hola", "a b", "ñ"] {
            assert!(Slug::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn level_round_trips_through_storage_code() {
        assert_eq!(Level::try_from(2).unwrap(), Level::Intermediate);
        assert_eq!(Level::Advanced.as_i64(), 3);
        assert!(Level::try_from(4).is_err());
    }

    #[test]
    fn external_link_requires_http_scheme() {
        assert!(ExternalLink::new("https://example.com/tool").is_ok());
        assert!(ExternalLink::new("ftp://example.com").is_err());
        assert!(ExternalLink::new("https://").is_err());
        assert!(ExternalLink::new("https://exa mple.com").is_err());
        assert_eq!(ExternalLink::parse_optional(Some("  ".into())).unwrap(), None);
    }

    #[test]
    fn routes_are_kind_scoped() {
        let slug = Slug::new("hola-mundo").unwrap();
        assert_eq!(RecordKind::Post.route_for(&slug), "/catalog/post/hola-mundo/");
        assert_eq!(RecordKind::Tag.route_for(&slug), "/catalog/tag/hola-mundo/");
    }
}
