// src/config.rs
use crate::domain::catalog::services::DEFAULT_SUFFIX_LIMIT;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    database_url: String,
    max_connections: u32,
    slug_suffix_limit: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://catalog.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    16
}

impl CatalogConfig {
    /// Build configuration from environment variables, falling back to defaults
    /// for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid(
                "DATABASE_URL must be a sqlite: url".into(),
            ));
        }

        let max_connections = parse_positive(&lookup, "DATABASE_MAX_CONNECTIONS")?
            .unwrap_or_else(default_max_connections);
        let slug_suffix_limit =
            parse_positive(&lookup, "SLUG_SUFFIX_LIMIT")?.unwrap_or(DEFAULT_SUFFIX_LIMIT);

        Ok(Self {
            database_url,
            max_connections,
            slug_suffix_limit,
        })
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// How many `-N` suffixes the slug assigner tries before giving up.
    #[must_use]
    pub const fn slug_suffix_limit(&self) -> u32 {
        self.slug_suffix_limit
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(Some(value)),
            _ => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got {raw:?}"
            ))),
        },
    }
}
