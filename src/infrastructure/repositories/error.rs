use crate::domain::errors::DomainError;

// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>".
const UNIQUE_PREFIX: &str = "UNIQUE constraint failed: ";

const COL_POST_SLUG: &str = "posts.slug";
const COL_CATEGORY_SLUG: &str = "categories.slug";
const COL_TAG_SLUG: &str = "tags.slug";
const COL_CATEGORY_NAME: &str = "categories.name";
const COL_TAG_TEXT: &str = "tags.tag";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() {
                let column = message.strip_prefix(UNIQUE_PREFIX).unwrap_or(message);
                return match column {
                    COL_POST_SLUG | COL_CATEGORY_SLUG | COL_TAG_SLUG => {
                        DomainError::SlugConflict(column.to_string())
                    }
                    COL_CATEGORY_NAME => {
                        DomainError::Conflict("category name already exists".into())
                    }
                    COL_TAG_TEXT => DomainError::Conflict("tag already exists".into()),
                    _ => DomainError::Conflict("unique constraint violated".into()),
                };
            }

            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
