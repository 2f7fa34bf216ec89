use crate::domain::errors::DomainError;

// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>".
const COL_ARTICLE_SLUG_ID: &str = "articles.slug_id";
const COL_ARTICLE_SLUG: &str = "articles.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() {
                // `articles.slug_id` contains `articles.slug`; check it first.
                return if message.contains(COL_ARTICLE_SLUG_ID) {
                    DomainError::conflict("slug id already exists")
                } else if message.contains(COL_ARTICLE_SLUG) {
                    DomainError::conflict("slug already exists")
                } else {
                    DomainError::conflict("unique constraint violated")
                };
            }

            if db_err.is_check_violation() {
                return DomainError::validation(format!("check constraint violated: {message}"));
            }

            DomainError::persistence(message)
        }
        sqlx::Error::RowNotFound => DomainError::not_found("row not found"),
        _ => DomainError::persistence(err.to_string()),
    }
}
