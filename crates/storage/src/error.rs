use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Page {page} doesn't exist (total pages: {total_pages})")]
    InvalidPage { page: u32, total_pages: u32 },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = StorageError::NotFound("Professor");
        assert_eq!(err.to_string(), "Professor not found");
    }

    #[test]
    fn test_invalid_page_message() {
        let err = StorageError::InvalidPage {
            page: 4,
            total_pages: 3,
        };
        assert_eq!(err.to_string(), "Page 4 doesn't exist (total pages: 3)");
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        let err = StorageError::ConstraintViolation("duplicate".to_string());
        assert!(!err.is_unique_violation());
    }
}
