/// Repository errors for domain layer.
///
/// `DatabaseError` carries failures reported by the store itself, `Persistence`
/// anything else that went wrong around a store call.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("record with this key already exists")]
    Duplicated,
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("unexpected error: {0}")]
    Persistence(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error(detail: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(detail.into())
    }
    pub fn persistence(detail: impl Into<String>) -> Self {
        RepositoryError::Persistence(detail.into())
    }
}
