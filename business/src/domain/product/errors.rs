use crate::domain::errors::RepositoryError;

/// Failures of catalog operations. The `Display` output is the message shown to callers.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("name, description and category are required.")]
    MissingProductFields,
    #[error("amount must be higher or equal to 0")]
    NegativeAmount,
    #[error("product with this name already exists.")]
    AlreadyExists,
    #[error("name and amount are required.")]
    MissingUpdateFields,
    #[error("product name is required.")]
    NameRequired,
    #[error("product not found.")]
    NotFound,
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),
}
