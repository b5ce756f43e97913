use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Persistent document store backing the catalog across restarts.
///
/// Each call is one scoped store operation; connection handling belongs to the adapter.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates the products collection with its field-shape validation if missing.
    async fn ensure_collection(&self) -> Result<(), RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when no record has this name.
    async fn update_amount(&self, name: &str, amount: f64) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when no record has this name.
    async fn delete(&self, name: &str) -> Result<(), RepositoryError>;
}
