use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::status::OperationStatus;

/// Coordinator owning the product catalog.
///
/// The working set is the read path; when a repository is configured every
/// mutation is written through to it while the state lock is held, so other
/// callers observe either the whole operation or none of it. A failed store
/// write is reported as `InternalError` and the working set is not rolled back;
/// the next [`ProductsManager::load`] resynchronizes from the store.
///
/// The use-case traits are implemented in the sibling modules, one per operation.
pub struct ProductsManager {
    pub(super) repository: Option<Arc<dyn ProductRepository>>,
    pub(super) logger: Arc<dyn Logger>,
    state: Mutex<CatalogState>,
}

pub(super) struct CatalogState {
    pub(super) products: Vec<Product>,
    last_status: OperationStatus,
}

impl CatalogState {
    /// Linear scan by name; names are unique so the first match is the only one.
    pub(super) fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|product| product.name == name)
    }
}

impl ProductsManager {
    /// Manager without a backing store. Products live for the process lifetime only.
    pub fn in_memory(logger: Arc<dyn Logger>) -> Self {
        Self::with_products(None, logger, Vec::new())
    }

    /// Ensures the store collection exists and loads every persisted product.
    pub async fn load(
        repository: Arc<dyn ProductRepository>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, ProductError> {
        repository.ensure_collection().await.inspect_err(|err| {
            logger.error(&format!("Error creating products collection: {}", err));
        })?;

        let products = repository.find_all().await.inspect_err(|err| {
            logger.error(&format!("Error loading products: {}", err));
        })?;

        logger.info(&format!("Loaded {} products from store", products.len()));
        Ok(Self::with_products(Some(repository), logger, products))
    }

    fn with_products(
        repository: Option<Arc<dyn ProductRepository>>,
        logger: Arc<dyn Logger>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            repository,
            logger,
            state: Mutex::new(CatalogState {
                products,
                last_status: OperationStatus::Ok,
            }),
        }
    }

    /// Status of the most recently completed operation, whoever issued it.
    pub async fn last_status(&self) -> OperationStatus {
        self.state.lock().await.last_status
    }

    pub async fn product_count(&self) -> usize {
        self.state.lock().await.products.len()
    }

    pub(super) async fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().await
    }

    /// Records the outcome of an operation as the last status and hands the result back.
    pub(super) fn settle<T>(
        &self,
        state: &mut CatalogState,
        result: Result<T, ProductError>,
        success: OperationStatus,
    ) -> Result<T, ProductError> {
        state.last_status = match &result {
            Ok(_) => success,
            Err(err) => {
                let status = OperationStatus::from(err);
                if status == OperationStatus::InternalError {
                    self.logger.error(&format!("Error occurred: {}", err));
                } else {
                    self.logger.warn(&format!("Request rejected: {}", err));
                }
                status
            }
        };
        result
    }
}

/// A required text field is absent or blank.
pub(super) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
