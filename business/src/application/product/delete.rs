use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::status::OperationStatus;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

use super::manager::{CatalogState, ProductsManager, is_blank};

#[async_trait]
impl DeleteProductUseCase for ProductsManager {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Deleting product: {}",
            params.name.as_deref().unwrap_or_default()
        ));

        let mut state = self.lock().await;
        let result = self.delete_product(&mut state, params).await;
        self.settle(&mut state, result, OperationStatus::Ok)
    }
}

impl ProductsManager {
    async fn delete_product(
        &self,
        state: &mut CatalogState,
        params: DeleteProductParams,
    ) -> Result<(), ProductError> {
        if is_blank(&params.name) {
            return Err(ProductError::NameRequired);
        }

        let name = params.name.unwrap_or_default();
        let index = state.position(&name).ok_or(ProductError::NotFound)?;
        // Listing order among the remaining products is not preserved.
        state.products.swap_remove(index);

        if let Some(repository) = &self.repository {
            repository.delete(&name).await?;
        }

        self.logger.info(&format!("Product deleted: {}", name));
        Ok(())
    }
}
