use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::status::OperationStatus;
use crate::domain::product::use_cases::get_all::{GetAllProductsUseCase, ProductListing};

use super::manager::ProductsManager;

#[async_trait]
impl GetAllProductsUseCase for ProductsManager {
    async fn execute(&self) -> Result<ProductListing, ProductError> {
        self.logger.debug("Fetching all products");
        let mut state = self.lock().await;
        let listing = ProductListing::from_products(state.products.clone());
        self.settle(&mut state, Ok(listing), OperationStatus::Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{chair, mock_logger};
    use crate::domain::product::model::Product;
    use crate::domain::product::use_cases::create::CreateProductUseCase;
    use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

    #[tokio::test]
    async fn should_return_empty_listing_with_ok_status() {
        let manager = ProductsManager::in_memory(mock_logger());

        let result = GetAllProductsUseCase::execute(&manager).await;

        assert_eq!(result.unwrap(), ProductListing::Empty);
        assert_eq!(manager.last_status().await, OperationStatus::Ok);
    }

    #[tokio::test]
    async fn should_list_added_products() {
        let manager = ProductsManager::in_memory(mock_logger());
        CreateProductUseCase::execute(&manager, chair(Some(25.0)))
            .await
            .unwrap();

        let result = GetAllProductsUseCase::execute(&manager).await;

        assert_eq!(
            result.unwrap(),
            ProductListing::Products(vec![Product::from_repository(
                "Chair".to_string(),
                "A chair for your kitchen".to_string(),
                "Furniture".to_string(),
                25.0,
            )])
        );
        assert_eq!(manager.last_status().await, OperationStatus::Ok);
    }

    #[tokio::test]
    async fn should_reset_status_after_failed_operation() {
        let manager = ProductsManager::in_memory(mock_logger());
        let _ = DeleteProductUseCase::execute(
            &manager,
            DeleteProductParams {
                name: Some("Ghost".to_string()),
            },
        )
        .await;
        assert_eq!(manager.last_status().await, OperationStatus::NotFound);

        GetAllProductsUseCase::execute(&manager).await.unwrap();

        assert_eq!(manager.last_status().await, OperationStatus::Ok);
    }
}
