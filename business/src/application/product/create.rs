use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::status::OperationStatus;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

use super::manager::{CatalogState, ProductsManager, is_blank};

#[async_trait]
impl CreateProductUseCase for ProductsManager {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Adding product: {}",
            params.name.as_deref().unwrap_or_default()
        ));

        let mut state = self.lock().await;
        let result = self.add_product(&mut state, params).await;
        self.settle(&mut state, result, OperationStatus::Created)
    }
}

impl ProductsManager {
    async fn add_product(
        &self,
        state: &mut CatalogState,
        params: CreateProductParams,
    ) -> Result<Product, ProductError> {
        if is_blank(&params.name) || is_blank(&params.description) || is_blank(&params.category)
        {
            return Err(ProductError::MissingProductFields);
        }
        if params.amount.is_some_and(|amount| amount < 0.0) {
            return Err(ProductError::NegativeAmount);
        }
        if state
            .position(params.name.as_deref().unwrap_or_default())
            .is_some()
        {
            return Err(ProductError::AlreadyExists);
        }

        let product = Product::new(params.name, params.description, params.category, params.amount);
        state.products.push(product.clone());

        if let Some(repository) = &self.repository {
            repository.insert(&product).await?;
        }

        self.logger.info(&format!("Product added: {}", product.name));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::application::product::test_support::{
        MockProductRepo, chair, create_params, empty_store, mock_logger,
    };
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_add_product_when_fields_are_valid() {
        let manager = ProductsManager::in_memory(mock_logger());

        let result = CreateProductUseCase::execute(&manager, chair(Some(25.0))).await;

        let product = result.unwrap();
        assert_eq!(product.name, "Chair");
        assert_eq!(product.amount, 25.0);
        assert_eq!(manager.last_status().await, OperationStatus::Created);
        assert_eq!(manager.product_count().await, 1);
    }

    #[tokio::test]
    async fn should_default_amount_to_zero_when_missing() {
        let manager = ProductsManager::in_memory(mock_logger());

        let product = CreateProductUseCase::execute(&manager, chair(None))
            .await
            .unwrap();

        assert_eq!(product.amount, 0.0);
    }

    #[tokio::test]
    async fn should_reject_product_when_required_field_is_missing() {
        let manager = ProductsManager::in_memory(mock_logger());
        let params = CreateProductParams {
            name: Some("Chair".to_string()),
            description: None,
            category: Some("Furniture".to_string()),
            amount: Some(1.0),
        };

        let result = CreateProductUseCase::execute(&manager, params).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProductError::MissingProductFields));
        assert_eq!(err.to_string(), "name, description and category are required.");
        assert_eq!(manager.last_status().await, OperationStatus::BadRequest);
        assert_eq!(manager.product_count().await, 0);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_blank() {
        let manager = ProductsManager::in_memory(mock_logger());

        let result =
            CreateProductUseCase::execute(&manager, create_params("  ", "Desc", "Cat", None))
                .await;

        assert!(matches!(result, Err(ProductError::MissingProductFields)));
    }

    #[tokio::test]
    async fn should_report_missing_fields_before_negative_amount() {
        let manager = ProductsManager::in_memory(mock_logger());

        let result =
            CreateProductUseCase::execute(&manager, create_params("", "Desc", "Cat", Some(-1.0)))
                .await;

        assert!(matches!(result, Err(ProductError::MissingProductFields)));
    }

    #[tokio::test]
    async fn should_reject_product_when_amount_is_negative() {
        let manager = ProductsManager::in_memory(mock_logger());

        let result = CreateProductUseCase::execute(&manager, chair(Some(-1.0))).await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "amount must be higher or equal to 0");
        assert_eq!(manager.last_status().await, OperationStatus::BadRequest);
        assert_eq!(manager.product_count().await, 0);
    }

    #[tokio::test]
    async fn should_reject_duplicate_name_and_keep_single_product() {
        let manager = ProductsManager::in_memory(mock_logger());
        CreateProductUseCase::execute(&manager, chair(Some(25.0)))
            .await
            .unwrap();

        let result = CreateProductUseCase::execute(
            &manager,
            create_params("Chair", "Another chair", "Garden", Some(2.0)),
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "product with this name already exists.");
        assert_eq!(manager.last_status().await, OperationStatus::BadRequest);
        assert_eq!(manager.product_count().await, 1);
    }

    #[tokio::test]
    async fn should_write_product_through_to_store() {
        let mut mock_repo = empty_store();
        mock_repo.expect_insert().times(1).returning(|product| {
            assert_eq!(product.name, "Chair");
            assert_eq!(product.category, "Furniture");
            Ok(())
        });
        let manager = ProductsManager::load(Arc::new(mock_repo), mock_logger())
            .await
            .unwrap();

        let result = CreateProductUseCase::execute(&manager, chair(Some(25.0))).await;

        assert!(result.is_ok());
        assert_eq!(manager.last_status().await, OperationStatus::Created);
    }

    #[tokio::test]
    async fn should_not_touch_store_when_validation_fails() {
        let mut mock_repo = empty_store();
        mock_repo.expect_insert().never();
        let manager = ProductsManager::load(Arc::new(mock_repo), mock_logger())
            .await
            .unwrap();

        let result = CreateProductUseCase::execute(&manager, chair(Some(-3.0))).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_report_internal_error_and_keep_product_when_store_write_fails() {
        let mut mock_repo = empty_store();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::database_error("document failed validation")));
        let manager = ProductsManager::load(Arc::new(mock_repo), mock_logger())
            .await
            .unwrap();

        let result = CreateProductUseCase::execute(&manager, chair(Some(25.0))).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProductError::Repository(_)));
        assert!(err.to_string().contains("document failed validation"));
        assert_eq!(manager.last_status().await, OperationStatus::InternalError);
        assert_eq!(manager.product_count().await, 1);
    }

    #[tokio::test]
    async fn should_reject_duplicate_loaded_from_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_ensure_collection().returning(|| Ok(()));
        mock_repo.expect_find_all().returning(|| {
            Ok(vec![Product::from_repository(
                "Chair".to_string(),
                "A chair for your kitchen".to_string(),
                "Furniture".to_string(),
                25.0,
            )])
        });
        mock_repo.expect_insert().never();
        let manager = ProductsManager::load(Arc::new(mock_repo), mock_logger())
            .await
            .unwrap();

        let result = CreateProductUseCase::execute(&manager, chair(Some(1.0))).await;

        assert!(matches!(result, Err(ProductError::AlreadyExists)));
    }

    proptest! {
        #[test]
        fn should_reject_every_negative_amount(amount in -1.0e9f64..-1.0e-9) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            runtime.block_on(async {
                let manager = ProductsManager::in_memory(mock_logger());

                let result = CreateProductUseCase::execute(&manager, chair(Some(amount))).await;

                prop_assert!(matches!(result, Err(ProductError::NegativeAmount)));
                prop_assert_eq!(manager.product_count().await, 0);
                Ok(())
            })?;
        }
    }
}
