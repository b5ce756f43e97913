use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::CreateProductParams;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn ensure_collection(&self) -> Result<(), RepositoryError>;
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn update_amount(&self, name: &str, amount: f64) -> Result<(), RepositoryError>;
        async fn delete(&self, name: &str) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Repository that accepts the initial load with an empty collection.
pub fn empty_store() -> MockProductRepo {
    let mut mock_repo = MockProductRepo::new();
    mock_repo.expect_ensure_collection().returning(|| Ok(()));
    mock_repo.expect_find_all().returning(|| Ok(Vec::new()));
    mock_repo
}

pub fn create_params(
    name: &str,
    description: &str,
    category: &str,
    amount: Option<f64>,
) -> CreateProductParams {
    CreateProductParams {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        amount,
    }
}

pub fn chair(amount: Option<f64>) -> CreateProductParams {
    create_params("Chair", "A chair for your kitchen", "Furniture", amount)
}
