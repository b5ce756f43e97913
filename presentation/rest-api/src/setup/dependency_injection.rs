use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::manager::ProductsManager;
use business::application::product::seed::seed_sample_products;
use business::domain::logger::Logger;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Builds the single catalog manager for this process and hands it to every route.
    pub async fn new(pool: Option<sqlx::PgPool>, catalog: &CatalogConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("catalog"));

        let (manager, storage) = match pool {
            Some(pool) => {
                let repository = Arc::new(ProductRepositoryPostgres::new(pool));
                let manager = ProductsManager::load(repository, logger.clone()).await?;
                (manager, "postgres")
            }
            None => (ProductsManager::in_memory(logger.clone()), "in-memory"),
        };
        let manager = Arc::new(manager);

        if catalog.seed_sample_products && manager.product_count().await == 0 {
            seed_sample_products(manager.as_ref(), logger.as_ref()).await;
        }

        let health_api = crate::api::health::routes::Api::new(storage);
        let product_api = crate::api::product::routes::ProductApi::new(
            manager.clone(),
            manager.clone(),
            manager.clone(),
            manager,
        );

        Ok(Self {
            health_api,
            product_api,
        })
    }
}
