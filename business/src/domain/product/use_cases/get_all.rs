use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Full catalog listing; an empty catalog is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListing {
    Empty,
    Products(Vec<Product>),
}

impl ProductListing {
    pub fn from_products(products: Vec<Product>) -> Self {
        if products.is_empty() {
            ProductListing::Empty
        } else {
            ProductListing::Products(products)
        }
    }
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProductListing, ProductError>;
}
