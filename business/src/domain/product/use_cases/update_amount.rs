use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateAmountParams {
    pub name: Option<String>,
    pub amount: Option<f64>,
}

#[async_trait]
pub trait UpdateAmountUseCase: Send + Sync {
    async fn execute(&self, params: UpdateAmountParams) -> Result<Product, ProductError>;
}
