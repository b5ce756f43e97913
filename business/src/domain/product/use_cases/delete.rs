use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub name: Option<String>,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
