use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::status::OperationStatus;
use crate::domain::product::use_cases::update_amount::{UpdateAmountParams, UpdateAmountUseCase};

use super::manager::{CatalogState, ProductsManager, is_blank};

#[async_trait]
impl UpdateAmountUseCase for ProductsManager {
    async fn execute(&self, params: UpdateAmountParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Updating amount of product: {}",
            params.name.as_deref().unwrap_or_default()
        ));

        let mut state = self.lock().await;
        let result = self.update_amount(&mut state, params).await;
        self.settle(&mut state, result, OperationStatus::Ok)
    }
}

impl ProductsManager {
    async fn update_amount(
        &self,
        state: &mut CatalogState,
        params: UpdateAmountParams,
    ) -> Result<Product, ProductError> {
        let amount = match params.amount {
            Some(amount) if !is_blank(&params.name) => amount,
            _ => return Err(ProductError::MissingUpdateFields),
        };
        if amount < 0.0 {
            return Err(ProductError::NegativeAmount);
        }

        let name = params.name.unwrap_or_default();
        let index = state.position(&name).ok_or(ProductError::NotFound)?;
        state.products[index].amount = amount;

        if let Some(repository) = &self.repository {
            repository.update_amount(&name, amount).await?;
        }

        self.logger
            .info(&format!("Product {} amount updated to {}", name, amount));
        Ok(state.products[index].clone())
    }
}
