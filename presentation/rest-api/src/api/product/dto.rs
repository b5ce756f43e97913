use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

/// Fields are optional so that validation messages come from the catalog, not the schema.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateAmountRequest {
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub name: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            category: product.category,
            amount: product.amount,
        }
    }
}
