use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub name: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.name, self.description, self.category, self.amount)
    }
}
