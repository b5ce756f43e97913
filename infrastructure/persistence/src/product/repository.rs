use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

/// Field shape enforced by the store: text name/description/category, numeric amount.
const CREATE_PRODUCTS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS products (
    name TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    amount DOUBLE PRECISION NOT NULL DEFAULT 0,
    inserted_at TIMESTAMPTZ NOT NULL DEFAULT now()
)"#;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Store-side failures become `DatabaseError`, everything else `Persistence`.
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::duplicated(),
        sqlx::Error::Database(_)
        | sqlx::Error::Io(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => RepositoryError::database_error(err.to_string()),
        _ => RepositoryError::persistence(err.to_string()),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn ensure_collection(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT name, description, category, amount FROM products ORDER BY inserted_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO products (name, description, category, amount) VALUES ($1, $2, $3, $4)",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.amount)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update_amount(&self, name: &str, amount: f64) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET amount = $1 WHERE name = $2")
            .bind(amount)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }
        Ok(())
    }
}
