use std::env;

/// Catalog startup options
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub seed_sample_products: bool,
}

impl CatalogConfig {
    /// Environment variables:
    /// - SEED_SAMPLE_PRODUCTS: "true" or "1" fills an empty catalog with demo products
    pub fn from_env() -> Self {
        Self {
            seed_sample_products: env::var("SEED_SAMPLE_PRODUCTS")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
