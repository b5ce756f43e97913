/// Placeholder stored in text fields that were not supplied.
pub const NOT_AVAILABLE: &str = "N/A";

/// One catalog entry. `name` is unique within the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl Product {
    /// Builds a product from possibly missing fields.
    ///
    /// No validation happens here: missing text fields become [`NOT_AVAILABLE`]
    /// and a missing amount becomes `0`. Callers validate before constructing.
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        category: Option<String>,
        amount: Option<f64>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            description: description.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            category: category.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            amount: amount.unwrap_or(0.0),
        }
    }

    /// Constructor for data already persisted in the repository (no normalization).
    pub fn from_repository(name: String, description: String, category: String, amount: f64) -> Self {
        Self {
            name,
            description,
            category,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_supplied_fields() {
        let product = Product::new(
            Some("Chair".to_string()),
            Some("A chair for your kitchen".to_string()),
            Some("Furniture".to_string()),
            Some(25.0),
        );

        assert_eq!(product.name, "Chair");
        assert_eq!(product.description, "A chair for your kitchen");
        assert_eq!(product.category, "Furniture");
        assert_eq!(product.amount, 25.0);
    }

    #[test]
    fn should_normalize_missing_fields() {
        let product = Product::new(None, None, None, None);

        assert_eq!(product.name, NOT_AVAILABLE);
        assert_eq!(product.description, NOT_AVAILABLE);
        assert_eq!(product.category, NOT_AVAILABLE);
        assert_eq!(product.amount, 0.0);
    }
}
