use crate::domain::logger::Logger;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

/// Demo catalog: (name, description, category, amount).
pub const SAMPLE_PRODUCTS: [(&str, &str, &str, f64); 6] = [
    ("Chair", "A chair for your kitchen", "Furniture", 25.0),
    ("Table", "A nice looking table", "Kitchen", 3.0),
    ("Sofa", "White big comfy sofa!", "Living room", 2.0),
    (
        "Computer",
        "16GB RAM, OS Windows 10 Professional, i7, 1TB SSD",
        "Electronics",
        1.0,
    ),
    ("Keyboard", "Black, mech keyboard", "Electronics", 3.0),
    ("Mouse", "White simple mouse for pc", "Electronics", 3.0),
];

/// Adds the demo catalog through the regular create path and returns how many were added.
///
/// Rejected entries (e.g. already present) are logged and skipped.
pub async fn seed_sample_products(
    use_case: &dyn CreateProductUseCase,
    logger: &dyn Logger,
) -> usize {
    let mut added = 0;
    for (name, description, category, amount) in SAMPLE_PRODUCTS {
        let params = CreateProductParams {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            category: Some(category.to_string()),
            amount: Some(amount),
        };
        match use_case.execute(params).await {
            Ok(_) => added += 1,
            Err(err) => logger.warn(&format!("Skipping sample product {}: {}", name, err)),
        }
    }
    logger.info(&format!("Seeded {} sample products", added));
    added
}
