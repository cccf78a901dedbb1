//! Test fixtures
//!
//! Factory functions for creating catalog entities with sensible defaults.

use crate::domain::entities::{ProductBrand, ProductType};

/// Create an active brand
pub fn test_brand(id: i32, name: &str) -> ProductBrand {
    ProductBrand::new(id, name, true)
}

/// Create `count` active brands with ids `1..=count`
pub fn test_brands(count: i32) -> Vec<ProductBrand> {
    (1..=count)
        .map(|id| test_brand(id, &format!("Brand{}", id)))
        .collect()
}

/// Create an active product type
pub fn test_type(id: i32, name: &str) -> ProductType {
    ProductType::new(id, name, true)
}
