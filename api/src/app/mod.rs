//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services implement the domain service ports on top of catalog repositories.

pub mod catalog;
pub mod product_brand_service;
pub mod product_type_service;

pub use product_brand_service::ProductBrandCatalog;
pub use product_type_service::ProductTypeCatalog;
