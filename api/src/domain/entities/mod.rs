//! Domain entities
//!
//! Plain value records for the catalog lookup tables.

pub mod product_brand;
pub mod product_type;

pub use product_brand::ProductBrand;
pub use product_type::ProductType;

/// Behaviour shared by every catalog lookup entity.
///
/// Lets repositories filter, search and sort brands and types the same way.
pub trait CatalogItem: Clone + Send + Sync + 'static {
    /// Human readable entity name used in error messages
    const KIND: &'static str;

    fn id(&self) -> i32;

    fn name(&self) -> &str;

    fn is_active(&self) -> bool;
}
