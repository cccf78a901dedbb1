//! Repository port traits
//!
//! These traits define the interface for catalog storage.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::CatalogItem;
use crate::domain::spec_params::CatalogFilter;
use crate::error::DomainError;

/// Storage for one kind of catalog entity
#[async_trait]
pub trait CatalogRepository<E: CatalogItem>: Send + Sync {
    /// Items matching `filter`, skipping `offset` and returning at most
    /// `limit`, along with the total number of matches.
    async fn find_page(
        &self,
        filter: &CatalogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<E>, i64), DomainError>;

    /// Find an item by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<E>, DomainError>;
}
